#[cfg(test)]
mod tests {
    use std::path::Path;
    use takt::api::{ApiError, Client, Heartbeat};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::sync::mpsc;

    const TODAY_JSON: &str =
        r#"{"data":{"grand_total":{"text":"2 hrs 3 mins","total_seconds":7384}}}"#;

    /// One HTTP request as seen by the stub server.
    struct RecordedRequest {
        line: String,
        headers: Vec<String>,
        body: String,
    }

    impl RecordedRequest {
        fn header(&self, name: &str) -> Option<String> {
            self.headers.iter().find_map(|header| {
                let (key, value) = header.split_once(':')?;
                key.trim()
                    .eq_ignore_ascii_case(name)
                    .then(|| value.trim().to_string())
            })
        }
    }

    /// Binds a one-shot HTTP stub that answers every request with the
    /// given status and body, recording requests on a channel.
    async fn spawn_stub(
        status: u16,
        body: &'static str,
    ) -> (String, mpsc::UnboundedReceiver<RecordedRequest>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let tx = tx.clone();
                tokio::spawn(async move {
                    let request = read_request(&mut socket).await;
                    let response = format!(
                        "HTTP/1.1 {} STUB\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                    let _ = tx.send(request);
                });
            }
        });

        (format!("http://{}", addr), rx)
    }

    async fn read_request(socket: &mut TcpStream) -> RecordedRequest {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        while find_header_end(&buf).is_none() {
            match socket.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => buf.extend_from_slice(&chunk[..n]),
            }
        }

        let header_end = find_header_end(&buf).unwrap_or(buf.len());
        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let mut lines = head.lines();
        let line = lines.next().unwrap_or_default().to_string();
        let headers: Vec<String> = lines.map(|text| text.to_string()).collect();

        let content_length = headers
            .iter()
            .find_map(|header| {
                let (key, value) = header.split_once(':')?;
                if key.trim().eq_ignore_ascii_case("content-length") {
                    value.trim().parse::<usize>().ok()
                } else {
                    None
                }
            })
            .unwrap_or(0);

        let body_start = (header_end + 4).min(buf.len());
        let mut body = buf[body_start..].to_vec();
        while body.len() < content_length {
            match socket.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => body.extend_from_slice(&chunk[..n]),
            }
        }

        RecordedRequest {
            line,
            headers,
            body: String::from_utf8_lossy(&body).to_string(),
        }
    }

    fn find_header_end(buf: &[u8]) -> Option<usize> {
        buf.windows(4).position(|window| window == b"\r\n\r\n")
    }

    #[tokio::test]
    async fn test_today_summary_decodes_total_seconds() {
        let (url, _rx) = spawn_stub(200, TODAY_JSON).await;
        let client = Client::with_url("key", &url);

        let summary = client.today_summary().await.unwrap();
        assert_eq!(summary.total_seconds(), 7384);
        assert_eq!(summary.data.grand_total.text, "2 hrs 3 mins");
    }

    #[tokio::test]
    async fn test_unauthorized_is_its_own_error_kind() {
        let (url, _rx) = spawn_stub(401, r#"{"error":"Unauthorized"}"#).await;
        let client = Client::with_url("bad-key", &url);

        let err = client.today_summary().await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(matches!(err, ApiError::Unauthorized { .. }));

        let err = client
            .send_heartbeat(&Heartbeat::synthetic(Path::new("/home/tester")))
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_other_status_codes_are_not_unauthorized() {
        let (url, _rx) = spawn_stub(500, "internal error").await;
        let client = Client::with_url("key", &url);

        let err = client.today_summary().await.unwrap_err();
        assert!(!err.is_unauthorized());
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_undecodable_success_body() {
        let (url, _rx) = spawn_stub(200, "this is not json").await;
        let client = Client::with_url("key", &url);

        let err = client.today_summary().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert!(err.to_string().contains("this is not json"));
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        // Bind and immediately drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::with_url("key", &format!("http://{}", addr));
        let err = client.today_summary().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_trailing_slash_does_not_change_request_target() {
        let (url, mut rx) = spawn_stub(200, TODAY_JSON).await;

        Client::with_url("key", &url).today_summary().await.unwrap();
        Client::with_url("key", &format!("{}/", url))
            .today_summary()
            .await
            .unwrap();

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first.line, "GET /users/current/statusbar/today HTTP/1.1");
        assert_eq!(first.line, second.line);
    }

    #[tokio::test]
    async fn test_basic_auth_carries_base64_key() {
        let (url, mut rx) = spawn_stub(200, TODAY_JSON).await;
        Client::with_url("sekret", &url).today_summary().await.unwrap();

        let request = rx.recv().await.unwrap();
        // "sekret" base64-encoded
        assert_eq!(request.header("authorization").unwrap(), "Basic c2VrcmV0");
        assert!(request.header("user-agent").unwrap().contains("takt"));
    }

    #[tokio::test]
    async fn test_last_7_days_decodes_breakdowns() {
        let week_json = r#"{"data":{
            "total_seconds":36000.5,
            "human_readable_total":"10 hrs",
            "daily_average":5142.9,
            "human_readable_daily_average":"1 hr 25 mins",
            "languages":[{"name":"Rust","total_seconds":30000.0,"percent":83.3,"text":"8 hrs 20 mins"}],
            "editors":[{"name":"Helix","total_seconds":36000.5,"percent":100.0,"text":"10 hrs"}],
            "projects":[]
        }}"#;
        let (url, mut rx) = spawn_stub(200, week_json).await;

        let stats = Client::with_url("key", &url).last_7_days().await.unwrap();
        assert_eq!(stats.data.human_readable_total, "10 hrs");
        assert_eq!(stats.data.languages.len(), 1);
        assert_eq!(stats.data.languages[0].name, "Rust");
        assert!(stats.data.projects.is_empty());

        let request = rx.recv().await.unwrap();
        assert_eq!(request.line, "GET /users/current/stats/last_7_days HTTP/1.1");
        assert_eq!(request.header("accept").unwrap(), "application/json");
    }

    #[tokio::test]
    async fn test_send_heartbeat_then_fetch_summary() {
        let (url, mut rx) = spawn_stub(200, TODAY_JSON).await;
        let client = Client::with_url("key", &url);

        client
            .send_heartbeat(&Heartbeat::synthetic(Path::new("/home/tester")))
            .await
            .unwrap();
        let summary = client.today_summary().await.unwrap();
        assert_eq!(summary.total_seconds(), 7384);

        // The heartbeat goes out as JSON with the wire field names, and the
        // client fills in its user agent. Recording order across stub
        // connections is not guaranteed; the heartbeat is the one with a body.
        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        let request = if first.body.is_empty() { second } else { first };
        let payload: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(payload["type"], "file");
        assert!(payload["entity"].as_str().unwrap().ends_with("takt.txt"));
        assert!(payload["user_agent"].as_str().unwrap().contains("takt"));
        assert_eq!(request.header("content-type").unwrap(), "application/json");
    }
}
