use crate::msg_debug;
use base64::prelude::*;
use chrono::Utc;
use reqwest::{header, StatusCode};
use serde::{Deserialize, Serialize};
use std::env::consts::{ARCH, OS};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Base URL of the public wakatime.com API, used when no URL is given.
pub const DEFAULT_API_URL: &str = "https://api.wakatime.com/api/v1";

const STATUS_BAR_URL: &str = "users/current/statusbar/today";
const STATS_URL: &str = "users/current/stats/last_7_days";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to serialize heartbeat to JSON: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to send HTTP request: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unauthorized: invalid API key or insufficient permissions: {body}")]
    Unauthorized { body: String },
    #[error("received invalid status code {status} from API, response: {body}")]
    Status { status: StatusCode, body: String },
    #[error("failed to decode API response: {source}, response: {body}")]
    Decode {
        source: serde_json::Error,
        body: String,
    },
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

/// A coding activity heartbeat in the WakaTime wire format.
///
/// Optional fields are omitted from the JSON body entirely so the payload
/// matches what editor plugins send.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Heartbeat {
    pub entity: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_write: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "lines", skip_serializing_if = "Option::is_none")]
    pub line_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lineno: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursorpos: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_root_count: Option<i32>,
}

impl Heartbeat {
    /// Builds the fixed synthetic heartbeat the diagnostic commands send.
    /// The entity lives under the given home directory so the server sees
    /// a plausible file path without takt touching the filesystem.
    pub fn synthetic(home: &Path) -> Self {
        Self {
            entity: home.join("takt.txt").to_string_lossy().into_owned(),
            kind: "file".to_string(),
            time: Utc::now().timestamp() as f64,
            project: Some("example".to_string()),
            language: Some("Text".to_string()),
            is_write: Some(true),
            editor_name: None,
            branch: Some("main".to_string()),
            category: Some("coding".to_string()),
            line_count: Some(4),
            lineno: Some(1),
            cursorpos: Some(1),
            user_agent: None,
            entity_type: None,
            dependencies: None,
            project_root_count: Some(3),
        }
    }
}

/// Today's coding summary as returned by the status bar endpoint.
#[derive(Deserialize, Default, Debug)]
#[serde(default)]
pub struct TodaySummary {
    pub data: TodayData,
}

#[derive(Deserialize, Default, Debug)]
#[serde(default)]
pub struct TodayData {
    pub grand_total: GrandTotal,
}

#[derive(Deserialize, Default, Debug)]
#[serde(default)]
pub struct GrandTotal {
    pub text: String,
    pub total_seconds: f64,
}

impl TodaySummary {
    /// Whole seconds coded today. The service reports fractional seconds;
    /// sub-second precision is meaningless for display and is truncated.
    pub fn total_seconds(&self) -> u64 {
        self.data.grand_total.total_seconds.max(0.0) as u64
    }
}

/// Coding statistics for the last 7 days, with per-language, per-editor
/// and per-project breakdowns.
#[derive(Deserialize, Default, Debug)]
#[serde(default)]
pub struct WeekStats {
    pub data: WeekData,
}

#[derive(Deserialize, Default, Debug)]
#[serde(default)]
pub struct WeekData {
    pub total_seconds: f64,
    pub human_readable_total: String,
    pub daily_average: f64,
    pub human_readable_daily_average: String,
    pub languages: Vec<UsageEntry>,
    pub editors: Vec<UsageEntry>,
    pub projects: Vec<UsageEntry>,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct UsageEntry {
    pub name: String,
    pub total_seconds: f64,
    pub percent: f64,
    pub text: String,
}

pub struct Client {
    api_key: String,
    api_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Client against the default wakatime.com endpoint. The doctor uses
    /// this to probe whether a misdirected key is valid over there.
    pub fn new(api_key: &str) -> Self {
        Self::with_url(api_key, DEFAULT_API_URL)
    }

    pub fn with_url(api_key: &str, api_url: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Sends a heartbeat. The latest upstream revision submits heartbeats
    /// as GET with a JSON body against the status bar path; that revision
    /// is the wire contract takt reproduces.
    pub async fn send_heartbeat(&self, heartbeat: &Heartbeat) -> Result<(), ApiError> {
        let mut heartbeat = heartbeat.clone();
        if heartbeat.user_agent.is_none() {
            heartbeat.user_agent = Some(user_agent());
        }
        let body = serde_json::to_string(&heartbeat).map_err(ApiError::Serialize)?;

        let res = self
            .http
            .get(format!("{}/{}", self.api_url, STATUS_BAR_URL))
            .timeout(REQUEST_TIMEOUT)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, self.auth_header())
            .header(header::USER_AGENT, user_agent())
            .body(body)
            .send()
            .await?;

        self.read_success_body(res).await?;
        Ok(())
    }

    /// Fetches today's coding summary.
    pub async fn today_summary(&self) -> Result<TodaySummary, ApiError> {
        let res = self
            .http
            .get(format!("{}/{}", self.api_url, STATUS_BAR_URL))
            .timeout(REQUEST_TIMEOUT)
            .header(header::AUTHORIZATION, self.auth_header())
            .header(header::USER_AGENT, user_agent())
            .send()
            .await?;

        let body = self.read_success_body(res).await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode { source, body })
    }

    /// Fetches the last-7-days statistics.
    pub async fn last_7_days(&self) -> Result<WeekStats, ApiError> {
        let res = self
            .http
            .get(format!("{}/{}", self.api_url, STATS_URL))
            .timeout(REQUEST_TIMEOUT)
            .header(header::ACCEPT, "application/json")
            .header(header::AUTHORIZATION, self.auth_header())
            .header(header::USER_AGENT, user_agent())
            .send()
            .await?;

        let body = self.read_success_body(res).await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode { source, body })
    }

    fn auth_header(&self) -> String {
        format!("Basic {}", BASE64_STANDARD.encode(&self.api_key))
    }

    /// Reads the response body and maps 401 and other non-2xx statuses to
    /// their error kinds, keeping the raw body attached for diagnostics.
    async fn read_success_body(&self, res: reqwest::Response) -> Result<String, ApiError> {
        let status = res.status();
        let body = res.text().await?;
        msg_debug!(format!("API responded {} ({} bytes)", status, body.len()));

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized { body });
        }
        if !status.is_success() {
            return Err(ApiError::Status { status, body });
        }
        Ok(body)
    }
}

/// Descriptive client identifier sent with every request, in the format
/// editor plugins use so the server classifies takt traffic sensibly.
pub fn user_agent() -> String {
    format!(
        "wakatime/unset ({}-{}) {}/{}",
        OS,
        ARCH,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}
