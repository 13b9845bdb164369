//! Sends a single synthetic heartbeat to verify a credential pair.
//!
//! Credentials come from `--key`/`--url` flags, falling back to the config
//! file for whichever value is missing. Unlike the doctor this skips the
//! OS and URL heuristics: it validates the pair with one summary fetch and
//! then sends the test heartbeat.

use crate::api::{Client, Heartbeat};
use crate::libs::config::{ConfigError, WakaConfig};
use crate::libs::messages::Message;
use crate::libs::spinner::TaskSpinner;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct HeartbeatArgs {
    #[arg(long, help = "API key to use instead of the config file")]
    key: Option<String>,
    #[arg(long, help = "API base URL to use instead of the config file")]
    url: Option<String>,
}

pub async fn cmd(args: HeartbeatArgs) -> Result<()> {
    let mut spinner = TaskSpinner::new();

    let step = Message::StepValidatingArgs.to_string();
    spinner.start(&step).await;
    let home = match dirs::home_dir() {
        Some(home) => home,
        None => {
            spinner.fail(&step).await;
            return Err(msg_error_anyhow!(Message::HomeDirUnavailable));
        }
    };
    let (api_key, api_url) = match resolve_credentials(&home, args.key, args.url) {
        Ok(credentials) => credentials,
        Err(err) => {
            spinner.fail(&step).await;
            return Err(err);
        }
    };
    spinner.finish(&Message::StepArgsValid.to_string()).await;

    let step = Message::StepLoadingClient.to_string();
    spinner.start(&step).await;
    let client = Client::with_url(&api_key, &api_url);
    if let Err(err) = client.today_summary().await {
        spinner.fail(&step).await;
        return Err(err.into());
    }
    spinner.finish(&step).await;

    msg_print!(Message::SendingHeartbeatTo(client.api_url().to_string()));

    let step = Message::StepSendingHeartbeat.to_string();
    spinner.start(&step).await;
    if let Err(err) = client.send_heartbeat(&Heartbeat::synthetic(&home)).await {
        spinner.fail(&step).await;
        return Err(err.into());
    }
    spinner.finish(&step).await;

    msg_success!(Message::HeartbeatSent);
    Ok(())
}

/// Resolves the key/url pair from flags, reading the config file only for
/// values the flags did not provide.
pub fn resolve_credentials(
    home: &Path,
    key: Option<String>,
    url: Option<String>,
) -> Result<(String, String)> {
    if let (Some(key), Some(url)) = (&key, &url) {
        return Ok((key.clone(), url.clone()));
    }

    let config = match WakaConfig::read(home) {
        Ok(config) => config,
        Err(ConfigError::MissingSettings) => msg_bail_anyhow!(Message::NoSettingsSection),
        Err(_) => msg_bail_anyhow!(Message::ConfigUnavailableNoArgs),
    };

    let api_key = match key {
        Some(key) => key,
        None if config.api_key.is_empty() => msg_bail_anyhow!(Message::NoApiKeyInConfig),
        None => config.api_key,
    };
    let api_url = match url {
        Some(url) => url,
        None if config.api_url.is_empty() => msg_bail_anyhow!(Message::NoApiUrlInConfig),
        None => config.api_url,
    };

    Ok((api_key, api_url))
}
