//! Step-by-step diagnosis of a Hackatime setup.
//!
//! Walks a fixed checklist: operating system, config file, credentials,
//! API URL sanity, a live statistics fetch and a test heartbeat. Each step
//! either completes or aborts the run with a targeted remediation message;
//! there is no retry and no partial success.

use crate::api::hackatime::DEFAULT_API_URL;
use crate::api::{Client, Heartbeat};
use crate::libs::config::{ConfigError, WakaConfig, CONFIG_FILE_NAME};
use crate::libs::formatter::format_seconds;
use crate::libs::messages::Message;
use crate::libs::spinner::TaskSpinner;
use crate::{msg_error_anyhow, msg_print, msg_warning};
use anyhow::Result;
use std::env::consts::OS;
use std::path::Path;

/// Base URL a correctly configured Hackatime install points at.
pub const EXPECTED_API_URL: &str = "https://hackatime.hackclub.com/api/hackatime/v1";

const SUPPORTED_OS: [&str; 3] = ["linux", "macos", "windows"];

pub async fn cmd() -> Result<()> {
    let home = dirs::home_dir().ok_or_else(|| msg_error_anyhow!(Message::HomeDirUnavailable))?;
    let mut spinner = TaskSpinner::new();

    diagnose(&home, &mut spinner).await?;

    msg_print!(Message::DoctorAllGood);
    Ok(())
}

/// Runs the diagnostic checklist against the given home directory and
/// returns the formatted coding time for today. Taking the home directory
/// explicitly keeps the whole routine drivable from tests.
pub async fn diagnose(home: &Path, spinner: &mut TaskSpinner) -> Result<String> {
    let step = Message::StepCheckingOs.to_string();
    spinner.start(&step).await;
    let config_path = home.join(CONFIG_FILE_NAME);
    if !SUPPORTED_OS.contains(&OS) {
        spinner.fail(&step).await;
        return Err(msg_error_anyhow!(Message::UnrecognizedOs(OS.to_string())));
    }
    spinner.finish(&step).await;

    msg_print!(
        Message::OsConfigReport(OS.to_string(), config_path.display().to_string()),
        true
    );

    let step = Message::StepCheckingConfig.to_string();
    spinner.start(&step).await;
    let config = match WakaConfig::read(home) {
        Ok(config) => config,
        Err(err) => {
            spinner.fail(&step).await;
            return Err(config_error(err));
        }
    };
    spinner.finish(&step).await;

    let step = Message::StepVerifyingCredentials.to_string();
    spinner.start(&step).await;
    if config.api_key.is_empty() {
        spinner.fail(&step).await;
        return Err(msg_error_anyhow!(Message::ConfigMissingApiKey));
    }
    if config.api_url.is_empty() {
        spinner.fail(&step).await;
        return Err(msg_error_anyhow!(Message::ConfigMissingApiUrl));
    }
    spinner.finish(&step).await;

    let step = Message::StepValidatingApiUrl.to_string();
    spinner.start(&step).await;
    if config.api_url == EXPECTED_API_URL {
        spinner.finish(&step).await;
    } else if config.api_url == DEFAULT_API_URL {
        // The key points at wakatime.com; probe it there to tell the user
        // whether migration tooling is even relevant
        let probe = Client::new(&config.api_key).today_summary().await;
        spinner.fail(&step).await;
        return match probe {
            Err(err) if err.is_unauthorized() => {
                Err(msg_error_anyhow!(Message::WakatimeKeyInvalid))
            }
            _ => Err(msg_error_anyhow!(Message::WakatimeKeyValid)),
        };
    } else {
        spinner.warn(&step).await;
        msg_warning!(
            Message::ApiUrlMismatch(config.api_url.clone(), EXPECTED_API_URL.to_string()),
            true
        );
    }

    let client = Client::with_url(&config.api_key, &config.api_url);

    let step = Message::StepFetchingTodayStats.to_string();
    spinner.start(&step).await;
    let summary = match client.today_summary().await {
        Ok(summary) => summary,
        Err(err) => {
            spinner.fail(&step).await;
            if err.is_unauthorized() {
                return Err(msg_error_anyhow!(Message::ApiKeyRejected));
            }
            return Err(msg_error_anyhow!(Message::ApiUnexpectedError(err.to_string())));
        }
    };
    spinner.finish(&step).await;

    let formatted = format_seconds(summary.total_seconds());
    msg_print!(Message::CodedTodayReport(formatted.clone()), true);

    let step = Message::StepSendingHeartbeat.to_string();
    spinner.start(&step).await;
    if let Err(err) = client.send_heartbeat(&Heartbeat::synthetic(home)).await {
        spinner.fail(&step).await;
        return Err(msg_error_anyhow!(Message::HeartbeatSendFailed(
            err.to_string().trim().to_string()
        )));
    }
    spinner.finish(&step).await;

    Ok(formatted)
}

fn config_error(err: ConfigError) -> anyhow::Error {
    match err {
        ConfigError::NotFound(_) => msg_error_anyhow!(Message::ConfigFileMissing),
        ConfigError::MissingSettings => msg_error_anyhow!(Message::ConfigMissingSettings),
        other => msg_error_anyhow!(Message::ConfigMalformed(other.to_string())),
    }
}
