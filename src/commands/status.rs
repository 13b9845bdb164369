//! Shows today's coding total and the last-7-days breakdowns.

use crate::api::Client;
use crate::libs::config::{ConfigError, WakaConfig};
use crate::libs::formatter::format_seconds;
use crate::libs::messages::Message;
use crate::libs::spinner::TaskSpinner;
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let home = dirs::home_dir().ok_or_else(|| msg_error_anyhow!(Message::HomeDirUnavailable))?;
    let config = match WakaConfig::read(&home) {
        Ok(config) => config,
        Err(ConfigError::NotFound(_)) => {
            return Err(msg_error_anyhow!(Message::ConfigFileMissing));
        }
        Err(ConfigError::MissingSettings) => {
            return Err(msg_error_anyhow!(Message::ConfigMissingSettings));
        }
        Err(other) => {
            return Err(msg_error_anyhow!(Message::ConfigMalformed(other.to_string())));
        }
    };
    if config.api_key.is_empty() {
        return Err(msg_error_anyhow!(Message::NoApiKeyInConfig));
    }
    if config.api_url.is_empty() {
        return Err(msg_error_anyhow!(Message::NoApiUrlInConfig));
    }

    let client = Client::with_url(&config.api_key, &config.api_url);
    let mut spinner = TaskSpinner::new();

    let step = Message::StepFetchingTodayStats.to_string();
    spinner.start(&step).await;
    let today = match client.today_summary().await {
        Ok(today) => today,
        Err(err) => {
            spinner.fail(&step).await;
            if err.is_unauthorized() {
                return Err(msg_error_anyhow!(Message::ApiKeyRejected));
            }
            return Err(msg_error_anyhow!(Message::ApiUnexpectedError(err.to_string())));
        }
    };
    spinner.finish(&step).await;

    let step = Message::StepFetchingWeekStats.to_string();
    spinner.start(&step).await;
    let week = match client.last_7_days().await {
        Ok(week) => week,
        Err(err) => {
            spinner.fail(&step).await;
            if err.is_unauthorized() {
                return Err(msg_error_anyhow!(Message::ApiKeyRejected));
            }
            return Err(msg_error_anyhow!(Message::ApiUnexpectedError(err.to_string())));
        }
    };
    spinner.finish(&step).await;

    msg_print!(Message::TodayTotal(format_seconds(today.total_seconds())), true);
    msg_print!(Message::WeekTotal(
        week.data.human_readable_total.clone(),
        week.data.human_readable_daily_average.clone()
    ));

    View::usage(&Message::LanguagesHeader.to_string(), &week.data.languages)?;
    View::usage(&Message::EditorsHeader.to_string(), &week.data.editors)?;
    View::usage(&Message::ProjectsHeader.to_string(), &week.data.projects)?;

    Ok(())
}
