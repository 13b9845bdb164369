//! Display implementation for takt application messages.
//!
//! All user-facing text lives here, in one place, so commands format
//! messages by constructing a [`Message`] variant instead of scattering
//! string literals. Remediation messages point at the Hackatime setup
//! page whenever the fix is "redo the setup".

use super::types::Message;
use std::fmt;

const SETUP_URL: &str = "https://hackatime.hackclub.com/my/wakatime_setup";
const SETTINGS_URL: &str = "https://hackatime.hackclub.com/my/settings";
const RELAY_URL: &str = "https://github.com/JasonLovesDoggo/multitime";

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === STEP LABELS ===
            Message::StepCheckingOs => "Checking operating system".to_string(),
            Message::StepCheckingConfig => "Checking wakatime config file".to_string(),
            Message::StepVerifyingCredentials => "Verifying API credentials".to_string(),
            Message::StepValidatingApiUrl => "Validating API URL".to_string(),
            Message::StepFetchingTodayStats => "Checking your coding stats for today".to_string(),
            Message::StepFetchingWeekStats => "Fetching your last 7 days of stats".to_string(),
            Message::StepSendingHeartbeat => "Sending test heartbeat".to_string(),
            Message::StepValidatingArgs => "Validating arguments".to_string(),
            Message::StepArgsValid => "Arguments look fine!".to_string(),
            Message::StepLoadingClient => "Loading api client".to_string(),

            // === ENVIRONMENT MESSAGES ===
            Message::HomeDirUnavailable => {
                "Could not resolve your home directory, so there is no way to locate your .wakatime.cfg".to_string()
            }
            Message::UnrecognizedOs(os) => format!(
                "You don't seem to be running a recognized operating system (reported: {}); takt knows linux, macos and windows",
                os
            ),

            // === DOCTOR MESSAGES ===
            Message::OsConfigReport(os, path) => format!(
                "Looks like you are running {}, so let's take a look at {} for your config",
                os, path
            ),
            Message::ConfigFileMissing => format!(
                "You don't have a wakatime config file! Check {} for the setup instructions and then try this again",
                SETUP_URL
            ),
            Message::ConfigMalformed(err) => format!(
                "Your config file could not be parsed; follow the instructions at {} to regenerate it\n\nThe raw error was: {}",
                SETUP_URL, err
            ),
            Message::ConfigMissingSettings => format!(
                "Your config file has no [settings] section; follow the instructions at {} to regenerate it",
                SETUP_URL
            ),
            Message::ConfigMissingApiKey => format!(
                "Looks like there is no api_key in your config file; are you sure you followed the setup instructions at {} correctly?",
                SETUP_URL
            ),
            Message::ConfigMissingApiUrl => format!(
                "Looks like there is no api_url in your config file; are you sure you followed the setup instructions at {} correctly?",
                SETUP_URL
            ),
            Message::WakatimeKeyValid => format!(
                "Your config is connected to wakatime.com instead of Hackatime, and your key works there. \
                To keep syncing to both you can set up a relay like {}, or import your wakatime.com history \
                into Hackatime under integrations at {}",
                RELAY_URL, SETTINGS_URL
            ),
            Message::WakatimeKeyInvalid => format!(
                "Your config is connected to the wrong api url and tries to sync time to wakatime.com, \
                but your key is not valid there either. Go to {} to run the setup script and fix your config file",
                SETUP_URL
            ),
            Message::ApiUrlMismatch(found, expected) => format!(
                "Your api url {} doesn't match the expected url of {}; if you are using a custom forwarder \
                or are sure you know what you are doing then you are probably fine",
                found, expected
            ),
            Message::ApiKeyRejected => format!(
                "Your config file looks mostly correct and you have the correct api url, but the server \
                rejected your api_key. Double-check that the key in your config file matches the one at {}",
                SETUP_URL
            ),
            Message::ApiUnexpectedError(err) => format!(
                "Something unexpected happened talking to the Hackatime API\n\nFull error: {}",
                err
            ),
            Message::CodedTodayReport(time) => format!(
                "Sweet! Your Hackatime setup is working. Looks like you have coded today for {}",
                time
            ),
            Message::HeartbeatSendFailed(err) => format!(
                "Something went wrong while sending that heartbeat. Full error: \"{}\"",
                err
            ),
            Message::DoctorAllGood => "🥳 It worked! You are good to go. Happy coding 👋".to_string(),

            // === TEST HEARTBEAT MESSAGES ===
            Message::ConfigUnavailableNoArgs => {
                "Config file not found and you haven't passed all arguments".to_string()
            }
            Message::NoSettingsSection => "No settings section in your config".to_string(),
            Message::NoApiKeyInConfig => "Couldn't find an api_key in your config".to_string(),
            Message::NoApiUrlInConfig => "Couldn't find an api_url in your config".to_string(),
            Message::SendingHeartbeatTo(url) => format!("Sending a test heartbeat to {}", url),
            Message::HeartbeatSent => "Test heartbeat sent!".to_string(),

            // === STATUS MESSAGES ===
            Message::TodayTotal(time) => format!("Coding time today: {}", time),
            Message::WeekTotal(total, average) => {
                format!("Last 7 days: {} (daily average {})", total, average)
            }
            Message::LanguagesHeader => "Languages".to_string(),
            Message::EditorsHeader => "Editors".to_string(),
            Message::ProjectsHeader => "Projects".to_string(),
        };
        write!(f, "{}", text)
    }
}
