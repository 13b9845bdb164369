//! API client modules for the time-tracking services takt talks to.
//!
//! The primary client speaks the WakaTime wire protocol and is used against
//! Hackatime (the expected backend) as well as against wakatime.com when the
//! doctor probes a misdirected configuration. All requests are authenticated
//! with HTTP Basic auth, carry a descriptive user agent, and run with a fixed
//! short timeout so a dead endpoint fails fast instead of hanging the
//! diagnostic.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use takt::api::Client;
//!
//! # async fn demo() -> Result<(), takt::api::ApiError> {
//! let client = Client::with_url("my-api-key", "https://hackatime.hackclub.com/api/hackatime/v1");
//! let summary = client.today_summary().await?;
//! println!("{} seconds today", summary.total_seconds());
//! # Ok(())
//! # }
//! ```

pub mod hackatime;

// Re-export the client surface for easier access from other modules
pub use hackatime::{ApiError, Client, Heartbeat, TodaySummary, WeekStats};
