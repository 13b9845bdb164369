//! # Takt - Hackatime diagnostic helper
//!
//! A command-line utility for checking a Hackatime time-tracking setup
//! end to end: configuration file, API credentials, connectivity and
//! coding-time statistics.
//!
//! ## Features
//!
//! - **Doctor**: Step-by-step diagnosis of the local `.wakatime.cfg` and
//!   the remote API, with targeted remediation messages
//! - **Test Heartbeats**: Send a synthetic heartbeat to verify that
//!   activity tracking reaches the server
//! - **Statistics**: Today's coding total and a 7-day breakdown by
//!   language, editor and project
//!
//! ## Usage
//!
//! ```rust,no_run
//! use takt::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
