//! Animated status line for long-running diagnostic steps.
//!
//! A [`TaskSpinner`] is owned by the command that runs a checklist and is
//! passed by reference to each step. Starting a new step cancels the
//! previous animation before the next one is spawned, and every outcome
//! method joins the animation task before printing, so a stray frame can
//! never interleave with the final status line.
//!
//! The spinner is purely cosmetic: it carries no workflow data, and
//! dropping the struct stops the background task (the closed cancellation
//! channel resolves its select loop).

use std::io::{self, Write};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

const FRAMES: [&str; 4] = ["[|]", "[/]", "[-]", "[\\]"];
const TICK: Duration = Duration::from_millis(100);

/// Clears the current terminal line and returns the cursor to column 0.
const CLEAR_LINE: &str = "\r\x1b[K";

pub struct TaskSpinner {
    current: Option<SpinnerHandle>,
}

struct SpinnerHandle {
    stop: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl TaskSpinner {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Starts animating `label`, cancelling any step already in progress.
    pub async fn start(&mut self, label: &str) {
        self.stop_current().await;

        let label = label.to_string();
        let (stop, mut stopped) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            let mut ticker = interval(TICK);
            let mut frame = 0usize;
            loop {
                tokio::select! {
                    _ = &mut stopped => break,
                    _ = ticker.tick() => {
                        print!("{}{} {}", CLEAR_LINE, FRAMES[frame % FRAMES.len()], label);
                        let _ = io::stdout().flush();
                        frame += 1;
                    }
                }
            }
        });

        self.current = Some(SpinnerHandle { stop, task });
    }

    /// Stops the animation and prints `label` as completed.
    pub async fn finish(&mut self, label: &str) {
        self.stop_current().await;
        println!("{}✅ {}", CLEAR_LINE, label);
    }

    /// Stops the animation and prints `label` as failed.
    pub async fn fail(&mut self, label: &str) {
        self.stop_current().await;
        println!("{}❌ {}", CLEAR_LINE, label);
    }

    /// Stops the animation and prints `label` as a warning.
    pub async fn warn(&mut self, label: &str) {
        self.stop_current().await;
        println!("{}⚠️ {}", CLEAR_LINE, label);
    }

    async fn stop_current(&mut self) {
        if let Some(handle) = self.current.take() {
            let _ = handle.stop.send(());
            // Join before printing anything else on this line
            let _ = handle.task.await;
        }
    }
}

impl Default for TaskSpinner {
    fn default() -> Self {
        Self::new()
    }
}
