//! CLI progress callback backed by a stderr spinner

use crate::cli::style::spinner_style;
use async_trait::async_trait;
use failticket::workflow::{Phase, ProgressCallback};
use indicatif::ProgressBar;
use std::time::Duration;

/// Spinner that shows the current pipeline phase
///
/// Hidden automatically when stderr is not a terminal.
pub struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    /// Create a spinner that stays hidden until the first phase
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        Self { spinner }
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        if phase == Phase::Complete {
            self.spinner.finish_and_clear();
            return;
        }
        self.spinner.set_message(format!("{phase}..."));
        self.spinner.enable_steady_tick(Duration::from_millis(80));
    }
}
