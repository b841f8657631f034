//! Spinner shown while a reply is loading

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner standing in for a loading placeholder.
///
/// Lines printed through [`LoadingIndicator::println`] appear above the
/// spinner without tearing it.
pub struct LoadingIndicator {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl LoadingIndicator {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("      {spinner:.green} {msg:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Show the spinner, or update its message if already visible
    pub fn show(&mut self, message: &str) {
        if !self.enabled {
            return;
        }
        match &self.bar {
            Some(bar) => bar.set_message(message.to_string()),
            None => {
                let bar = ProgressBar::new_spinner();
                bar.set_style(Self::spinner_style());
                bar.set_message(message.to_string());
                bar.enable_steady_tick(Duration::from_millis(80));
                self.bar = Some(bar);
            }
        }
    }

    pub fn hide(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    pub fn println(&self, line: &str) {
        match &self.bar {
            Some(bar) => bar.suspend(|| println!("{}", line)),
            None => println!("{}", line),
        }
    }
}

impl Drop for LoadingIndicator {
    fn drop(&mut self) {
        self.hide();
    }
}
