//! Progress reporting for the long-running workflows.
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Receives `(fraction, message)` updates while a workflow runs.
///
/// `fraction` is in `[0, 1]` and never decreases within one workflow.
pub trait Progress {
    fn report(&self, fraction: f32, message: &str);
}

/// Discards every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn report(&self, _fraction: f32, _message: &str) {}
}

impl<P: Progress + ?Sized> Progress for &P {
    fn report(&self, fraction: f32, message: &str) {
        (**self).report(fraction, message);
    }
}

/// Terminal progress bar driven by workflow updates.
pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    const STEPS: u64 = 100;

    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new(Self::STEPS);
        let style = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {percent:>3}% {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");

        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }

    /// Hidden bar, for non-interactive output.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}

impl Progress for ProgressTracker {
    fn report(&self, fraction: f32, message: &str) {
        let position = (fraction.clamp(0.0, 1.0) * Self::STEPS as f32).round() as u64;
        self.bar.set_position(position);
        self.bar.set_message(message.to_string());
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
