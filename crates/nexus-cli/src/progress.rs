//! Terminal spinner implementing the core progress port.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use nexus_core::application::ports::{ProgressHandle, ProgressReporter};

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"];

/// Draws an `indicatif` spinner on stderr for each started operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinnerReporter;

impl ProgressReporter for SpinnerReporter {
    fn start(&self, message: &str) -> Box<dyn ProgressHandle> {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_strings(TICKS)
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Box::new(Spinner { bar })
    }
}

/// Cleared on drop unless [`ProgressHandle::finish`] ran first.
struct Spinner {
    bar: ProgressBar,
}

impl ProgressHandle for Spinner {
    fn finish(self: Box<Self>, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_and_drop_do_not_panic_without_a_terminal() {
        let reporter = SpinnerReporter;
        reporter.start("working").finish("done");
        drop(reporter.start("abandoned"));
    }
}
