use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;

/// A stderr spinner shown while waiting on a remote call.
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub fn start(message: impl Into<String>) -> Self {
        Self::with_target(message, ProgressDrawTarget::stderr())
    }

    fn with_target(message: impl Into<String>, target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::new_spinner().with_message(message.into());
        pb.set_draw_target(target);
        if let Ok(style) = spinner_style() {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self { pb }
    }

    pub fn finish(self, message: impl Into<String>) {
        self.pb.disable_steady_tick();
        self.pb.finish_with_message(message.into());
    }

    pub fn abandon(self, message: impl Into<String>) {
        self.pb.disable_steady_tick();
        self.pb.abandon_with_message(message.into());
    }
}

fn spinner_style() -> Result<ProgressStyle, indicatif::style::TemplateError> {
    ProgressStyle::with_template("{spinner:.green} {msg}")
}
