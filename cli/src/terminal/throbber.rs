use std::time::Duration;

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use arise_core::indicator::{Indicator, Silent};

const TICK: Duration = Duration::from_millis(100);

// The last entry is only drawn once the bar is finished.
const FRAMES: &[&str] = &["┌──┐", "│◐ │", "│ ─┘", "│◑ │", "└──┘"];

/// Redraws a small animation on one line while the workflow waits.
///
/// Ticks come from indicatif's own ticker thread, so the animation never
/// holds up the caller past the requested duration.
pub struct Throbber;

#[async_trait]
impl Indicator for Throbber {
    async fn show(&self, duration: Duration) {
        let pb: ProgressBar = spinner();
        pb.enable_steady_tick(TICK);

        tokio::time::sleep(duration).await;

        pb.finish_and_clear();
    }
}

fn spinner() -> ProgressBar {
    let pb: ProgressBar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
    if let Ok(style) = ProgressStyle::with_template("{msg} {spinner:.blue}") {
        pb.set_style(style.tick_strings(FRAMES));
    }
    pb.set_message("Scanning...");
    pb
}

/// The throbber, unless output is quieted.
pub fn indicator(quiet: u8) -> Box<dyn Indicator> {
    match quiet {
        0 => Box::new(Throbber),
        _ => Box::new(Silent),
    }
}
