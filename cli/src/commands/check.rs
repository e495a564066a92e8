use std::process::ExitCode;

use colored::*;

use arise_common::config::Config;
use arise_common::{info, success};
use arise_core::network::ping::PingProber;
use arise_core::scanner;

use crate::commands::{TargetArgs, exit_code};
use crate::terminal::{colors, print};

pub async fn check(target: TargetArgs, cfg: &Config) -> anyhow::Result<ExitCode> {
    let prober = PingProber::new();

    info!("Probing {} candidate addresses...", target.candidates.len());
    let live = scanner::scan(&prober, &target.candidates, target.timeout).await;

    print::set_key_width(target.candidates.iter().map(|c| c.as_str().len()).max().unwrap_or(0));
    for candidate in &target.candidates {
        let status: ColoredString = if live.contains(candidate) {
            "online".color(colors::ONLINE).bold()
        } else {
            "offline".color(colors::OFFLINE)
        };
        print::aligned_line(candidate.as_str(), status);
    }

    if live.is_empty() {
        info!("No candidate responded");
    } else {
        success!("{} of {} candidates responded", live.len(), target.candidates.len());
    }

    print::end_of_program(cfg.quiet);
    Ok(exit_code(!live.is_empty()))
}
