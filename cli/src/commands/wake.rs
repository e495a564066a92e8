use std::process::ExitCode;

use anyhow::Context;

use arise_common::config::{Config, WakeConfig};
use arise_common::network::candidate;
use arise_common::{success, warn};
use arise_core::network::{ping::PingProber, udp::UdpWaker};
use arise_core::wake::{Outcome, WakeService};

use crate::commands::exit_code;
use crate::terminal::{format, print, throbber};

pub async fn wake(wake_cfg: WakeConfig, cfg: &Config) -> anyhow::Result<ExitCode> {
    if cfg.quiet == 0 {
        print::as_tree_one_level(format::wake_details(&wake_cfg));
    }

    let service = WakeService::new(
        Box::new(PingProber::new()),
        Box::new(UdpWaker::new()),
        throbber::indicator(cfg.quiet),
    );

    let outcome = service
        .run(&wake_cfg)
        .await
        .context("could not send the Wake-on-LAN packet")?;

    report(&outcome);
    print::end_of_program(cfg.quiet);
    Ok(exit_code(outcome.is_online()))
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::AlreadyOnline { responders } => {
            success!("Target is already on. Responding addresses: {}", candidate::join(responders));
        }
        Outcome::Woke { responders, cycles } => {
            let unit = if *cycles == 1 { "scan cycle" } else { "scan cycles" };
            success!(
                "Target is now online after {cycles} {unit}. Responding addresses: {}",
                candidate::join(responders)
            );
        }
        Outcome::Exhausted { attempts } => {
            warn!("Target did not wake up after {attempts} scan cycles.");
        }
    }
}
