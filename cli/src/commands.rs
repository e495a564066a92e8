pub mod check;
pub mod send;
pub mod wake;

use std::net::Ipv4Addr;
use std::process::ExitCode;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};

use arise_common::config::{DEFAULT_ATTEMPTS, DEFAULT_BROADCAST, WakeConfig};
use arise_common::network::{candidate::Candidate, mac::HardwareAddr};

/// Exit status when the target never answered.
pub const EXIT_NO_RESPONSE: u8 = 2;

#[derive(Parser)]
#[command(name = "arise", version)]
#[command(about = "Checks whether a machine is up and wakes it over the network if it is not.")]
pub struct CommandLine {
    /// Less output: -q hides the banner and throbber, -qq also progress messages
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Wake a machine if it is off and wait until it responds
    #[command(alias = "w")]
    Wake {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        wol: WolArgs,
        #[command(flatten)]
        retry: RetryArgs,
    },
    /// Show which candidate addresses respond, without waking anything
    #[command(alias = "c")]
    Check {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Send a single magic packet and exit
    #[command(alias = "s")]
    Send {
        #[command(flatten)]
        wol: WolArgs,
    },
}

#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Addresses the machine may answer on (IPv4, IPv6 or hostname), probed in order
    #[arg(required = true, num_args = 1.., value_delimiter = ',')]
    pub candidates: Vec<Candidate>,

    /// Time a single ping may take, e.g. "2s" or "500ms"
    #[arg(short, long, env = "ARISE_TIMEOUT", default_value = "2s", value_parser = humantime::parse_duration)]
    pub timeout: Duration,
}

#[derive(Args, Debug)]
pub struct WolArgs {
    /// Hardware address of the machine to wake, e.g. "aa:bb:cc:dd:ee:ff"
    #[arg(short, long, env = "ARISE_MAC")]
    pub mac: HardwareAddr,

    /// Broadcast address the magic packet is sent to
    #[arg(short, long, env = "ARISE_BROADCAST", default_value_t = DEFAULT_BROADCAST)]
    pub broadcast: Ipv4Addr,
}

#[derive(Args, Debug)]
pub struct RetryArgs {
    /// Maximum number of scan cycles after the packet was sent
    #[arg(short, long, env = "ARISE_ATTEMPTS", default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: u32,

    /// Pause after a scan cycle without response
    #[arg(short, long, env = "ARISE_INTERVAL", default_value = "2s", value_parser = humantime::parse_duration)]
    pub interval: Duration,

    /// How long the throbber spins before each scan cycle
    #[arg(long, default_value = "1s", value_parser = humantime::parse_duration)]
    pub throbber: Duration,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

pub fn wake_config(target: TargetArgs, wol: WolArgs, retry: RetryArgs) -> WakeConfig {
    WakeConfig {
        broadcast: wol.broadcast,
        attempts: retry.attempts,
        interval: retry.interval,
        probe_timeout: target.timeout,
        throbber: retry.throbber,
        ..WakeConfig::new(target.candidates, wol.mac)
    }
}

pub fn exit_code(online: bool) -> ExitCode {
    if online {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_NO_RESPONSE)
    }
}
