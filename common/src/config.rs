use std::net::Ipv4Addr;
use std::time::Duration;

use crate::network::{candidate::Candidate, mac::HardwareAddr};

pub const DEFAULT_BROADCAST: Ipv4Addr = Ipv4Addr::BROADCAST;
pub const DEFAULT_ATTEMPTS: u32 = 5;
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(2);
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(2);
pub const DEFAULT_THROBBER: Duration = Duration::from_secs(1);

/// Presentation options for the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Skips the banner on startup.
    pub no_banner: bool,
    /// `1` hides headers and the throbber, `2` also hides progress messages.
    pub quiet: u8,
}

/// Everything a wake run needs, decided before the first probe is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WakeConfig {
    /// Addresses the target may answer on, probed in this order.
    pub candidates: Vec<Candidate>,
    /// Card that receives the magic packet.
    pub mac: HardwareAddr,
    /// Destination of the magic packet.
    pub broadcast: Ipv4Addr,
    /// Maximum number of scan cycles after the packet was sent.
    pub attempts: u32,
    /// Pause after each unsuccessful scan cycle.
    pub interval: Duration,
    /// Time a single probe may take before it counts as unreachable.
    pub probe_timeout: Duration,
    /// How long the progress indicator runs before each scan cycle.
    pub throbber: Duration,
}

impl WakeConfig {
    pub fn new(candidates: Vec<Candidate>, mac: HardwareAddr) -> Self {
        Self {
            candidates,
            mac,
            broadcast: DEFAULT_BROADCAST,
            attempts: DEFAULT_ATTEMPTS,
            interval: DEFAULT_INTERVAL,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            throbber: DEFAULT_THROBBER,
        }
    }
}
