use colored::*;

use arise_common::config::WakeConfig;
use arise_common::network::candidate::{Candidate, IpFamily};
use arise_common::network::mac::HardwareAddr;

use crate::terminal::colors;

type Detail = (String, ColoredString);

/// The settings of a wake run, one tree entry each.
pub fn wake_details(cfg: &WakeConfig) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![mac_to_detail(&cfg.mac)];
    details.extend(cfg.candidates.iter().map(candidate_to_detail));
    details.push((
        "Broadcast".to_string(),
        cfg.broadcast.to_string().color(colors::IPV4_ADDR),
    ));
    details.push((
        "Budget".to_string(),
        format!(
            "{} cycles, {} apart",
            cfg.attempts,
            humantime::format_duration(cfg.interval)
        )
        .color(colors::ACCENT),
    ));
    details.push((
        "Timeout".to_string(),
        humantime::format_duration(cfg.probe_timeout)
            .to_string()
            .color(colors::ACCENT),
    ));
    details
}

fn mac_to_detail(mac: &HardwareAddr) -> Detail {
    let value = match mac.vendor() {
        Some(vendor) => format!("{} ({})", mac.to_string().color(colors::MAC_ADDR), vendor).normal(),
        None => mac.to_string().color(colors::MAC_ADDR),
    };
    ("MAC".to_string(), value)
}

fn candidate_to_detail(candidate: &Candidate) -> Detail {
    match candidate.family() {
        IpFamily::V4 => ("IPv4".to_string(), candidate.as_str().color(colors::IPV4_ADDR)),
        IpFamily::V6 => ("IPv6".to_string(), candidate.as_str().color(colors::IPV6_ADDR)),
    }
}
