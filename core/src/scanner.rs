//! The **scan aggregator**: one pass of the prober over every candidate.
//!
//! Candidates are probed strictly one after another, each probe finishing
//! (or timing out) before the next one starts.

use std::time::Duration;

use tracing::debug;

use arise_common::network::candidate::Candidate;

use crate::network::ping::Prober;

/// Returns the candidates that responded, in their configured order.
///
/// An empty list means nobody answered; it is not an error.
pub async fn scan(prober: &dyn Prober, candidates: &[Candidate], timeout: Duration) -> Vec<Candidate> {
    let mut live: Vec<Candidate> = Vec::new();
    for candidate in candidates {
        if prober.probe(candidate, timeout).await {
            live.push(candidate.clone());
        }
    }

    debug!("{} of {} candidates responded", live.len(), candidates.len());
    live
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
