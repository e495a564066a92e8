//! # Arise Core
//!
//! The wake workflow and the capabilities it is built from:
//!
//! * [`network::ping`]: the reachability prober, one echo probe per candidate.
//! * [`scanner`]: runs the prober over the candidate list.
//! * [`network::udp`]: transmits the magic packet.
//! * [`indicator`]: the seam for the cosmetic progress display.
//! * [`wake`]: the retry orchestrator tying everything together.

pub mod indicator;
pub mod network;
pub mod scanner;
pub mod wake;
