//! # Arise Common
//!
//! Models shared by every crate of the workspace: the candidate addresses that
//! get probed, the hardware address of the machine to wake, and the run
//! configuration that ties them together.

pub mod config;
pub mod log;
pub mod network;

#[doc(hidden)]
pub use tracing;
