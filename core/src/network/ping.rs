//! # Reachability Prober
//!
//! Liveness checks are delegated to the system `ping` binary, one process per
//! candidate. Every way a probe can go wrong (missing binary, missing
//! permissions, bad address, no reply, timeout) is reported as "unreachable".

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use arise_common::network::candidate::{Candidate, IpFamily};

const DEFAULT_PROGRAM: &str = "ping";

/// Extra time granted to the child process on top of its own `-W` deadline.
const PROBE_GRACE: Duration = Duration::from_secs(1);

/// Answers whether a single candidate responds within `timeout`.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, candidate: &Candidate, timeout: Duration) -> bool;
}

/// [`Prober`] backed by the operating system's `ping` utility.
#[derive(Debug, Clone, Default)]
pub struct PingProber {
    program: Option<String>,
}

impl PingProber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `program` instead of `ping`, with the same arguments.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: Some(program.into()),
        }
    }

    fn command(&self, candidate: &Candidate, probe_timeout: Duration) -> Command {
        let family = candidate.family();
        let mut cmd = Command::new(self.program(family));
        cmd.args(timeout_args(family, probe_timeout))
            .arg(candidate.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        cmd
    }

    fn program(&self, family: IpFamily) -> &str {
        match (&self.program, family) {
            (Some(program), _) => program.as_str(),
            (None, IpFamily::V6) if cfg!(target_os = "macos") => "ping6",
            (None, _) => DEFAULT_PROGRAM,
        }
    }
}

#[async_trait]
impl Prober for PingProber {
    async fn probe(&self, candidate: &Candidate, probe_timeout: Duration) -> bool {
        if !candidate.is_probeable() {
            debug!("skipping unusable address '{candidate}'");
            return false;
        }

        let mut cmd = self.command(candidate, probe_timeout);
        let reachable = match timeout(probe_timeout.saturating_add(PROBE_GRACE), cmd.status()).await {
            Ok(Ok(status)) => status.success(),
            Ok(Err(e)) => {
                debug!("could not run ping for {candidate}: {e}");
                false
            }
            Err(_elapsed) => {
                debug!("ping for {candidate} did not finish in time");
                false
            }
        };

        debug!(%candidate, reachable, "probe finished");
        reachable
    }
}

/// Whole seconds handed to `ping`, rounded up and never below one.
fn timeout_secs(probe_timeout: Duration) -> u64 {
    let secs = probe_timeout.as_secs();
    let rounded = if probe_timeout.subsec_nanos() > 0 { secs.saturating_add(1) } else { secs };
    rounded.max(1)
}

#[cfg(not(target_os = "macos"))]
fn timeout_args(family: IpFamily, probe_timeout: Duration) -> Vec<String> {
    let mut args: Vec<String> = Vec::with_capacity(5);
    if family == IpFamily::V6 {
        args.push("-6".into());
    }
    args.extend(["-c".into(), "1".into(), "-W".into()]);
    args.push(timeout_secs(probe_timeout).to_string());
    args
}

// `ping6` has no overall deadline flag there; the grace timeout covers it.
#[cfg(target_os = "macos")]
fn timeout_args(family: IpFamily, probe_timeout: Duration) -> Vec<String> {
    match family {
        IpFamily::V4 => vec![
            "-c".into(),
            "1".into(),
            "-t".into(),
            timeout_secs(probe_timeout).to_string(),
        ],
        IpFamily::V6 => vec!["-c".into(), "1".into()],
    }
}
