//! # Wake Service
//!
//! Implements the "wake the target" use case.
//!
//! A run moves through the following phases:
//!
//! ```text
//! InitialCheck ─┬─▶ Online
//!               └─▶ SentWol ─▶ Polling ─┬─▶ Online
//!                                       └─▶ Exhausted
//! ```
//!
//! `Online` and `Exhausted` are terminal. Running out of attempts is a regular
//! [`Outcome`], not an error: the target may not support remote wake at all.

use std::net::Ipv4Addr;
use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use arise_common::config::WakeConfig;
use arise_common::network::candidate::{self, Candidate};
use arise_common::network::mac::HardwareAddr;
use arise_common::info;

use crate::indicator::Indicator;
use crate::network::ping::Prober;
use crate::network::udp::{SendError, Waker};
use crate::scanner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InitialCheck,
    Online,
    SentWol,
    Polling,
    Exhausted,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Online | Phase::Exhausted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The target answered before any packet was sent.
    AlreadyOnline { responders: Vec<Candidate> },
    /// The target answered during the `cycles`-th scan cycle after the packet.
    Woke { responders: Vec<Candidate>, cycles: u32 },
    /// No answer within the whole retry budget.
    Exhausted { attempts: u32 },
}

impl Outcome {
    pub fn is_online(&self) -> bool {
        !matches!(self, Outcome::Exhausted { .. })
    }

    pub fn responders(&self) -> &[Candidate] {
        match self {
            Outcome::AlreadyOnline { responders } | Outcome::Woke { responders, .. } => responders,
            Outcome::Exhausted { .. } => &[],
        }
    }

    /// The terminal phase this outcome corresponds to.
    pub fn phase(&self) -> Phase {
        match self {
            Outcome::AlreadyOnline { .. } | Outcome::Woke { .. } => Phase::Online,
            Outcome::Exhausted { .. } => Phase::Exhausted,
        }
    }
}

/// Application service driving a wake run.
///
/// Every effect goes through one of the injected capabilities, so the whole
/// workflow can run against fakes.
pub struct WakeService {
    prober: Box<dyn Prober>,
    waker: Box<dyn Waker>,
    indicator: Box<dyn Indicator>,
}

impl WakeService {
    pub fn new(
        prober: Box<dyn Prober>,
        waker: Box<dyn Waker>,
        indicator: Box<dyn Indicator>,
    ) -> Self {
        Self {
            prober,
            waker,
            indicator,
        }
    }

    /// Probes every candidate once.
    pub async fn check(&self, candidates: &[Candidate], timeout: Duration) -> Vec<Candidate> {
        scanner::scan(self.prober.as_ref(), candidates, timeout).await
    }

    /// Sends one magic packet.
    pub async fn send(&self, mac: &HardwareAddr, broadcast: Ipv4Addr) -> Result<(), SendError> {
        self.waker.wake(mac, broadcast).await
    }

    /// Checks the target, wakes it if needed and waits for it to respond.
    ///
    /// Only a failure to transmit the magic packet is an error.
    pub async fn run(&self, cfg: &WakeConfig) -> Result<Outcome, SendError> {
        let mut phase = Phase::InitialCheck;
        debug!(?phase, candidates = cfg.candidates.len(), "starting wake run");

        let responders = self.check(&cfg.candidates, cfg.probe_timeout).await;
        if !responders.is_empty() {
            advance(&mut phase, Phase::Online);
            return Ok(Outcome::AlreadyOnline { responders });
        }

        info!(
            "Target appears to be off. Sending Wake-on-LAN packet for {} via {}...",
            cfg.mac, cfg.broadcast
        );
        self.send(&cfg.mac, cfg.broadcast).await?;
        advance(&mut phase, Phase::SentWol);
        info!("Magic packet sent. Waiting for the target to wake up...");

        advance(&mut phase, Phase::Polling);
        for cycle in 1..=cfg.attempts {
            self.indicator.show(cfg.throbber).await;

            let responders = self.check(&cfg.candidates, cfg.probe_timeout).await;
            if !responders.is_empty() {
                advance(&mut phase, Phase::Online);
                return Ok(Outcome::Woke { responders, cycles: cycle });
            }

            debug!("scan cycle {cycle}/{} got no response", cfg.attempts);
            sleep(cfg.interval).await;
        }

        advance(&mut phase, Phase::Exhausted);
        debug!(
            "no response from {} after {} scan cycles",
            candidate::join(&cfg.candidates),
            cfg.attempts
        );
        Ok(Outcome::Exhausted {
            attempts: cfg.attempts,
        })
    }
}

fn advance(phase: &mut Phase, next: Phase) {
    debug!(from = ?*phase, to = ?next, "phase change");
    *phase = next;
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::time::Instant;

    type Answer = Box<dyn Fn(usize, &Candidate) -> bool + Send + Sync>;

    /// Decides each answer from the running probe count and the candidate.
    struct ScriptedProber {
        calls: Arc<AtomicUsize>,
        answer: Answer,
    }

    #[async_trait]
    impl Prober for ScriptedProber {
        async fn probe(&self, candidate: &Candidate, _timeout: Duration) -> bool {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            (self.answer)(call, candidate)
        }
    }

    struct CountingWaker {
        sent: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl Waker for CountingWaker {
        async fn wake(&self, _mac: &HardwareAddr, broadcast: Ipv4Addr) -> Result<(), SendError> {
            self.sent.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                let source = io::Error::new(io::ErrorKind::PermissionDenied, "no broadcast");
                return Err(SendError::Send {
                    dest: std::net::SocketAddrV4::new(broadcast, 9),
                    source,
                });
            }
            Ok(())
        }
    }

    struct CountingIndicator {
        shown: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Indicator for CountingIndicator {
        async fn show(&self, _duration: Duration) {
            self.shown.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Harness {
        service: WakeService,
        probes: Arc<AtomicUsize>,
        sent: Arc<AtomicUsize>,
        shown: Arc<AtomicUsize>,
    }

    fn harness(fail_send: bool, answer: Answer) -> Harness {
        let probes = Arc::new(AtomicUsize::new(0));
        let sent = Arc::new(AtomicUsize::new(0));
        let shown = Arc::new(AtomicUsize::new(0));
        let service = WakeService::new(
            Box::new(ScriptedProber { calls: probes.clone(), answer }),
            Box::new(CountingWaker { sent: sent.clone(), fail: fail_send }),
            Box::new(CountingIndicator { shown: shown.clone() }),
        );
        Harness { service, probes, sent, shown }
    }

    fn config() -> WakeConfig {
        let candidates = vec![
            Candidate::new("192.168.1.20"),
            Candidate::new("100.101.102.103"),
            Candidate::new("fd7a:115c:a1e0::3"),
        ];
        WakeConfig::new(candidates, HardwareAddr::from([0x52, 0x54, 0x00, 0xab, 0xcd, 0xef]))
    }

    #[tokio::test(start_paused = true)]
    async fn online_target_is_not_woken() {
        let h = harness(false, Box::new(|_: usize, c: &Candidate| c.as_str() == "100.101.102.103"));

        let outcome = h.service.run(&config()).await.unwrap();

        assert_eq!(
            outcome,
            Outcome::AlreadyOnline { responders: vec![Candidate::new("100.101.102.103")] }
        );
        assert_eq!(h.sent.load(Ordering::SeqCst), 0);
        assert_eq!(h.shown.load(Ordering::SeqCst), 0);
        assert_eq!(h.probes.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn target_waking_on_first_cycle_stops_polling() {
        // The initial scan uses probes 0..3, the first cycle 3..6.
        let h = harness(false, Box::new(|call: usize, _: &Candidate| call >= 3));

        let outcome = h.service.run(&config()).await.unwrap();

        assert_eq!(
            outcome,
            Outcome::Woke { responders: config().candidates, cycles: 1 }
        );
        assert_eq!(h.sent.load(Ordering::SeqCst), 1);
        assert_eq!(h.shown.load(Ordering::SeqCst), 1);
        assert_eq!(h.probes.load(Ordering::SeqCst), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn late_wake_reports_the_cycle_it_happened_in() {
        let h = harness(false, Box::new(|call: usize, c: &Candidate| call >= 9 && c.as_str() == "192.168.1.20"));

        let outcome = h.service.run(&config()).await.unwrap();

        assert_eq!(
            outcome,
            Outcome::Woke { responders: vec![Candidate::new("192.168.1.20")], cycles: 3 }
        );
        assert_eq!(h.sent.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn silent_target_exhausts_every_attempt() {
        let h = harness(false, Box::new(|_: usize, _: &Candidate| false));
        let cfg = config();
        let start = Instant::now();

        let outcome = h.service.run(&cfg).await.unwrap();

        assert_eq!(outcome, Outcome::Exhausted { attempts: 5 });
        assert!(!outcome.is_online());
        assert_eq!(h.sent.load(Ordering::SeqCst), 1);
        assert_eq!(h.shown.load(Ordering::SeqCst), 5);
        // One initial scan plus one per attempt.
        assert_eq!(h.probes.load(Ordering::SeqCst), 3 * (1 + 5));
        let waited = start.elapsed();
        assert!(waited >= cfg.interval * 5, "waited only {waited:?}");
        assert!(waited < cfg.interval * 6, "waited {waited:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn zero_attempts_sends_and_gives_up() {
        let h = harness(false, Box::new(|_: usize, _: &Candidate| false));
        let mut cfg = config();
        cfg.attempts = 0;

        let outcome = h.service.run(&cfg).await.unwrap();

        assert_eq!(outcome, Outcome::Exhausted { attempts: 0 });
        assert_eq!(h.sent.load(Ordering::SeqCst), 1);
        assert_eq!(h.probes.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn send_failure_aborts_the_run() {
        let h = harness(true, Box::new(|_: usize, _: &Candidate| false));

        let result = h.service.run(&config()).await;

        assert!(matches!(result, Err(SendError::Send { .. })));
        assert_eq!(h.sent.load(Ordering::SeqCst), 1);
        assert_eq!(h.shown.load(Ordering::SeqCst), 0);
        assert_eq!(h.probes.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn outcomes_map_to_terminal_phases() {
        let online = Outcome::Woke { responders: vec![Candidate::new("::1")], cycles: 2 };
        let exhausted = Outcome::Exhausted { attempts: 5 };

        assert_eq!(online.phase(), Phase::Online);
        assert_eq!(exhausted.phase(), Phase::Exhausted);
        assert!(online.phase().is_terminal());
        assert!(!Phase::Polling.is_terminal());
        assert!(exhausted.responders().is_empty());
    }
}
