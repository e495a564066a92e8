//! A stand-in for the machine being woken.
//!
//! It listens on a loopback UDP port and powers on once a magic packet for
//! its own hardware address arrives. Until then every probe fails.

use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::UdpSocket;

use arise_common::network::candidate::Candidate;
use arise_common::network::mac::HardwareAddr;
use arise_core::network::ping::Prober;
use arise_protocols::wol::MagicPacket;

pub struct FakeMachine {
    pub port: u16,
    pub awake: Arc<AtomicBool>,
    pub datagrams: Arc<AtomicUsize>,
    pub payloads: Arc<std::sync::Mutex<Vec<Vec<u8>>>>,
}

impl FakeMachine {
    pub async fn start(mac: HardwareAddr, initially_awake: bool) -> anyhow::Result<Self> {
        let socket = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).await?;
        let port = socket.local_addr()?.port();

        let awake = Arc::new(AtomicBool::new(initially_awake));
        let datagrams = Arc::new(AtomicUsize::new(0));
        let payloads = Arc::new(std::sync::Mutex::new(Vec::new()));

        let (awake_ref, count_ref, payloads_ref) = (awake.clone(), datagrams.clone(), payloads.clone());
        tokio::spawn(async move {
            let mut buf = [0u8; 512];
            while let Ok(len) = socket.recv(&mut buf).await {
                count_ref.fetch_add(1, Ordering::SeqCst);
                payloads_ref.lock().unwrap().push(buf[..len].to_vec());
                if MagicPacket::parse(&buf[..len]) == Some(mac) {
                    awake_ref.store(true, Ordering::SeqCst);
                }
            }
        });

        Ok(Self {
            port,
            awake,
            datagrams,
            payloads,
        })
    }

    /// Answers probes for `addresses` while the machine is awake.
    pub fn prober(&self, addresses: &[&str]) -> MachineProber {
        MachineProber {
            awake: self.awake.clone(),
            addresses: addresses.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Waits until `n` datagrams arrived, or gives up after a second.
    pub async fn wait_for_datagrams(&self, n: usize) -> usize {
        for _ in 0..100 {
            if self.datagrams.load(Ordering::SeqCst) >= n {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        self.datagrams.load(Ordering::SeqCst)
    }
}

pub struct MachineProber {
    awake: Arc<AtomicBool>,
    addresses: Vec<String>,
}

#[async_trait]
impl Prober for MachineProber {
    async fn probe(&self, candidate: &Candidate, _timeout: Duration) -> bool {
        // Lets the listener task pick up datagrams between probes.
        tokio::task::yield_now().await;
        self.awake.load(Ordering::SeqCst) && self.addresses.iter().any(|a| a == candidate.as_str())
    }
}
