#![cfg(test)]
use std::net::Ipv4Addr;
use std::time::Duration;

use arise_common::config::WakeConfig;
use arise_common::network::candidate::Candidate;
use arise_common::network::mac::HardwareAddr;
use arise_core::indicator::Silent;
use arise_core::network::udp::UdpWaker;
use arise_core::wake::{Outcome, WakeService};
use arise_protocols::wol::MagicPacket;

use crate::utils::FakeMachine;

const LAN: &str = "192.168.1.20";
const VPN_V4: &str = "100.101.102.103";
const VPN_V6: &str = "fd7a:115c:a1e0::3";

fn mac() -> HardwareAddr {
    "52:54:00:ab:cd:ef".parse().unwrap()
}

fn config() -> WakeConfig {
    let candidates = [LAN, VPN_V4, VPN_V6].into_iter().map(Candidate::new).collect();
    WakeConfig {
        broadcast: Ipv4Addr::LOCALHOST,
        attempts: 5,
        interval: Duration::from_millis(20),
        probe_timeout: Duration::from_millis(100),
        throbber: Duration::ZERO,
        ..WakeConfig::new(candidates, mac())
    }
}

fn service(machine: &FakeMachine, answers_on: &[&str]) -> WakeService {
    WakeService::new(
        Box::new(machine.prober(answers_on)),
        Box::new(UdpWaker::with_port(machine.port)),
        Box::new(Silent),
    )
}

#[tokio::test]
async fn sleeping_machine_wakes_after_magic_packet() {
    let machine = FakeMachine::start(mac(), false).await.unwrap();

    let outcome = service(&machine, &[VPN_V4, VPN_V6]).run(&config()).await.unwrap();

    match outcome {
        Outcome::Woke { responders, cycles } => {
            assert_eq!(responders, vec![Candidate::new(VPN_V4), Candidate::new(VPN_V6)]);
            assert!((1..=5).contains(&cycles), "unexpected cycle count {cycles}");
        }
        other => panic!("expected the machine to wake, got {other:?}"),
    }
    assert_eq!(machine.wait_for_datagrams(1).await, 1);
}

#[tokio::test]
async fn running_machine_gets_no_packet() {
    let machine = FakeMachine::start(mac(), true).await.unwrap();

    let outcome = service(&machine, &[LAN]).run(&config()).await.unwrap();

    assert_eq!(
        outcome,
        Outcome::AlreadyOnline { responders: vec![Candidate::new(LAN)] }
    );
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(machine.datagrams.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn packet_for_another_card_leaves_machine_asleep() {
    let machine = FakeMachine::start(mac(), false).await.unwrap();
    let mut cfg = config();
    cfg.mac = "52:54:00:00:00:01".parse().unwrap();
    cfg.attempts = 3;

    let outcome = service(&machine, &[LAN]).run(&cfg).await.unwrap();

    assert_eq!(outcome, Outcome::Exhausted { attempts: 3 });
    assert_eq!(machine.wait_for_datagrams(1).await, 1);
}

#[tokio::test]
async fn repeated_sends_are_byte_identical() {
    let machine = FakeMachine::start(mac(), false).await.unwrap();
    let svc = service(&machine, &[]);

    svc.send(&mac(), Ipv4Addr::LOCALHOST).await.unwrap();
    svc.send(&mac(), Ipv4Addr::LOCALHOST).await.unwrap();
    assert_eq!(machine.wait_for_datagrams(2).await, 2);

    let payloads = machine.payloads.lock().unwrap();
    assert_eq!(payloads[0], payloads[1]);
    assert_eq!(payloads[0].as_slice(), MagicPacket::new(&mac()).as_bytes());
}
