//! # Wake-on-LAN
//!
//! The magic packet is a fixed 102 byte payload: six `0xFF` bytes followed by
//! the target hardware address repeated sixteen times. It carries no other
//! field and no checksum.

use std::str::FromStr;

use arise_common::network::mac::{HardwareAddr, MacError};

/// UDP port the packet is sent to (the "discard" port).
pub const WOL_PORT: u16 = 9;

pub const SYNC_LEN: usize = 6;
pub const MAC_REPEAT: usize = 16;
pub const MAGIC_PACKET_LEN: usize = SYNC_LEN + MAC_REPEAT * 6;

const SYNC_STREAM: [u8; SYNC_LEN] = [0xFF; SYNC_LEN];

#[derive(Clone, PartialEq, Eq)]
pub struct MagicPacket([u8; MAGIC_PACKET_LEN]);

impl MagicPacket {
    pub fn new(mac: &HardwareAddr) -> Self {
        let mut buffer = [0u8; MAGIC_PACKET_LEN];
        buffer[..SYNC_LEN].copy_from_slice(&SYNC_STREAM);

        let octets = mac.octets();
        for chunk in buffer[SYNC_LEN..].chunks_exact_mut(octets.len()) {
            chunk.copy_from_slice(&octets);
        }

        Self(buffer)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Recovers the target address from a received payload.
    ///
    /// Returns `None` unless the payload is exactly a well-formed magic packet.
    pub fn parse(payload: &[u8]) -> Option<HardwareAddr> {
        if payload.len() != MAGIC_PACKET_LEN || payload[..SYNC_LEN] != SYNC_STREAM {
            return None;
        }

        let mut blocks = payload[SYNC_LEN..].chunks_exact(6);
        let first = blocks.next()?;
        if !blocks.all(|block| block == first) {
            return None;
        }

        let octets: [u8; 6] = first.try_into().ok()?;
        Some(HardwareAddr::from(octets))
    }
}

impl FromStr for MagicPacket {
    type Err = MacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mac: HardwareAddr = s.parse()?;
        Ok(Self::new(&mac))
    }
}

impl AsRef<[u8]> for MagicPacket {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for MagicPacket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let target = Self::parse(&self.0).map(|mac| mac.to_string());
        f.debug_struct("MagicPacket")
            .field("target", &target)
            .field("len", &self.0.len())
            .finish()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
