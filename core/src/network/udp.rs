use std::io;
use std::net::{Ipv4Addr, SocketAddrV4};

use async_trait::async_trait;
use thiserror::Error;
use tokio::net::UdpSocket;
use tracing::debug;

use arise_common::network::mac::HardwareAddr;
use arise_protocols::wol::{MAGIC_PACKET_LEN, MagicPacket, WOL_PORT};

#[derive(Debug, Error)]
pub enum SendError {
    #[error("failed to open a UDP socket")]
    Bind(#[source] io::Error),
    #[error("failed to enable broadcast on the UDP socket")]
    Broadcast(#[source] io::Error),
    #[error("failed to send the magic packet to {dest}")]
    Send {
        dest: SocketAddrV4,
        #[source]
        source: io::Error,
    },
    #[error("only {sent} of {expected} bytes reached {dest}", expected = MAGIC_PACKET_LEN)]
    ShortWrite { dest: SocketAddrV4, sent: usize },
}

/// Transmits the wake signal for a hardware address.
#[async_trait]
pub trait Waker: Send + Sync {
    async fn wake(&self, mac: &HardwareAddr, broadcast: Ipv4Addr) -> Result<(), SendError>;
}

/// Sends a single magic packet as a UDP broadcast datagram.
///
/// The socket only lives for the duration of one [`Waker::wake`] call.
#[derive(Debug, Clone, Copy)]
pub struct UdpWaker {
    port: u16,
}

impl Default for UdpWaker {
    fn default() -> Self {
        Self { port: WOL_PORT }
    }
}

impl UdpWaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_port(port: u16) -> Self {
        Self { port }
    }
}

#[async_trait]
impl Waker for UdpWaker {
    async fn wake(&self, mac: &HardwareAddr, broadcast: Ipv4Addr) -> Result<(), SendError> {
        let packet = MagicPacket::new(mac);
        let dest = SocketAddrV4::new(broadcast, self.port);

        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))
            .await
            .map_err(SendError::Bind)?;
        socket.set_broadcast(true).map_err(SendError::Broadcast)?;

        let sent = socket
            .send_to(packet.as_bytes(), dest)
            .await
            .map_err(|source| SendError::Send { dest, source })?;

        if sent != MAGIC_PACKET_LEN {
            return Err(SendError::ShortWrite { dest, sent });
        }

        debug!("sent {sent} byte magic packet for {mac} to {dest}");
        Ok(())
    }
}
