use std::process::ExitCode;

use anyhow::Context;

use arise_common::success;
use arise_core::network::udp::{UdpWaker, Waker};

use crate::commands::WolArgs;

pub async fn send(wol: WolArgs) -> anyhow::Result<ExitCode> {
    UdpWaker::new()
        .wake(&wol.mac, wol.broadcast)
        .await
        .with_context(|| format!("could not send the magic packet for {}", wol.mac))?;

    success!("Magic packet for {} sent to {}", wol.mac, wol.broadcast);
    Ok(ExitCode::SUCCESS)
}
