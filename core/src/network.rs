pub mod ping;
pub mod udp;
