pub mod candidate;
pub mod mac;
