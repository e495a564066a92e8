//! # Candidate Addresses
//!
//! A candidate is one of the configured addresses the target host may answer
//! on (LAN address, VPN address, ...). It is kept exactly as configured: the
//! probing tool decides whether the string is usable, so hostnames pass
//! through untouched.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Which echo protocol a candidate is probed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpFamily {
    V4,
    V6,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate(String);

impl Candidate {
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Any colon marks an IPv6 literal, everything else is probed over IPv4.
    pub fn family(&self) -> IpFamily {
        if self.0.contains(':') {
            IpFamily::V6
        } else {
            IpFamily::V4
        }
    }

    /// Whether the address can be handed to an external tool as a target.
    ///
    /// Empty strings and strings starting with `-` would be read as missing
    /// arguments or flags.
    pub fn is_probeable(&self) -> bool {
        !self.0.is_empty() && !self.0.starts_with('-')
    }
}

impl FromStr for Candidate {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.trim()))
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders a list of candidates as `a, b, c`.
pub fn join(candidates: &[Candidate]) -> String {
    candidates
        .iter()
        .map(Candidate::as_str)
        .collect::<Vec<&str>>()
        .join(", ")
}
