//! # Hardware Address
//!
//! The 48-bit address of the network card that receives the magic packet.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use mac_oui::Oui;
use pnet::util::MacAddr;
use thiserror::Error;

/// Number of hex digits in a hardware address once separators are removed.
pub const MAC_HEX_LEN: usize = 12;

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacError {
    #[error("hardware address '{input}' has {found} hex digits, expected {expected}", expected = MAC_HEX_LEN)]
    Length { input: String, found: usize },
    #[error("hardware address '{input}' contains a non-hex digit '{digit}'")]
    Digit { input: String, digit: char },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HardwareAddr(MacAddr);

impl HardwareAddr {
    pub fn octets(&self) -> [u8; 6] {
        let MacAddr(a, b, c, d, e, f) = self.0;
        [a, b, c, d, e, f]
    }

    /// Identify the manufacturer of the card through its
    /// **Organizationally unique identifier**.
    pub fn vendor(&self) -> Option<String> {
        let db = OUI_DB.get_or_init(|| Oui::default().ok()).as_ref()?;
        match db.lookup_by_mac(&self.0.to_string()) {
            Ok(Some(entry)) => Some(entry.company_name.clone()),
            _ => None,
        }
    }
}

impl From<MacAddr> for HardwareAddr {
    fn from(mac: MacAddr) -> Self {
        Self(mac)
    }
}

impl From<[u8; 6]> for HardwareAddr {
    fn from(o: [u8; 6]) -> Self {
        Self(MacAddr::new(o[0], o[1], o[2], o[3], o[4], o[5]))
    }
}

impl FromStr for HardwareAddr {
    type Err = MacError;

    /// Accepts `aa:bb:cc:dd:ee:ff`, `aa-bb-cc-dd-ee-ff` and `aabbccddeeff`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Vec<char> = s
            .trim()
            .chars()
            .filter(|c| *c != ':' && *c != '-')
            .collect();

        if let Some(digit) = digits.iter().find(|c| !c.is_ascii_hexdigit()) {
            return Err(MacError::Digit {
                input: s.to_string(),
                digit: *digit,
            });
        }

        if digits.len() != MAC_HEX_LEN {
            return Err(MacError::Length {
                input: s.to_string(),
                found: digits.len(),
            });
        }

        let mut octets = [0u8; 6];
        for (octet, pair) in octets.iter_mut().zip(digits.chunks(2)) {
            // Both digits were checked above.
            let high = pair[0].to_digit(16).unwrap_or_default();
            let low = pair[1].to_digit(16).unwrap_or_default();
            *octet = (high * 16 + low) as u8;
        }

        Ok(Self::from(octets))
    }
}

impl fmt::Display for HardwareAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
