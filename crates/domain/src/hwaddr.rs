use crate::errors::InspectError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Six-byte link-layer address (`mac_addr_t` in the inspected stack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HwAddr([u8; 6]);

impl HwAddr {
    pub const LEN: usize = 6;

    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub const fn zero() -> Self {
        Self([0; 6])
    }

    pub const fn broadcast() -> Self {
        Self([0xff; 6])
    }

    /// Builds an address from a raw byte slice, which must be exactly
    /// [`HwAddr::LEN`] bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, InspectError> {
        if bytes.len() != Self::LEN {
            return Err(InspectError::InvalidHwAddr(format!(
                "expected {} bytes, got {}",
                Self::LEN,
                bytes.len()
            )));
        }
        let mut octets = [0u8; 6];
        octets.copy_from_slice(bytes);
        Ok(Self(octets))
    }

    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; 6]
    }
}

impl fmt::Display for HwAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl FromStr for HwAddr {
    type Err = InspectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != Self::LEN {
            return Err(InspectError::InvalidHwAddr(format!(
                "expected {} colon-separated octets: {}",
                Self::LEN,
                s
            )));
        }
        let mut octets = [0u8; 6];
        for (i, part) in parts.iter().enumerate() {
            octets[i] = u8::from_str_radix(part, 16).map_err(|_| {
                InspectError::InvalidHwAddr(format!("invalid hex octet '{}' in {}", part, s))
            })?;
        }
        Ok(Self(octets))
    }
}

impl Serialize for HwAddr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
