use crate::errors::InspectError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Expiry threshold the target's periodic sweep uses (20 hours, in seconds).
pub const DEFAULT_MAX_AGE_SECS: u32 = 72_000;

/// Slot states the target encodes as negative ages.
///
/// The enumerator names follow the target's `enum arp_cache_entry_type`,
/// because that is how a debugger would have spelled them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeSentinel {
    /// `ARP_CACHE_FREE` (-2): slot is unused.
    Free,
    /// `ARP_CACHE_STATIC` (-1): entry is pinned and never aged out.
    Static,
}

impl AgeSentinel {
    pub const fn code(&self) -> i32 {
        match self {
            AgeSentinel::Free => -2,
            AgeSentinel::Static => -1,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            AgeSentinel::Free => "ARP_CACHE_FREE",
            AgeSentinel::Static => "ARP_CACHE_STATIC",
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -2 => Some(AgeSentinel::Free),
            -1 => Some(AgeSentinel::Static),
            _ => None,
        }
    }
}

impl fmt::Display for AgeSentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Age of a cache slot: seconds since the last refresh, or a sentinel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAge {
    Seconds(u32),
    Sentinel(AgeSentinel),
}

impl EntryAge {
    /// Decodes the raw signed age the target stores in a slot.
    ///
    /// Non-negative values are plain seconds. Negative values must be one of
    /// the known sentinels; anything else means the slot bytes do not hold a
    /// live `arp_cache_entry`.
    pub fn from_raw(raw: i32) -> Result<Self, InspectError> {
        if raw >= 0 {
            return Ok(EntryAge::Seconds(raw as u32));
        }
        AgeSentinel::from_code(raw)
            .map(EntryAge::Sentinel)
            .ok_or(InspectError::UnknownAgeSentinel(raw))
    }

    /// The signed encoding the target would store for this age.
    pub fn raw(&self) -> i32 {
        match self {
            EntryAge::Seconds(secs) => *secs as i32,
            EntryAge::Sentinel(sentinel) => sentinel.code(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, EntryAge::Sentinel(_))
    }
}

impl fmt::Display for EntryAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryAge::Seconds(secs) => write!(f, "{}", secs),
            EntryAge::Sentinel(sentinel) => f.write_str(sentinel.name()),
        }
    }
}

impl Serialize for EntryAge {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            EntryAge::Seconds(secs) => serializer.serialize_u32(*secs),
            EntryAge::Sentinel(sentinel) => serializer.serialize_str(sentinel.name()),
        }
    }
}
