use chrono::{SecondsFormat, Utc};
use sqlx::FromRow;

use crate::service::address_hash::hash_address;

/// One recorded access. Rows are append-only.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Visit {
    pub timestamp: String,
    pub address_hash: String,
}

impl Visit {
    pub fn new(timestamp: impl Into<String>, address_hash: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            address_hash: address_hash.into(),
        }
    }

    /// Visit stamped with the current UTC time.
    ///
    /// Millisecond RFC 3339 with a `Z` suffix is fixed width, so ordering the
    /// column as text matches chronological order.
    pub fn now(addr: &str) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            address_hash: hash_address(addr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_never_keeps_the_raw_address() {
        let visit = Visit::now("203.0.113.7");
        assert!(!visit.address_hash.contains("203.0.113.7"));
        assert_eq!(visit.address_hash, hash_address("203.0.113.7"));
    }

    #[test]
    fn timestamp_is_fixed_width_utc() {
        let visit = Visit::now("::1");
        // 2026-10-16T07:28:00.123Z
        assert_eq!(visit.timestamp.len(), 24);
        assert!(visit.timestamp.ends_with('Z'));
    }
}
