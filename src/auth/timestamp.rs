//! Timestamp generation for Ariomex API authentication.
//!
//! Every private request carries a `timestamp` parameter holding the current
//! time in milliseconds since the UNIX epoch. It is part of the signed payload.

use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing the timestamp injected into private requests.
pub trait TimestampProvider: Send + Sync {
    /// Current time in whole milliseconds since the UNIX epoch.
    fn now_millis(&self) -> u64;
}

/// Reads the system clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimestamp;

impl SystemTimestamp {
    /// Create a new system clock provider.
    pub fn new() -> Self {
        Self
    }
}

impl TimestampProvider for SystemTimestamp {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Always returns the same timestamp.
///
/// Useful in tests where the signature must be reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimestamp(pub u64);

impl TimestampProvider for FixedTimestamp {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_timestamp_is_millis() {
        let now = SystemTimestamp::new().now_millis();
        // 2020-01-01 in milliseconds; a seconds or micros clock would miss this range.
        assert!(now > 1_577_836_800_000);
        assert!(now < 1_577_836_800_000 * 100);
    }

    #[test]
    fn test_system_timestamp_does_not_go_backwards() {
        let clock = SystemTimestamp::new();
        let first = clock.now_millis();
        let second = clock.now_millis();
        assert!(second >= first);
    }

    #[test]
    fn test_fixed_timestamp() {
        let clock = FixedTimestamp(1_700_000_000_000);
        assert_eq!(clock.now_millis(), 1_700_000_000_000);
        assert_eq!(clock.now_millis(), 1_700_000_000_000);
    }
}
