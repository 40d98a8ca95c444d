//! Timeout configuration for outbound requests.

use std::time::Duration;

/// Timeouts applied to every request sent through a [`FetchClient`](crate::FetchClient).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Connection establishment timeout.
    pub connect: Duration,
    /// Total operation timeout, including reading the body.
    pub total: Duration,
}

impl TimeoutConfig {
    /// Create a new timeout configuration.
    pub fn new(connect: Duration, total: Duration) -> Self {
        Self { connect, total }
    }

    /// Create from a single total timeout.
    pub fn from_total(total: Duration) -> Self {
        Self {
            connect: (total / 3).max(Duration::from_millis(1)),
            total,
        }
    }

    /// Create from whole seconds, as read from configuration.
    pub fn from_secs(connect_secs: u64, total_secs: u64) -> Self {
        Self::new(
            Duration::from_secs(connect_secs),
            Duration::from_secs(total_secs),
        )
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(10),
            total: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_default() {
        let t = TimeoutConfig::default();
        assert_eq!(t.total, Duration::from_secs(30));
        assert!(t.connect < t.total);
    }

    #[test]
    fn test_timeout_from_total() {
        let t = TimeoutConfig::from_total(Duration::from_secs(9));
        assert_eq!(t.connect, Duration::from_secs(3));
        assert_eq!(t.total, Duration::from_secs(9));
    }
}
