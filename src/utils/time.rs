//! Millisecond-epoch clock

use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch, as the protocol's timestamp type.
/// A clock before the epoch reads as 0.
pub fn epoch_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_ms_is_monotonic_enough() {
        let a = epoch_ms();
        let b = epoch_ms();
        // 2020-01-01 in ms; a sane clock is well past it.
        assert!(a > 1_577_836_800_000.0);
        assert!(b >= a);
    }
}
