//! Monotonic revision counter for the externally-visible tree state.

use std::sync::atomic::{AtomicU32, Ordering};

/// Monotonically increasing revision counter.
///
/// Bumped on every externally-visible mutation; wraps at `u32::MAX`
/// (accepted behavior, matching the protocol's unsigned revision field).
#[derive(Debug, Default)]
pub struct Revision(AtomicU32);

impl Revision {
    pub fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    /// Returns the current revision without changing it.
    pub fn current(&self) -> u32 {
        self.0.load(Ordering::SeqCst)
    }

    /// Atomically increments and returns the new value.
    ///
    /// Safe under concurrent invocation from any number of mutation call
    /// sites; no two concurrent calls ever return the same value.
    pub fn bump(&self) -> u32 {
        self.0.fetch_add(1, Ordering::SeqCst).wrapping_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Revision::new().current(), 0);
    }

    #[test]
    fn bump_returns_new_value() {
        let rev = Revision::new();
        assert_eq!(rev.bump(), 1);
        assert_eq!(rev.bump(), 2);
        assert_eq!(rev.current(), 2);
    }

    #[test]
    fn concurrent_bumps_are_unique() {
        let rev = Arc::new(Revision::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let rev = Arc::clone(&rev);
            handles.push(std::thread::spawn(move || {
                (0..500).map(|_| rev.bump()).collect::<Vec<u32>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for value in handle.join().unwrap() {
                assert!(seen.insert(value), "duplicate revision {value}");
            }
        }
        assert_eq!(seen.len(), 8 * 500);
        assert_eq!(rev.current(), 8 * 500);
    }
}
