use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter tagging asynchronous work so that only the most
/// recently issued operation may publish its result.
#[derive(Debug, Default)]
pub struct Generation(AtomicU64);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new generation, superseding every earlier one
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.current() == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_is_current() {
        let generation = Generation::new();
        assert_eq!(generation.current(), 0);

        let first = generation.next();
        assert!(generation.is_current(first));

        let second = generation.next();
        assert!(second > first);
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
