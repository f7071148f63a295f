//! Shared utility functions for TZL crates.

/// Debouncing for bursty UI events
pub mod debounce {
    /// Identifies one call to [`Debouncer::trigger`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DebounceToken(u64);

    /// Trailing-edge debounce without owning a timer.
    ///
    /// The caller triggers on every event and schedules a check `wait_ms` later with the
    /// returned token; only the check holding the newest token should run the action.
    #[derive(Debug, Clone, Default)]
    pub struct Debouncer {
        wait_ms: u32,
        latest: u64,
    }

    impl Debouncer {
        pub fn new(wait_ms: u32) -> Self {
            Self { wait_ms, latest: 0 }
        }

        pub fn wait_ms(&self) -> u32 {
            self.wait_ms
        }

        /// Register an event. Supersedes every earlier token.
        pub fn trigger(&mut self) -> DebounceToken {
            self.latest += 1;
            DebounceToken(self.latest)
        }

        /// Whether no event arrived after the one that produced `token`.
        pub fn is_current(&self, token: DebounceToken) -> bool {
            token.0 == self.latest
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_only_latest_token_fires() {
            let mut debouncer = Debouncer::new(150);
            let first = debouncer.trigger();
            let second = debouncer.trigger();
            let third = debouncer.trigger();
            assert!(!debouncer.is_current(first));
            assert!(!debouncer.is_current(second));
            assert!(debouncer.is_current(third));
            assert_eq!(debouncer.wait_ms(), 150);
        }

        #[test]
        fn test_quiet_period_fires_each_burst() {
            let mut debouncer = Debouncer::new(100);
            let burst_one = debouncer.trigger();
            assert!(debouncer.is_current(burst_one));
            let burst_two = debouncer.trigger();
            assert!(debouncer.is_current(burst_two));
            assert_ne!(burst_one, burst_two);
        }
    }
}
