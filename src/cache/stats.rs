//! Cache Statistics Module
//!
//! Per-accessor outcome counters. Each counter is an independent atomic, so
//! a snapshot taken while operations are in flight is consistent per counter
//! but not across counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Stats Snapshot ==
/// Point-in-time copy of an accessor's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Entries found and successfully deserialized
    pub hits: u64,
    /// Lookups that found no entry
    pub miss: u64,
    /// Successful writes after a miss
    pub set_success: u64,
    /// Failed writes after a miss
    pub set_error: u64,
    /// Successful removals
    pub del_success: u64,
    /// Failed removals, absent keys included
    pub del_error: u64,
}

impl Stats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + miss), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.miss;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Stats Recorder ==
/// Lock-free counters owned by a single accessor.
#[derive(Debug, Default)]
pub struct StatsRecorder {
    hits: AtomicU64,
    miss: AtomicU64,
    set_success: AtomicU64,
    set_error: AtomicU64,
    del_success: AtomicU64,
    del_error: AtomicU64,
}

impl StatsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.miss.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_set_success(&self) {
        self.set_success.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_set_error(&self) {
        self.set_error.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_del_success(&self) {
        self.del_success.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_del_error(&self) {
        self.del_error.fetch_add(1, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Copies the current counter values.
    pub fn snapshot(&self) -> Stats {
        Stats {
            hits: self.hits.load(Ordering::Relaxed),
            miss: self.miss.load(Ordering::Relaxed),
            set_success: self.set_success.load(Ordering::Relaxed),
            set_error: self.set_error.load(Ordering::Relaxed),
            del_success: self.del_success.load(Ordering::Relaxed),
            del_error: self.del_error.load(Ordering::Relaxed),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_recorder_starts_at_zero() {
        let recorder = StatsRecorder::new();
        assert_eq!(recorder.snapshot(), Stats::default());
    }

    #[test]
    fn test_each_counter_is_independent() {
        let recorder = StatsRecorder::new();
        recorder.record_hit();
        recorder.record_miss();
        recorder.record_miss();
        recorder.record_set_success();
        recorder.record_set_error();
        recorder.record_del_success();
        recorder.record_del_error();
        recorder.record_del_error();

        assert_eq!(
            recorder.snapshot(),
            Stats {
                hits: 1,
                miss: 2,
                set_success: 1,
                set_error: 1,
                del_success: 1,
                del_error: 2,
            }
        );
    }

    #[test]
    fn test_hit_rate_no_requests() {
        assert_eq!(Stats::default().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let stats = Stats {
            hits: 3,
            miss: 1,
            ..Stats::default()
        };
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let recorder = Arc::new(StatsRecorder::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let recorder = Arc::clone(&recorder);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        recorder.record_hit();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(recorder.snapshot().hits, 8000);
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_value(Stats::default()).unwrap();
        assert_eq!(json["set_success"], 0);
    }
}
