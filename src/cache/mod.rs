//! Cache Module
//!
//! The cache-aside accessor and its statistics.

mod accessor;
mod stats;


// Re-export public types
pub use accessor::Cacheable;
pub use stats::{Stats, StatsRecorder};
