//! Background Tasks Module
//!
//! # Tasks
//! - Expiry sweep: removes expired entries from a [`LocalDriver`](crate::driver::LocalDriver)

mod cleanup;

pub use cleanup::spawn_cleanup_task;
