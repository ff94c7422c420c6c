//! Shared instance-schedule domain primitives.
//!
//! This crate owns the schedule contract (tables, times, the fixed
//! invocation response) and due-instance computation. It intentionally
//! excludes AWS SDK and Lambda runtime concerns.

pub mod contract;
pub mod schedule;
