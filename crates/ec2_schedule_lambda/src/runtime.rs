//! Runtime-facing re-exports of the pure domain crate.

pub use ec2_schedule_core::contract;
pub use ec2_schedule_core::schedule;
