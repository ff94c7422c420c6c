//! AWS-oriented adapters and handlers for scheduled instance control.
//!
//! This crate owns runtime integration details (Lambda handlers and the EC2
//! control-plane adapter) and exposes a single runtime module boundary for
//! the schedule contract and due-instance primitives.

pub mod adapters;
pub mod handlers;
pub mod runtime;
