//! # Async Tasks
//!
//! Background tasks that perform network I/O on the Tokio runtime and report
//! results back through the app event channel.

pub mod market;
