//! Side-effecting operations: filesystem resolution and dataset persistence.

pub mod dataset;
pub mod serve;
