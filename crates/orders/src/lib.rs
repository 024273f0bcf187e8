//! Order processing domain module.
//!
//! This crate contains business rules for placing orders against an in-memory
//! inventory, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage).

pub mod processor;
pub mod result;

pub use processor::OrderProcessor;
pub use result::OrderResult;
