//! Observability for the fake backend.
//!
//! Structured JSON logging only: the fixture promises deterministic output,
//! so log lines are synchronous with stable key ordering. Observability is
//! read-only and must never affect request handling.

mod logger;

pub use logger::{Logger, Severity};
