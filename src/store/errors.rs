//! Error types for the in-memory store.
//!
//! The store has no failure modes beyond "not found", which is expressed as
//! `Option`/`bool` return values. The only error a store operation can
//! produce is a poisoned lock, which callers surface as an internal error.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    LockPoisoned,
}
