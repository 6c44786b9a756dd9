use thiserror::Error;

/// Errors the writer can report.
///
/// Every encoder in this crate is error-free on its happy path (see the
/// crate-level docs); these variants cover the two conditions that can
/// actually occur at a writer's public boundary.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum WriterError {
    /// `ldelim` was called with no matching `fork` on the stack.
    #[error("ldelim called with no matching fork")]
    UnbalancedFork,

    /// A 64-bit value was supplied as text with no numeric parse available.
    ///
    /// Kept for parity with the reference library's `LongBits::from`
    /// contract, which accepts a string when an external long-integer
    /// library is present to parse it. This crate's numeric constructors
    /// (`i64`, `u64`, `i32`, `u32`) can never produce this error themselves.
    #[error("invalid textual input for a 64-bit integer")]
    InvalidLongInput,
}

pub type Result<T> = std::result::Result<T, WriterError>;
