use thiserror::Error;

/// The input violates a precondition of the calculation or one of the collection rules.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid {field}: {reason}")]
pub struct InvalidInput {
    pub field: &'static str,
    pub reason: &'static str,
}

impl InvalidInput {
    pub const fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }
}
