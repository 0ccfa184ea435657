use thiserror::Error;

/// Returned by the checked accessors when no value is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no value present")]
pub struct NoValuePresent;
