use thiserror::Error;

/// Errors surfaced to the embedding host.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalaxyError {
    /// Handle does not name an allocated body slot
    #[error("invalid body handle {0}: slot is free or out of range")]
    InvalidHandle(usize),
}
