use thiserror::Error;

/// keyfind library result type.
pub type Result<T> = std::result::Result<T, Error>;

/// keyfind library error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The image is shorter than the minimum window the AES-256 evaluator
    /// needs to read (240 bytes).
    #[error("memory image too small: {len} bytes (need at least 240)")]
    ImageTooSmall { len: usize },
}
