//! Error types for password generation.

use thiserror::Error;

/// Errors produced while building a character source or generating a password.
///
/// Only [`Error::TooManyRejections`] is produced by a well-formed generator at
/// generation time. Everything else is a malformed configuration caught
/// before sampling starts, or a configuration that drifted away from the one
/// the generator was built with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The rule's validity predicate rejected the ceiling number of characters.
    #[error("password rule rejected too many passwords")]
    TooManyRejections,

    /// A weighted random set was built from zero entries.
    #[error("weighted random set requires at least one entry")]
    NoEntries,

    /// A weight was negative, NaN or infinite.
    #[error("entry {index} has invalid weight {weight}")]
    InvalidWeight { index: usize, weight: f64 },

    /// Every entry had zero weight.
    #[error("total weight must be positive")]
    ZeroTotalWeight,

    /// The configured target length was zero.
    #[error("target length must be at least 1")]
    ZeroLength,

    /// Every character class had a minimum of zero.
    #[error("at least one character class must have a positive minimum")]
    NoRequiredCharacters,

    /// A character class requires characters but lists none.
    #[error("character class {index} has a positive minimum but no characters")]
    EmptyClass { index: usize },

    /// The class minimums cannot fit below the overflow restart length.
    #[error("class minimums require {required} characters but passwords restart above {max_length}")]
    Unsatisfiable { required: usize, max_length: usize },

    /// A required class has no member the generator's character source can
    /// draw, typically after the rule's configuration changed without a
    /// refresh.
    #[error("character class {index} has no characters the generator can draw")]
    UndrawableClass { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
