use std::path::PathBuf;

/// Error type for `Speller` construction failures.
#[derive(Debug, thiserror::Error)]
pub enum SpellerError {
    /// The platform only hands the engine UTF-8 paths.
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    /// A path contained a NUL byte and cannot be passed to the engine.
    #[error("path contains an interior NUL byte: {}", .0.display())]
    InteriorNul(PathBuf),

    /// The engine returned no instance.
    #[error("hunspell failed to create a dictionary instance")]
    EngineInit,
}

/// Result type alias using [`SpellerError`].
pub type SpellerResult<T> = Result<T, SpellerError>;
