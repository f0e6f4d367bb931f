//! Error types for the Cviceni core library.

/// Errors that can occur while running the lesson.
///
/// None of these are reachable with the default lesson data; they surface
/// only when a configuration asks for positions the data does not have.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Positional access past the end of a sequence
    #[error("Index out of range: {index} (length {len})")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Length of the sequence at the time of access
        len: usize,
    },

    /// I/O error (writing the transcript, reading a config file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for Cviceni operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new out-of-range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
