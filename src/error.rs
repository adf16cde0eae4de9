use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Encoder errors
    #[error("Sliding window size must be a positive number of bytes")]
    InvalidWindowSize,

    // Decoder errors
    #[error("Invalid token offset {0:?}: expected a decimal integer")]
    InvalidTokenOffset(String),

    #[error("Invalid token length {0:?}: expected a decimal integer")]
    InvalidTokenLength(String),
}

pub type Result<T> = std::result::Result<T, Error>;
