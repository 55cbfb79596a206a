use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PolyError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Could not decode input: {0}")]
    Decode(String),
}
