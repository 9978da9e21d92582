use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Key generation error: {0}")]
    Generation(String),

    #[error("Key encoding error: {0}")]
    Encoding(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
