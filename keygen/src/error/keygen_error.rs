use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeygenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] common::CommonError),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
