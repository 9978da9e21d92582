mod keygen_error;

pub use keygen_error::KeygenError;
pub type Result<T> = std::result::Result<T, KeygenError>;
