use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("model not found: {0}")]
    ModelNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
