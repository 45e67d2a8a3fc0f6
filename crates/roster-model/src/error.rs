use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid registration id: {0:?}")]
    InvalidRegistrationId(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
