use telecare_uuid::{CheckinId, UuidError};

#[derive(Debug, thiserror::Error)]
pub enum CheckinError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid check-in id: {0}")]
    InvalidId(#[from] UuidError),
    #[error("check-in {0} already exists")]
    DuplicateId(CheckinId),
    #[error("check-in store lock poisoned")]
    StorePoisoned,
}

pub type CheckinResult<T> = std::result::Result<T, CheckinError>;
