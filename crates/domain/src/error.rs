#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error("failed to serialize value: {0}")]
    Serialization(Box<dyn std::error::Error>),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}
