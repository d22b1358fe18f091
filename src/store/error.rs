use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to persist command: {0}")]
    PersistenceFailed(#[from] std::io::Error),
}
