use roster_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
