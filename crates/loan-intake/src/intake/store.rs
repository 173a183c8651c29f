use super::domain::{ApplicationId, ApplicationRecord};

/// Storage abstraction over the application collection.
///
/// Each insert is a single independent operation; the store guarantees
/// nothing across requests beyond identifier uniqueness. Records are
/// immutable once written, so the trait carries no update or delete.
pub trait ApplicationStore: Send + Sync {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, StoreError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
