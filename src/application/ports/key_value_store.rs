/// Single-process local key-value store backing the client's persisted state.
/// Writes are whole-value replacements; there is no partial update.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store read failed: {0}")]
    ReadFailed(String),
    #[error("store write failed: {0}")]
    WriteFailed(String),
}
