use thiserror::Error;

/// Failures from the key-value backend or from (de)serializing the
/// note collection. Read-side failures never reach repository callers;
/// `NoteStore::load_all` degrades to an empty collection instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode note collection: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("no data directory available on this device")]
    NoDataDir,
}
