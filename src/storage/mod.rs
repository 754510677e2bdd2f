//! Storage abstraction for persisted documents.
//!
//! Every collection is a standalone JSON document addressed by a short key.
//! Backends store raw JSON strings so the trait stays object safe and the
//! manager keeps full control over serialization.

pub mod json_backend;

pub use json_backend::JsonStorage;

use crate::errors::LedgerError;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Document keys, one per persisted collection.
pub mod keys {
    pub const TRANSACTIONS: &str = "tx";
    pub const BUDGETS: &str = "budgets";
    pub const GOALS: &str = "goals";
    pub const DEBTS: &str = "debts";
    pub const BILLS: &str = "bills";
    pub const PROFILE: &str = "profile";
    pub const CURRENCY: &str = "currency";
    pub const DARK_MODE: &str = "darkMode";
}

/// A key-value store for JSON documents.
pub trait StorageBackend: Send + Sync {
    /// Persists `json` under `key`, replacing any previous document.
    fn save(&self, key: &str, json: &str) -> Result<()>;

    /// Loads the document under `key`, or `None` if it was never written.
    fn load(&self, key: &str) -> Result<Option<String>>;
}
