//! Kino prefs: best-effort key/value storage for page preferences.
mod error;
mod file;
mod memory;
mod store;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{KeyValueStore, PreferenceStore};
