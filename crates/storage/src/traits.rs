use mockup_core::SavedState;

use crate::error::StorageError;

/// String-keyed, string-valued storage area.
///
/// Semantics follow browser `localStorage`: `get` of a missing key is
/// `Ok(None)`, `set` overwrites, and `remove` of a missing key succeeds.
///
/// Implementations must be `Send + Sync` so a store can sit in shared
/// server state.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Where the workspace's `{ idea, blocks }` is loaded from and saved to.
pub trait StateStore {
    /// The saved state, or `None` if nothing (valid) is stored.
    fn load(&self) -> Result<Option<SavedState>, StorageError>;

    fn save(&self, state: &SavedState) -> Result<(), StorageError>;
}
