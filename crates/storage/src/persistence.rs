use mockup_core::{ColorScheme, SavedState, ThemeTokens};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;
use crate::memory::MemoryStore;
use crate::traits::{KeyValueStore, StateStore};

/// Storage keys, spelled as the front end spells them.
pub mod keys {
    /// Local: `{ idea, blocks }` JSON.
    pub const STATE: &str = "state";
    /// Local: theme tokens JSON.
    pub const THEME_VARS: &str = "themeVars";
    /// Local: `light` or `dark`.
    pub const COLOR_SCHEME: &str = "theme";
    /// Local: `true` once the walkthrough was completed.
    pub const HAS_ONBOARDED: &str = "hasOnboarded";
    /// Session: `1` right after the user reset the workspace.
    pub const STATE_CLEARED: &str = "state-cleared";
}

/// Typed access to a local and a session store.
///
/// Reads are forgiving: a value that fails to parse is logged and treated
/// as absent, so a corrupt entry never blocks loading the workspace.
pub struct Persistence {
    local: Box<dyn KeyValueStore>,
    session: Box<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(local: Box<dyn KeyValueStore>, session: Box<dyn KeyValueStore>) -> Self {
        Persistence { local, session }
    }

    /// Both areas in memory.
    pub fn in_memory() -> Self {
        Persistence::new(Box::new(MemoryStore::new()), Box::new(MemoryStore::new()))
    }

    fn read_json<T: DeserializeOwned>(
        store: &dyn KeyValueStore,
        key: &str,
    ) -> Result<Option<T>, StorageError> {
        let Some(raw) = store.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring malformed stored value");
                Ok(None)
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(
        store: &dyn KeyValueStore,
        key: &str,
        value: &T,
    ) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        store.set(key, &raw)
    }

    pub fn load_theme_vars(&self) -> Result<Option<ThemeTokens>, StorageError> {
        Self::read_json(self.local.as_ref(), keys::THEME_VARS)
    }

    pub fn save_theme_vars(&self, theme: &ThemeTokens) -> Result<(), StorageError> {
        Self::write_json(self.local.as_ref(), keys::THEME_VARS, theme)
    }

    /// The stored color scheme; unknown values read as absent.
    pub fn load_color_scheme(&self) -> Result<Option<ColorScheme>, StorageError> {
        let raw = self.local.get(keys::COLOR_SCHEME)?;
        Ok(raw.and_then(|v| v.parse().ok()))
    }

    pub fn save_color_scheme(&self, scheme: ColorScheme) -> Result<(), StorageError> {
        self.local.set(keys::COLOR_SCHEME, scheme.as_str())
    }

    pub fn has_onboarded(&self) -> Result<bool, StorageError> {
        Ok(self.local.get(keys::HAS_ONBOARDED)?.as_deref() == Some("true"))
    }

    pub fn mark_onboarded(&self) -> Result<(), StorageError> {
        self.local.set(keys::HAS_ONBOARDED, "true")
    }

    /// Forget the saved workspace and flag the session as freshly reset.
    pub fn clear_state(&self) -> Result<(), StorageError> {
        self.local.remove(keys::STATE)?;
        self.session.set(keys::STATE_CLEARED, "1")
    }

    pub fn was_cleared(&self) -> Result<bool, StorageError> {
        Ok(self.session.get(keys::STATE_CLEARED)?.as_deref() == Some("1"))
    }
}

impl StateStore for Persistence {
    fn load(&self) -> Result<Option<SavedState>, StorageError> {
        Self::read_json(self.local.as_ref(), keys::STATE)
    }

    fn save(&self, state: &SavedState) -> Result<(), StorageError> {
        Self::write_json(self.local.as_ref(), keys::STATE, state)
    }
}
