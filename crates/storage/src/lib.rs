//! mockup-storage: where a workspace lives between runs.
//!
//! The layout mirrors the browser storage the front end uses: a
//! persistent "local" key-value area and a transient "session" area,
//! each behind the [`KeyValueStore`] trait. [`Persistence`] layers typed
//! access on top and implements [`StateStore`], the `load()`/`save()`
//! collaborator the workspace is saved through.

pub mod conformance;
mod error;
mod file;
mod memory;
mod persistence;
mod traits;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use persistence::{keys, Persistence};
pub use traits::{KeyValueStore, StateStore};
