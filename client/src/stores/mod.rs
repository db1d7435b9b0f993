//! Input state owned by the client
//!
//! Each store mutates only through its own operations; the controller and
//! gateway read snapshots and never reach into store internals.

pub mod files;
pub mod preferences;

pub use files::{FileSelection, FileSlot, StagedFile};
pub use preferences::PreferencesStore;
