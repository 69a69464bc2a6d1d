//! # Storage Layer
//!
//! This module defines the persistence seam for khana. The [`StorageBackend`]
//! trait allows the recipe book to work with different durable slots.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, sync service, etc.) without changing
//!   core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Slot Layout
//!
//! Two independent keyed entries:
//! - the recipe collection, one serialized JSON array (whole-collection
//!   replace on every write, never incremental)
//! - the theme preference, one serialized string (`"light"` or `"dark"`)
//!
//! ## Corruption Policy
//!
//! An absent or unparsable recipe slot is not an error. `load_recipes`
//! reseeds the built-in defaults and writes them back so the next load is
//! stable. The same applies to content that parses but is not an array of
//! records. A theme slot that fails to parse falls back to [`Theme::Light`].
//!
//! A failed save must leave the previously persisted bytes unchanged:
//! implementations serialize the full collection first and only then touch
//! the slot.

use crate::error::Result;
use crate::model::{Recipe, Theme};

pub mod fs;
pub mod memory;

/// Abstract interface for recipe persistence.
pub trait StorageBackend {
    /// Load the full collection. Absent or corrupted data reseeds the
    /// defaults; the only error path is the reseed write-back itself failing.
    fn load_recipes(&mut self) -> Result<Vec<Recipe>>;

    /// Replace the persisted collection atomically.
    fn save_recipes(&mut self, recipes: &[Recipe]) -> Result<()>;

    /// Load the theme preference, falling back to light.
    fn load_theme(&self) -> Theme;

    /// Persist the theme preference.
    fn save_theme(&mut self, theme: Theme) -> Result<()>;
}
