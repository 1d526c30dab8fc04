//! # Storage Layer
//!
//! This module defines the storage abstraction for shoutout. The [`ShoutStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - All shoutouts stored in a single `shoutouts.json` file
//!   - Pretty-printed JSON array, oldest entry first
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! └── shoutouts.json      # JSON array of all recorded shoutouts
//! ```
//!
//! The whole collection is small enough that stores read and rewrite it
//! wholesale on every operation.

use crate::error::Result;
use crate::model::Shoutout;

pub mod fs;
pub mod memory;

/// Abstract interface for shoutout storage.
///
/// Implementations persist the full collection as one ordered sequence.
pub trait ShoutStore {
    /// Load every stored shoutout, oldest first. A store that has never
    /// been written to reads back as empty.
    fn load(&self) -> Result<Vec<Shoutout>>;

    /// Replace the stored collection wholesale.
    fn save(&mut self, shoutouts: &[Shoutout]) -> Result<()>;
}
