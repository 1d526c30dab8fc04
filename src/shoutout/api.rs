//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all shoutout operations, regardless of the UI being used.
//!
//! The facade dispatches to command functions and returns structured
//! `Result<CmdResult>` values. It performs no I/O and no presentation work;
//! that belongs to the caller.
//!
//! ## Generic Over ShoutStore
//!
//! `ShoutoutApi<S: ShoutStore>` is generic over the storage backend:
//! - Production: `ShoutoutApi<FileStore>`
//! - Testing: `ShoutoutApi<InMemoryStore>`
//!
//! This enables testing the API layer without touching the filesystem.

use crate::commands;
use crate::error::Result;
use crate::store::ShoutStore;

/// The main API facade for shoutout operations.
///
/// Generic over `ShoutStore` to allow different storage backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct ShoutoutApi<S: ShoutStore> {
    store: S,
}

impl<S: ShoutStore> ShoutoutApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_shoutout(&mut self, name: &str, shoutout: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, shoutout)
    }

    pub fn list_shoutouts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn reset_shoutouts(&mut self) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.store)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
