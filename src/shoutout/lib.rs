//! # Shoutout Architecture
//!
//! Shoutout is a **UI-agnostic shoutout-tracking library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, formats output                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ShoutStore trait                                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The one deliberately terminal-flavored piece of the library is the
//! [`prompt`] module, and even there the [`prompt::Prompter`] trait keeps the
//! actual TTY behind a seam so handlers stay testable.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): Thorough unit tests of business logic
//!    against `InMemoryStore`. This is where the lion's share of testing lives.
//!
//! 2. **API** (`api.rs`): Tests verifying correct dispatch and return types.
//!
//! 3. **CLI** (`cli/` + thin `main.rs`): Tests argument parsing, prompting via
//!    `ScriptedPrompter`, and rendering of `CmdResult` values.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data type (`Shoutout`)
//! - [`group`]: Grouping of shoutouts by name for display
//! - [`prompt`]: Interactive prompting behind a testable trait
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal rendering for the binary (not part
//!   of the lib API)

pub mod api;
pub mod commands;
pub mod error;
pub mod group;
pub mod model;
pub mod prompt;
pub mod store;
