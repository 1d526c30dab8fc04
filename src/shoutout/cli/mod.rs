//! # CLI Behavior
//!
//! This is **one possible UI client** for shoutout—not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! For the overall architecture, see the crate-level documentation in
//! [`shoutout`].
//!
//! ## Flag-Driven Modes
//!
//! A single invocation does exactly one of three things:
//!
//! - `shoutout --reset` wipes the store (after a confirmation prompt).
//! - `shoutout --list` prints every shoutout, grouped by name.
//! - Anything else records a new shoutout. `--name` and `--shout` supply the
//!   fields up front; whichever is missing is asked for interactively.
//!
//! `--reset` wins over `--list`, which wins over the default add mode.
//!
//! ## Naked Execution (`shoutout`)
//!
//! Running `shoutout` with no arguments drops straight into the interactive
//! add flow. Recording a shoutout is the common case—it should be the path of
//! least resistance.

mod commands;
mod render;
pub mod setup;

pub use commands::run;
