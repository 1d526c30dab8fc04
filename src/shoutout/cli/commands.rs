//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Prompts the user
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into a [`Mode`] via clap
//! 2. **Context Setup**: Resolve the data directory and build the API
//! 3. **Dispatch**: Route the mode to a handler
//! 4. **Prompting**: Fill in missing input and confirm destructive operations
//! 5. **Output Formatting**: Render results and messages for the terminal
//!
//! Handlers are generic over [`ShoutStore`] and [`Prompter`] so they can be
//! exercised in tests with `InMemoryStore` and `ScriptedPrompter`.

use super::render;
use super::setup::{Cli, Mode};
use clap::Parser;
use directories::ProjectDirs;
use shoutout::api::{CmdMessage, ShoutoutApi};
use shoutout::error::{Result, ShoutoutError};
use shoutout::prompt::{prompt_required, Prompter, TermPrompter};
use shoutout::store::fs::FileStore;
use shoutout::store::ShoutStore;
use std::path::PathBuf;

const NAME_PROMPT: &str = "Enter a Name:";
const SHOUT_PROMPT: &str = "Enter a Shoutout:";
const RESET_PROMPT: &str =
    "Are you sure you want to reset ALL Shoutouts? This cannot be undone.";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = FileStore::new(data_dir()?);
    let mut api = ShoutoutApi::new(store);
    let mut prompter = TermPrompter::new();

    match cli.mode() {
        Mode::Reset => handle_reset(&mut api, &mut prompter),
        Mode::List => handle_list(&api),
        Mode::Add { name, shout } => handle_add(&mut api, &mut prompter, &name, &shout),
    }
}

/// Where the data file lives:
/// 1. `SHOUTOUT_DATA` environment variable (primarily for testing)
/// 2. The OS-appropriate data directory via the `directories` crate
fn data_dir() -> Result<PathBuf> {
    match std::env::var_os("SHOUTOUT_DATA") {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => {
            let proj_dirs = ProjectDirs::from("com", "shoutout", "shoutout").ok_or_else(|| {
                ShoutoutError::Store("Could not determine a data directory".to_string())
            })?;
            Ok(proj_dirs.data_dir().to_path_buf())
        }
    }
}

fn handle_add<S: ShoutStore, P: Prompter>(
    api: &mut ShoutoutApi<S>,
    prompter: &mut P,
    name: &str,
    shout: &str,
) -> Result<()> {
    // Whatever the flags did not supply (or supplied blank) is asked for
    // interactively.
    let name = match name.trim() {
        "" => prompt_required(prompter, NAME_PROMPT)?,
        given => given.to_string(),
    };
    let shout = match shout.trim() {
        "" => prompt_required(prompter, SHOUT_PROMPT)?,
        given => given.to_string(),
    };

    let result = api.add_shoutout(&name, &shout)?;
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_list<S: ShoutStore>(api: &ShoutoutApi<S>) -> Result<()> {
    let result = api.list_shoutouts()?;
    print!("{}", render::render_groups(&result.groups));
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_reset<S: ShoutStore, P: Prompter>(
    api: &mut ShoutoutApi<S>,
    prompter: &mut P,
) -> Result<()> {
    if !prompter.prompt_confirm(RESET_PROMPT)? {
        render::print_messages(&[CmdMessage::info("Reset aborted.")]);
        return Ok(());
    }

    let result = api.reset_shoutouts()?;
    render::print_messages(&result.messages);
    Ok(())
}
