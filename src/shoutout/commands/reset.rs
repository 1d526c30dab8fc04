use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ShoutStore;

/// Unconditionally clears the store. Callers that want a confirmation step
/// must ask before invoking this.
pub fn run<S: ShoutStore>(store: &mut S) -> Result<CmdResult> {
    store.save(&[])?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("All shoutouts have been reset."));
    Ok(result)
}
