use crate::commands::CmdResult;
use crate::error::Result;
use crate::group::group_by_name;
use crate::store::ShoutStore;

pub fn run<S: ShoutStore>(store: &S) -> Result<CmdResult> {
    let shoutouts = store.load()?;
    Ok(CmdResult::default().with_groups(group_by_name(shoutouts)))
}
