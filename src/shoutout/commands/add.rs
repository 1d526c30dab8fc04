use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShoutoutError};
use crate::model::Shoutout;
use crate::store::ShoutStore;

pub fn run<S: ShoutStore>(store: &mut S, name: &str, shoutout: &str) -> Result<CmdResult> {
    let name = name.trim();
    let shoutout = shoutout.trim();
    if name.is_empty() {
        return Err(ShoutoutError::Api("Name cannot be empty".into()));
    }
    if shoutout.is_empty() {
        return Err(ShoutoutError::Api("Shoutout cannot be empty".into()));
    }

    let mut shoutouts = store.load()?;
    let record = Shoutout::new(name.to_string(), shoutout.to_string());
    shoutouts.push(record.clone());
    store.save(&shoutouts)?;

    let mut result = CmdResult::default();
    result.affected.push(record);
    result.add_message(CmdMessage::success("Shoutout added successfully!"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_to_the_end_of_the_store() {
        let mut store = InMemoryStore::new();
        run(&mut store, "Ana", "First").unwrap();
        run(&mut store, "Bo", "Second").unwrap();

        let stored = store.load().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].shoutout, "First");
        assert_eq!(stored[1].shoutout, "Second");
    }

    #[test]
    fn trims_name_and_shoutout() {
        let mut store = InMemoryStore::new();
        run(&mut store, "  Ana  ", "  Nice work  ").unwrap();

        let stored = store.load().unwrap();
        assert_eq!(stored[0].name, "Ana");
        assert_eq!(stored[0].shoutout, "Nice work");
    }

    #[test]
    fn reports_success_and_affected_record() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Ana", "Nice work").unwrap();

        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.affected[0].name, "Ana");
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "Shoutout added successfully!");
    }

    #[test]
    fn rejects_blank_name() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "   ", "Nice work").unwrap_err();
        assert!(matches!(err, ShoutoutError::Api(_)));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn rejects_blank_shoutout() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "Ana", "").unwrap_err();
        assert!(matches!(err, ShoutoutError::Api(_)));
        assert!(store.load().unwrap().is_empty());
    }
}
