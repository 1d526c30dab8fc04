use super::ShoutStore;
use crate::error::Result;
use crate::model::Shoutout;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    shoutouts: Vec<Shoutout>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShoutStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Shoutout>> {
        Ok(self.shoutouts.clone())
    }

    fn save(&mut self, shoutouts: &[Shoutout]) -> Result<()> {
        self.shoutouts = shoutouts.to_vec();
        Ok(())
    }
}
