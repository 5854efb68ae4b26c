use anyhow::{anyhow, Result};

use crate::equipment::SqliteEquipmentRepository;

pub struct RemoveCommand {
    pub id: i64,
}

impl RemoveCommand {
    pub fn new(id: i64) -> Self {
        Self { id }
    }

    pub async fn execute(&self, repository: &SqliteEquipmentRepository) -> Result<()> {
        if !repository.remove(self.id).await {
            return Err(anyhow!("Equipment {} was not removed (missing or storage error)", self.id));
        }

        println!("🗑️  Removed equipment #{}", self.id);
        Ok(())
    }
}
