use anyhow::{anyhow, Result};

use super::parse_state;
use crate::equipment::{Equipment, SqliteEquipmentRepository};

pub struct StateCommand {
    pub id: i64,
    pub new_state: String,
    /// Write the state without consulting the workflow
    pub bypass_workflow: bool,
}

impl StateCommand {
    pub fn new(id: i64, new_state: String, force: bool, enforce_transitions: bool) -> Self {
        Self {
            id,
            new_state,
            bypass_workflow: force || !enforce_transitions,
        }
    }

    pub async fn execute(&self, repository: &SqliteEquipmentRepository) -> Result<()> {
        let next = parse_state(&self.new_state)?;

        if !self.bypass_workflow {
            let updated = repository.transition_to(self.id, next).await?;
            println!("✅ Equipment #{} is now {}", updated.id, updated.state);
            println!("   📈 Progress: {}%", updated.state.progress_percentage());
            return Ok(());
        }

        let current = repository
            .find_by_id(self.id)
            .await
            .ok_or_else(|| anyhow!("Equipment {} not found", self.id))?;
        if !current.state.can_transition_to(next) {
            println!("⚠️  Overriding workflow: {} → {} is not a normal step", current.state, next);
        }

        let updated = Equipment { state: next, ..current };
        if !repository.update_checked(&updated).await {
            return Err(anyhow!("State of equipment {} was not changed", self.id));
        }
        println!("✅ Equipment #{} is now {}", updated.id, updated.state);
        Ok(())
    }
}
