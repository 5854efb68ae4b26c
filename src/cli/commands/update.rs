use anyhow::{anyhow, Result};

use super::add::apply_details;
use super::parse_state;
use crate::cli::EquipmentDetails;
use crate::equipment::SqliteEquipmentRepository;

pub struct UpdateCommand {
    pub id: i64,
    pub state: Option<String>,
    pub customer: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub responsible: Option<String>,
    pub details: EquipmentDetails,
}

impl UpdateCommand {
    pub async fn execute(&self, repository: &SqliteEquipmentRepository) -> Result<()> {
        let mut equipment = repository
            .find_by_id(self.id)
            .await
            .ok_or_else(|| anyhow!("Equipment {} not found", self.id))?;

        if let Some(state) = &self.state {
            equipment.state = parse_state(state)?;
        }
        let required = [
            (&mut equipment.customer, &self.customer),
            (&mut equipment.category, &self.category),
            (&mut equipment.brand, &self.brand),
            (&mut equipment.responsible, &self.responsible),
        ];
        for (target, value) in required {
            if let Some(value) = value {
                *target = value.trim().to_string();
            }
        }
        let equipment = apply_details(equipment, &self.details);
        equipment.validate()?;

        if !repository.update_checked(&equipment).await {
            return Err(anyhow!("Equipment {} was not updated; check the log for details", self.id));
        }

        println!("✅ Updated equipment #{}", equipment.id);
        Ok(())
    }
}
