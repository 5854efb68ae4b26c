use anyhow::{anyhow, Result};

use super::parse_state;
use crate::cli::EquipmentDetails;
use crate::equipment::options::{self, canonical};
use crate::equipment::{Equipment, SqliteEquipmentRepository};

pub struct AddCommand {
    pub state: String,
    pub customer: String,
    pub category: String,
    pub brand: String,
    pub responsible: String,
    pub details: EquipmentDetails,
}

impl AddCommand {
    pub fn new(
        state: String,
        customer: String,
        category: String,
        brand: String,
        responsible: String,
        details: EquipmentDetails,
    ) -> Self {
        Self {
            state,
            customer,
            category,
            brand,
            responsible,
            details,
        }
    }

    /// Build the record, using the pick-list spelling where the value matches one.
    pub fn build(&self) -> Result<Equipment> {
        let state = parse_state(&self.state)?;
        let pick = |list: &[&str], value: &str| {
            canonical(list, value)
                .map(str::to_string)
                .unwrap_or_else(|| value.trim().to_string())
        };

        let equipment = Equipment::new(
            state,
            pick(options::CUSTOMERS, &self.customer),
            pick(options::CATEGORIES, &self.category),
            pick(options::BRANDS, &self.brand),
            pick(options::RESPONSIBLE, &self.responsible),
        );
        Ok(apply_details(equipment, &self.details))
    }

    pub async fn execute(&self, repository: &SqliteEquipmentRepository) -> Result<()> {
        let equipment = self.build()?;
        equipment.validate()?;

        let saved = repository.add(equipment).await;
        if !saved.is_persisted() {
            return Err(anyhow!("Equipment was not saved; check the log for details"));
        }

        println!("✅ Registered equipment #{}", saved.id);
        println!("   🏷️  {} · {} {} for {}", saved.state, saved.category, saved.brand, saved.customer);
        Ok(())
    }
}

/// Copy every optional detail that was given onto the record.
pub fn apply_details(mut equipment: Equipment, details: &EquipmentDetails) -> Equipment {
    let fields = [
        (&mut equipment.user, &details.user),
        (&mut equipment.model, &details.model),
        (&mut equipment.serial_number, &details.serial_number),
        (&mut equipment.processor, &details.processor),
        (&mut equipment.memory_ram, &details.memory_ram),
        (&mut equipment.storage, &details.storage),
        (&mut equipment.operating_system, &details.operating_system),
        (&mut equipment.note, &details.note),
    ];
    for (target, value) in fields {
        if let Some(value) = value {
            *target = Some(value.clone());
        }
    }
    equipment
}
