use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lifecycle::EquipmentState;

/// An equipment record tracked through the repair workflow.
///
/// `id` is 0 until the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: i64,
    pub date_register: NaiveDate,
    pub state: EquipmentState,
    pub customer: String,
    pub user: Option<String>,
    pub category: String,
    pub brand: String,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub processor: Option<String>,
    #[serde(rename = "memoryRAM")]
    pub memory_ram: Option<String>,
    pub storage: Option<String>,
    pub operating_system: Option<String>,
    pub note: Option<String>,
    pub responsible: String,
}

/// Column widths of the equipment table, in characters.
pub mod limits {
    pub const STATE: usize = 20;
    pub const CUSTOMER: usize = 50;
    pub const USER: usize = 50;
    pub const CATEGORY: usize = 20;
    pub const BRAND: usize = 30;
    pub const MODEL: usize = 30;
    pub const SERIAL_NUMBER: usize = 20;
    pub const PROCESSOR: usize = 30;
    pub const MEMORY_RAM: usize = 15;
    pub const STORAGE: usize = 15;
    pub const OPERATING_SYSTEM: usize = 20;
    pub const NOTE: usize = 500;
    pub const RESPONSIBLE: usize = 30;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required field '{field}' is empty")]
    MissingField { field: &'static str },
    #[error("Field '{field}' is {length} characters long, limit is {max}")]
    TooLong {
        field: &'static str,
        length: usize,
        max: usize,
    },
}

impl Equipment {
    /// New unsaved record registered today.
    pub fn new(
        state: EquipmentState,
        customer: impl Into<String>,
        category: impl Into<String>,
        brand: impl Into<String>,
        responsible: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            date_register: Local::now().date_naive(),
            state,
            customer: customer.into(),
            user: None,
            category: category.into(),
            brand: brand.into(),
            model: None,
            serial_number: None,
            processor: None,
            memory_ram: None,
            storage: None,
            operating_system: None,
            note: None,
            responsible: responsible.into(),
        }
    }

    pub fn with_date_register(mut self, date: NaiveDate) -> Self {
        self.date_register = date;
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = Some(serial_number.into());
        self
    }

    pub fn with_processor(mut self, processor: impl Into<String>) -> Self {
        self.processor = Some(processor.into());
        self
    }

    pub fn with_memory_ram(mut self, memory_ram: impl Into<String>) -> Self {
        self.memory_ram = Some(memory_ram.into());
        self
    }

    pub fn with_storage(mut self, storage: impl Into<String>) -> Self {
        self.storage = Some(storage.into());
        self
    }

    pub fn with_operating_system(mut self, operating_system: impl Into<String>) -> Self {
        self.operating_system = Some(operating_system.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Whether the store has assigned an id yet.
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }

    /// Check required fields and column widths before a write.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length("state", self.state.as_str(), limits::STATE)?;

        check_required("customer", &self.customer, limits::CUSTOMER)?;
        check_required("category", &self.category, limits::CATEGORY)?;
        check_required("brand", &self.brand, limits::BRAND)?;
        check_required("responsible", &self.responsible, limits::RESPONSIBLE)?;

        let optional = [
            ("user", &self.user, limits::USER),
            ("model", &self.model, limits::MODEL),
            ("serialNumber", &self.serial_number, limits::SERIAL_NUMBER),
            ("processor", &self.processor, limits::PROCESSOR),
            ("memoryRAM", &self.memory_ram, limits::MEMORY_RAM),
            ("storage", &self.storage, limits::STORAGE),
            ("operatingSystem", &self.operating_system, limits::OPERATING_SYSTEM),
            ("note", &self.note, limits::NOTE),
        ];
        for (field, value, max) in optional {
            if let Some(value) = value {
                check_length(field, value, max)?;
            }
        }

        Ok(())
    }
}

fn check_required(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    check_length(field, value, max)
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length > max {
        return Err(ValidationError::TooLong { field, length, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Equipment {
        Equipment::new(EquipmentState::Broken, "RuIIuR", "Portátil", "Lenovo", "Daniel Marques")
    }

    #[test]
    fn test_new_record_is_unsaved() {
        let equipment = laptop();
        assert_eq!(equipment.id, 0);
        assert!(!equipment.is_persisted());
        assert!(equipment.validate().is_ok());
    }

    #[test]
    fn test_blank_required_field_is_rejected() {
        let mut equipment = laptop();
        equipment.brand = "   ".to_string();
        assert_eq!(
            equipment.validate(),
            Err(ValidationError::MissingField { field: "brand" })
        );
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        // 15 characters, more bytes because of the accents
        let equipment = laptop().with_memory_ram("ÇÇÇÇÇÇÇÇÇÇÇÇÇÇÇ");
        assert!(equipment.validate().is_ok());

        let equipment = laptop().with_note("x".repeat(501));
        assert_eq!(
            equipment.validate(),
            Err(ValidationError::TooLong { field: "note", length: 501, max: 500 })
        );
    }

    #[test]
    fn test_every_state_label_fits_its_column() {
        for state in EquipmentState::ALL {
            assert!(state.as_str().chars().count() <= limits::STATE);
        }
    }

    #[test]
    fn test_json_field_names() {
        let equipment = laptop()
            .with_date_register(NaiveDate::from_ymd_opt(2025, 8, 30).unwrap())
            .with_memory_ram("16GB");
        let value = serde_json::to_value(&equipment).unwrap();
        assert_eq!(value["dateRegister"], "2025-08-30");
        assert_eq!(value["state"], "AVARIADO");
        assert_eq!(value["memoryRAM"], "16GB");
        assert!(value["serialNumber"].is_null());
    }
}
