//! Test fixtures: throwaway SQLite databases and sample equipment
#![allow(dead_code)]

use chrono::NaiveDate;
use repair_tracker::config::DatabaseConfig;
use repair_tracker::{DatabaseManager, Equipment, EquipmentState, SqliteEquipmentRepository};
use tempfile::TempDir;

/// A migrated database living in its own temporary directory
pub struct TestDatabase {
    pub manager: DatabaseManager,
    pub url: String,
    _dir: TempDir,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite://{}", dir.path().join("equipment.db").display());
        let config = DatabaseConfig {
            url: url.clone(),
            max_connections: 4,
            auto_migrate: true,
        };
        let manager = DatabaseManager::new(&config)
            .await
            .expect("Failed to create test database");

        Self {
            manager,
            url,
            _dir: dir,
        }
    }

    pub fn repository(&self) -> SqliteEquipmentRepository {
        self.manager.equipment_repository()
    }
}

pub fn registered_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 30).expect("valid date")
}

/// A broken laptop for the given customer
pub fn laptop(customer: &str) -> Equipment {
    Equipment::new(EquipmentState::Broken, customer, "Portátil", "Lenovo", "Daniel Marques")
        .with_date_register(registered_on())
        .with_model("ThinkPad T14")
        .with_serial_number("PF3XK2")
        .with_processor("i5-1135G7")
        .with_memory_ram("16GB")
        .with_storage("512GB SSD")
        .with_operating_system("Windows 11")
        .with_note("Não liga")
}

/// A monitor with only the required fields filled in
pub fn bare_monitor(customer: &str) -> Equipment {
    Equipment::new(EquipmentState::InRepair, customer, "Monitor", "Dell", "Miguel Lemos")
        .with_date_register(registered_on())
}
