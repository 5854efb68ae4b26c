use anyhow::{anyhow, Result};

use crate::config::RepairTrackerConfig;
use crate::database::DatabaseManager;
use crate::equipment::filter::DATE_FORMAT;
use crate::equipment::{Equipment, SqliteEquipmentRepository};
use crate::lifecycle::EquipmentState;

pub mod add;
pub mod init;
pub mod list;
pub mod next_states;
pub mod options;
pub mod remove;
pub mod show;
pub mod state;
pub mod update;

/// Open the configured database and hand back a repository over it.
///
/// The manager is returned too so the caller can close the pool afterwards.
pub async fn open_repository(
    config: &RepairTrackerConfig,
) -> Result<(DatabaseManager, SqliteEquipmentRepository)> {
    let manager = DatabaseManager::new(&config.database)
        .await
        .map_err(|e| anyhow!("Failed to open database {}: {e}", config.database.url))?;
    let repository = manager.equipment_repository();
    Ok((manager, repository))
}

/// Resolve a state label typed by the user.
pub fn parse_state(raw: &str) -> Result<EquipmentState> {
    EquipmentState::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = EquipmentState::ALL.iter().map(|s| s.as_str()).collect();
        anyhow!("Unknown state '{raw}'. Valid states: {}", known.join(", "))
    })
}

/// Print records as a fixed-width table.
pub fn print_equipment_table(records: &[Equipment]) {
    println!(
        "{:>5}  {:<10}  {:<20}  {:<16}  {:<12}  {:<10}  {:<16}",
        "ID", "DATE", "STATE", "CUSTOMER", "CATEGORY", "BRAND", "RESPONSIBLE"
    );
    println!("{}", "─".repeat(101));
    for equipment in records {
        println!(
            "{:>5}  {:<10}  {:<20}  {:<16}  {:<12}  {:<10}  {:<16}",
            equipment.id,
            equipment.date_register.format(DATE_FORMAT).to_string(),
            equipment.state.as_str(),
            truncate(&equipment.customer, 16),
            truncate(&equipment.category, 12),
            truncate(&equipment.brand, 10),
            truncate(&equipment.responsible, 16),
        );
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let mut shortened: String = value.chars().take(width.saturating_sub(1)).collect();
        shortened.push('…');
        shortened
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_state_lists_valid_options() {
        assert_eq!(parse_state(" reparado ").unwrap(), EquipmentState::Repaired);
        let err = parse_state("PERDIDO").unwrap_err().to_string();
        assert!(err.contains("PERDIDO"));
        assert!(err.contains("ENTREGUE AO CLIENTE"));
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("Portátil", 12), "Portátil");
        assert_eq!(truncate("ContruMadeira", 6), "Contr…");
    }
}
