use anyhow::Result;

use super::print_equipment_table;
use crate::equipment::SqliteEquipmentRepository;

pub struct ListCommand {
    pub search: Option<String>,
    pub json: bool,
}

impl ListCommand {
    pub fn new(search: Option<String>, json: bool) -> Self {
        Self { search, json }
    }

    pub async fn execute(&self, repository: &SqliteEquipmentRepository) -> Result<()> {
        let records = repository.list().await;
        let records = match &self.search {
            Some(term) => repository.filter(term, records),
            None => records,
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&records)?);
            return Ok(());
        }

        if records.is_empty() {
            println!("📋 No equipment found");
            if self.search.is_none() {
                println!("   💡 Register equipment with: repair-tracker add --customer ... --category ... --brand ... --responsible ...");
            }
            return Ok(());
        }

        print_equipment_table(&records);
        println!();
        println!("📦 {} record(s)", records.len());
        Ok(())
    }
}
