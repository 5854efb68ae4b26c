use anyhow::{anyhow, Result};

use crate::equipment::filter::DATE_FORMAT;
use crate::equipment::{Equipment, SqliteEquipmentRepository};
use crate::lifecycle::Phase;

pub struct ShowCommand {
    pub id: i64,
    pub json: bool,
}

impl ShowCommand {
    pub fn new(id: i64, json: bool) -> Self {
        Self { id, json }
    }

    pub async fn execute(&self, repository: &SqliteEquipmentRepository) -> Result<()> {
        let equipment = repository
            .find_by_id(self.id)
            .await
            .ok_or_else(|| anyhow!("Equipment {} not found", self.id))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&equipment)?);
            return Ok(());
        }

        print_details(&equipment);
        println!();
        print_workflow(&equipment);
        Ok(())
    }
}

fn print_details(equipment: &Equipment) {
    println!("🔧 EQUIPMENT #{}", equipment.id);
    println!("─────────────────");
    println!("   📅 Registered:  {}", equipment.date_register.format(DATE_FORMAT));
    println!("   🏷️  State:       {}", equipment.state);
    println!("   👤 Customer:    {}", equipment.customer);
    println!("   📦 Category:    {}", equipment.category);
    println!("   🏭 Brand:       {}", equipment.brand);
    println!("   🧑‍🔧 Responsible: {}", equipment.responsible);

    let optional = [
        ("User", &equipment.user),
        ("Model", &equipment.model),
        ("Serial number", &equipment.serial_number),
        ("Processor", &equipment.processor),
        ("Memory", &equipment.memory_ram),
        ("Storage", &equipment.storage),
        ("OS", &equipment.operating_system),
        ("Note", &equipment.note),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            println!("   • {label}: {value}");
        }
    }
}

fn print_workflow(equipment: &Equipment) {
    let state = equipment.state;
    let percentage = state.progress_percentage();
    let filled = usize::from(percentage) / 5;

    println!("📈 WORKFLOW PROGRESS: {percentage}%");
    println!("   [{}{}]", "█".repeat(filled), "░".repeat(20 - filled));

    for phase in Phase::ORDER {
        let phase_state = phase.state();
        let marker = if state.is_phase_active(phase_state) {
            "▶️ "
        } else if state.is_phase_completed(phase_state) {
            "✅"
        } else {
            "⬜"
        };
        println!("   {marker} {phase_state}");
    }

    let next: Vec<&str> = state.next_states().iter().map(|s| s.as_str()).collect();
    println!();
    println!("🔀 Next possible states: {}", next.join(", "));
}
