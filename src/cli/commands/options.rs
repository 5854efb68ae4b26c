use anyhow::Result;

use crate::equipment::options;

pub struct OptionsCommand;

impl OptionsCommand {
    pub async fn execute(&self) -> Result<()> {
        let states: Vec<&str> = options::STATES.iter().map(|s| s.as_str()).collect();
        print_list("🏷️  STATES", &states);
        print_list("👤 CUSTOMERS", options::CUSTOMERS);
        print_list("📦 CATEGORIES", options::CATEGORIES);
        print_list("🏭 BRANDS", options::BRANDS);
        print_list("🧑‍🔧 RESPONSIBLE", options::RESPONSIBLE);
        Ok(())
    }
}

fn print_list(title: &str, values: &[&str]) {
    println!("{title}:");
    for value in values {
        println!("   • {value}");
    }
    println!();
}
