use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser)]
#[command(name = "repair-tracker")]
#[command(about = "Track repair-shop equipment through the repair workflow")]
#[command(long_about = "Repair Tracker records equipment brought in for repair and follows it \
                       from AVARIADO to ENTREGUE AO CLIENTE. Get started with 'repair-tracker add' \
                       to register your first piece of equipment.")]
pub struct Cli {
    /// Configuration file (defaults to ./repair-tracker.toml when present)
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, help = "Overwrite repair-tracker.toml if it already exists")]
        force: bool,
    },
    /// List equipment, optionally narrowed by a search term
    List {
        /// Case-insensitive text matched against every field
        #[arg(long, short = 's', help = "Only show equipment where some field contains this text")]
        search: Option<String>,
        /// Print JSON instead of a table
        #[arg(long, help = "Print records as JSON")]
        json: bool,
    },
    /// Show one piece of equipment with its workflow progress
    Show {
        /// Equipment id
        id: i64,
        /// Print JSON instead of a summary
        #[arg(long, help = "Print the record as JSON")]
        json: bool,
    },
    /// Register new equipment
    Add {
        /// Initial workflow state
        #[arg(long, default_value = "AVARIADO", help = "Initial state (e.g. AVARIADO)")]
        state: String,
        #[arg(long, help = "Customer the equipment belongs to")]
        customer: String,
        #[arg(long, help = "Equipment category (e.g. Portátil, Monitor)")]
        category: String,
        #[arg(long, help = "Manufacturer brand")]
        brand: String,
        #[arg(long, help = "Technician responsible for the repair")]
        responsible: String,
        #[command(flatten)]
        details: EquipmentDetails,
    },
    /// Overwrite fields of existing equipment (no workflow check on --state)
    Update {
        /// Equipment id
        id: i64,
        #[arg(long, help = "New state, written as-is without a workflow check")]
        state: Option<String>,
        #[arg(long)]
        customer: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        responsible: Option<String>,
        #[command(flatten)]
        details: EquipmentDetails,
    },
    /// Move equipment to another workflow state
    State {
        /// Equipment id
        id: i64,
        /// Target state (case-insensitive)
        new_state: String,
        /// Skip the workflow check
        #[arg(long, help = "Apply the change even if the workflow does not allow it")]
        force: bool,
    },
    /// Delete equipment
    Remove {
        /// Equipment id
        id: i64,
    },
    /// Show which states can follow the given one
    NextStates {
        /// Current state (case-insensitive)
        state: String,
    },
    /// Show the predefined customers, categories, brands and technicians
    Options,
}

/// Optional descriptive fields shared by `add` and `update`
#[derive(Args, Debug, Default, Clone)]
pub struct EquipmentDetails {
    #[arg(long, help = "End user of the equipment")]
    pub user: Option<String>,
    #[arg(long)]
    pub model: Option<String>,
    #[arg(long)]
    pub serial_number: Option<String>,
    #[arg(long)]
    pub processor: Option<String>,
    #[arg(long, help = "Installed memory (e.g. 16GB)")]
    pub memory_ram: Option<String>,
    #[arg(long)]
    pub storage: Option<String>,
    #[arg(long)]
    pub operating_system: Option<String>,
    #[arg(long, help = "Free-form note about the fault or repair")]
    pub note: Option<String>,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Init { .. } => "init",
            Commands::List { .. } => "list",
            Commands::Show { .. } => "show",
            Commands::Add { .. } => "add",
            Commands::Update { .. } => "update",
            Commands::State { .. } => "state",
            Commands::Remove { .. } => "remove",
            Commands::NextStates { .. } => "next-states",
            Commands::Options => "options",
        }
    }
}
