// Repair Tracker Library - equipment repair workflow and persistence
// This exposes the core components for testing and integration

pub mod lifecycle;
pub mod equipment;
pub mod config;
pub mod telemetry;
pub mod database;
pub mod cli;

// Re-export key types for easy access
pub use lifecycle::{EquipmentState, Phase, UnknownState};
pub use equipment::{
    filter_equipment, Equipment, EquipmentRepository, EquipmentStore, RebaseOutcome,
    SqliteEquipmentRepository, SqliteEquipmentStore, StoreError, TransitionError, ValidationError,
};
pub use config::RepairTrackerConfig;
pub use telemetry::{init_telemetry, generate_correlation_id, operation_span};
pub use database::DatabaseManager;
