// Equipment Module - records, storage and search
//
// `EquipmentRepository` is the entry point; it sits on top of any
// `EquipmentStore`, normally the SQLite one.

pub mod model;
pub mod options;
pub mod filter;
pub mod store;
pub mod sqlite;
pub mod repository;

pub use model::{Equipment, ValidationError};
pub use filter::filter_equipment;
pub use store::{EquipmentStore, StoreError};
pub use sqlite::SqliteEquipmentStore;
pub use repository::{EquipmentRepository, RebaseOutcome, TransitionError};

/// Repository over the SQLite store, as used by the binary.
pub type SqliteEquipmentRepository = EquipmentRepository<SqliteEquipmentStore>;
