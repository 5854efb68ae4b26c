// Lifecycle Module - Repair Workflow State Machine
//
// Pure rules over the equipment repair workflow: which state changes are
// allowed and how far along the workflow a state is. Holds no state and
// performs no I/O.

pub mod types;
pub mod engine;

#[cfg(test)]
pub mod tests;

pub use types::{EquipmentState, Phase, UnknownState};
pub use engine::{
    is_phase_active, is_phase_completed, is_valid_transition, phase_index, progress_percentage,
    state_badge_class, valid_next_states,
};
