// Repair workflow rules: allowed transitions and progress derivation.
//
// Everything here is pure. Callers decide whether to consult
// `can_transition_to` before persisting a state change.

use super::types::{normalize, EquipmentState, Phase};

impl EquipmentState {
    /// States reachable in one step, excluding the self-loop.
    pub const fn next_states(self) -> &'static [EquipmentState] {
        use EquipmentState::*;
        match self {
            Broken => &[InRepair, AwaitingPart],
            InRepair => &[Repaired, AwaitingPart, Broken],
            AwaitingPart => &[InRepair, Broken],
            Repaired => &[Delivered, InRepair],
            // Reopen
            Delivered => &[Broken],
        }
    }

    /// Staying in the same state is always allowed.
    pub fn can_transition_to(self, next: EquipmentState) -> bool {
        self == next || self.next_states().contains(&next)
    }

    /// Completion percentage in `0..=100` for the workflow progress bar.
    pub fn progress_percentage(self) -> u8 {
        let position = self.phase().index() + 1;
        let ratio = position as f64 / Phase::ORDER.len() as f64;
        (ratio * 100.0).round() as u8
    }

    pub const fn phase_index(self) -> usize {
        self.phase().index()
    }

    /// Whether `phase` lies strictly behind this state in the progress order.
    pub fn is_phase_completed(self, phase: EquipmentState) -> bool {
        self.phase_index() > phase.phase_index()
    }

    /// Whether `phase` is the one currently shown as active. Waiting for a part
    /// keeps the repair phase active.
    pub fn is_phase_active(self, phase: EquipmentState) -> bool {
        self == phase || (self == EquipmentState::AwaitingPart && phase == EquipmentState::InRepair)
    }
}

/// Check a transition between two raw labels.
///
/// Labels that are equal after normalization are always accepted. Blank input
/// on either side is rejected.
pub fn is_valid_transition(current: &str, next: &str) -> bool {
    let (Some(current_norm), Some(next_norm)) = (normalize(current), normalize(next)) else {
        return false;
    };
    if current_norm == next_norm {
        return true;
    }
    match (EquipmentState::parse(current), EquipmentState::parse(next)) {
        (Some(from), Some(to)) => from.can_transition_to(to),
        _ => false,
    }
}

/// Allowed targets for a raw label; empty for blank or unknown input.
pub fn valid_next_states(current: &str) -> Vec<EquipmentState> {
    EquipmentState::parse(current)
        .map(|state| state.next_states().to_vec())
        .unwrap_or_default()
}

/// Progress for a raw label; 0 for blank or unknown input.
pub fn progress_percentage(state: &str) -> u8 {
    EquipmentState::parse(state)
        .map(EquipmentState::progress_percentage)
        .unwrap_or(0)
}

/// 0-based phase position for a raw label, -1 when it does not resolve.
pub fn phase_index(state: &str) -> i32 {
    EquipmentState::parse(state)
        .map(|s| s.phase_index() as i32)
        .unwrap_or(-1)
}

pub fn is_phase_completed(current: &str, phase: &str) -> bool {
    match (EquipmentState::parse(current), EquipmentState::parse(phase)) {
        (Some(current), Some(phase)) => current.is_phase_completed(phase),
        _ => false,
    }
}

pub fn is_phase_active(current: &str, phase: &str) -> bool {
    let (Some(current_norm), Some(phase_norm)) = (normalize(current), normalize(phase)) else {
        return false;
    };
    if current_norm == phase_norm {
        return true;
    }
    match (EquipmentState::parse(current), EquipmentState::parse(phase)) {
        (Some(current), Some(phase)) => current.is_phase_active(phase),
        _ => false,
    }
}

/// Badge classes for a raw label, with a neutral fallback.
pub fn state_badge_class(state: &str) -> &'static str {
    EquipmentState::parse(state)
        .map(EquipmentState::badge_class)
        .unwrap_or("bg-secondary text-white")
}
