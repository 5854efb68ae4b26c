// Core types for the equipment repair workflow

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Repair workflow state of an equipment record.
///
/// The canonical label (see [`EquipmentState::as_str`]) is what gets persisted
/// and shown to users. Parsing is case-insensitive and ignores surrounding
/// whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EquipmentState {
    /// AVARIADO
    Broken,
    /// EM REPARAÇÃO
    InRepair,
    /// AGUARDANDO PEÇA - sub-state of the repair phase
    AwaitingPart,
    /// REPARADO
    Repaired,
    /// ENTREGUE AO CLIENTE
    Delivered,
}

/// Position in the progress order shown to users.
///
/// `AwaitingPart` has no phase of its own; it shares `InRepair`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Broken,
    InRepair,
    Repaired,
    Delivered,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown equipment state: '{0}'")]
pub struct UnknownState(pub String);

impl EquipmentState {
    /// Every state, in registration order.
    pub const ALL: [EquipmentState; 5] = [
        EquipmentState::Broken,
        EquipmentState::InRepair,
        EquipmentState::AwaitingPart,
        EquipmentState::Repaired,
        EquipmentState::Delivered,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            EquipmentState::Broken => "AVARIADO",
            EquipmentState::InRepair => "EM REPARAÇÃO",
            EquipmentState::AwaitingPart => "AGUARDANDO PEÇA",
            EquipmentState::Repaired => "REPARADO",
            EquipmentState::Delivered => "ENTREGUE AO CLIENTE",
        }
    }

    /// Normalize a raw label (trim + upper-case) and resolve it.
    ///
    /// Returns `None` for blank or unrecognised input.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize(raw)?;
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == normalized)
    }

    /// Phase this state occupies in the progress order.
    pub const fn phase(self) -> Phase {
        match self {
            EquipmentState::Broken => Phase::Broken,
            EquipmentState::InRepair | EquipmentState::AwaitingPart => Phase::InRepair,
            EquipmentState::Repaired => Phase::Repaired,
            EquipmentState::Delivered => Phase::Delivered,
        }
    }

    /// CSS classes for the state badge.
    pub const fn badge_class(self) -> &'static str {
        match self {
            EquipmentState::Broken => "bg-danger text-white",
            EquipmentState::InRepair => "bg-warning text-dark",
            EquipmentState::AwaitingPart => "bg-info text-white",
            EquipmentState::Repaired => "bg-success text-white",
            EquipmentState::Delivered => "bg-primary text-white",
        }
    }
}

impl Phase {
    /// Progress order, earliest first.
    pub const ORDER: [Phase; 4] = [Phase::Broken, Phase::InRepair, Phase::Repaired, Phase::Delivered];

    /// 0-based position in [`Phase::ORDER`].
    pub const fn index(self) -> usize {
        match self {
            Phase::Broken => 0,
            Phase::InRepair => 1,
            Phase::Repaired => 2,
            Phase::Delivered => 3,
        }
    }

    /// The state that names this phase in the workflow display.
    pub const fn state(self) -> EquipmentState {
        match self {
            Phase::Broken => EquipmentState::Broken,
            Phase::InRepair => EquipmentState::InRepair,
            Phase::Repaired => EquipmentState::Repaired,
            Phase::Delivered => EquipmentState::Delivered,
        }
    }
}

/// Trim and upper-case a state label; `None` when nothing is left.
pub(crate) fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

impl fmt::Display for EquipmentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentState {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownState(s.to_string()))
    }
}

impl TryFrom<String> for EquipmentState {
    type Error = UnknownState;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EquipmentState> for String {
    fn from(state: EquipmentState) -> Self {
        state.as_str().to_string()
    }
}
