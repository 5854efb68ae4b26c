use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn, Instrument};

use super::filter::filter_equipment;
use super::model::Equipment;
use super::store::{EquipmentStore, StoreError};
use crate::lifecycle::EquipmentState;
use crate::telemetry::operation_span;

/// Why a requested state change did not take effect.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Equipment {id} not found")]
    NotFound { id: i64 },

    #[error("Transition from '{from}' to '{to}' is not allowed")]
    InvalidTransition {
        from: EquipmentState,
        to: EquipmentState,
    },

    #[error("State change for equipment {id} was not saved")]
    NotApplied { id: i64 },
}

/// What the id re-basing pass ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebaseOutcome {
    /// Table empty, counter reset so the next id is 1.
    Reset,
    /// Counter already pointed at `max + 1`.
    AlreadyAligned { max_id: i64 },
    /// Counter moved so the next id is `max_id + 1`.
    Rebased { max_id: i64 },
    /// A storage call failed; nothing further was attempted.
    Failed,
}

/// Equipment persistence with failure absorption and id continuity.
///
/// Storage errors never escape: they are logged and turned into an empty
/// list, the unchanged input, `None` or `false`.
pub struct EquipmentRepository<S: EquipmentStore> {
    store: S,
    // Serialises every write from this process: inserts against delete +
    // re-base, and transition checks against the write they guard.
    write_lock: Mutex<()>,
}

impl<S: EquipmentStore> EquipmentRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All records, or an empty list if the store could not be read.
    pub async fn list(&self) -> Vec<Equipment> {
        async {
            match self.store.fetch_all().await {
                Ok(records) => {
                    debug!(count = records.len(), "Listed equipment");
                    records
                }
                Err(e) => {
                    error!(operation = "list", error = %e, "Failed to list equipment");
                    Vec::new()
                }
            }
        }
        .instrument(operation_span("list", None))
        .await
    }

    /// Persist a new record and return it with its generated id. On failure
    /// the input comes back untouched.
    pub async fn add(&self, equipment: Equipment) -> Equipment {
        async move {
            if let Err(e) = equipment.validate() {
                warn!(
                    operation = "add",
                    category = %equipment.category,
                    error = %e,
                    "Rejected invalid equipment"
                );
                return equipment;
            }

            let _guard = self.write_lock.lock().await;
            match self.store.insert(&equipment).await {
                Ok(id) => {
                    info!(operation = "add", equipment_id = id, category = %equipment.category, "Equipment added");
                    Equipment { id, ..equipment }
                }
                Err(e) => {
                    error!(
                        operation = "add",
                        equipment_id = equipment.id,
                        category = %equipment.category,
                        error = %e,
                        "Failed to add equipment"
                    );
                    equipment
                }
            }
        }
        .instrument(operation_span("add", None))
        .await
    }

    /// Read-only lookup. `None` covers both a missing id and a failed read.
    pub async fn find_by_id(&self, id: i64) -> Option<Equipment> {
        async {
            match self.store.fetch_by_id(id).await {
                Ok(found) => {
                    if found.is_none() {
                        debug!(equipment_id = id, "Equipment not found");
                    }
                    found
                }
                Err(e) => {
                    error!(operation = "find_by_id", equipment_id = id, error = %e, "Failed to look up equipment");
                    None
                }
            }
        }
        .instrument(operation_span("find_by_id", Some(id)))
        .await
    }

    /// Replace every field of the stored record with the given values. No
    /// transition check is made; see [`EquipmentRepository::transition_to`].
    ///
    /// An unknown id is a no-op: nothing is inserted and a warning is logged.
    pub async fn update(&self, equipment: Equipment) -> Equipment {
        self.update_checked(&equipment).await;
        equipment
    }

    /// Same as [`EquipmentRepository::update`], but reports whether a row
    /// was changed. `false` covers an unknown id, an invalid record and a
    /// storage failure.
    pub async fn update_checked(&self, equipment: &Equipment) -> bool {
        async {
            let _guard = self.write_lock.lock().await;
            self.try_update(equipment).await
        }
        .instrument(operation_span("update", Some(equipment.id)))
        .await
    }

    /// Returns whether a row was actually changed. Callers hold `write_lock`.
    async fn try_update(&self, equipment: &Equipment) -> bool {
        if let Err(e) = equipment.validate() {
            warn!(operation = "update", equipment_id = equipment.id, error = %e, "Rejected invalid equipment");
            return false;
        }

        match self.store.update(equipment).await {
            Ok(0) => {
                warn!(operation = "update", equipment_id = equipment.id, "No equipment with this id, nothing changed");
                false
            }
            Ok(_) => {
                info!(operation = "update", equipment_id = equipment.id, state = %equipment.state, "Equipment updated");
                true
            }
            Err(e) => {
                error!(
                    operation = "update",
                    equipment_id = equipment.id,
                    category = %equipment.category,
                    error = %e,
                    "Failed to update equipment"
                );
                false
            }
        }
    }

    /// Move a record to `next` only if the workflow allows it from its
    /// stored state. The read, check and write happen under `write_lock`, so
    /// two concurrent transitions of one record are checked one after the
    /// other.
    pub async fn transition_to(&self, id: i64, next: EquipmentState) -> Result<Equipment, TransitionError> {
        let span = operation_span("transition_to", Some(id));
        async {
            let _guard = self.write_lock.lock().await;
            let current = match self.store.fetch_by_id(id).await {
                Ok(Some(current)) => current,
                Ok(None) => return Err(TransitionError::NotFound { id }),
                Err(e) => {
                    error!(operation = "transition_to", equipment_id = id, error = %e, "Failed to read equipment state");
                    return Err(TransitionError::NotApplied { id });
                }
            };

            if !current.state.can_transition_to(next) {
                warn!(equipment_id = id, from = %current.state, to = %next, "Rejected state transition");
                return Err(TransitionError::InvalidTransition {
                    from: current.state,
                    to: next,
                });
            }
            if current.state == next {
                return Ok(current);
            }

            let from = current.state;
            let updated = Equipment { state: next, ..current };
            if self.try_update(&updated).await {
                info!(equipment_id = id, from = %from, to = %next, "State transition applied");
                Ok(updated)
            } else {
                Err(TransitionError::NotApplied { id })
            }
        }
        .instrument(span)
        .await
    }

    /// Delete a record. `false` when the id does not exist or the delete
    /// failed. A successful delete is followed by id re-basing, whose
    /// failure does not change the result.
    pub async fn remove(&self, id: i64) -> bool {
        async {
            let _guard = self.write_lock.lock().await;
            match self.store.delete(id).await {
                Ok(0) => {
                    debug!(operation = "remove", equipment_id = id, "Nothing to remove");
                    false
                }
                Ok(_) => {
                    info!(operation = "remove", equipment_id = id, "Equipment removed");
                    self.rebase_ids().await;
                    true
                }
                Err(e) => {
                    error!(operation = "remove", equipment_id = id, error = %e, "Failed to remove equipment");
                    false
                }
            }
        }
        .instrument(operation_span("remove", Some(id)))
        .await
    }

    /// In-memory search over `records`; see [`filter_equipment`].
    pub fn filter(&self, search_term: &str, records: Vec<Equipment>) -> Vec<Equipment> {
        filter_equipment(search_term, records)
    }

    /// Point the auto-increment counter back at `max(id) + 1`, or at 1 when
    /// the table is empty. Best-effort: failures are logged and reported in
    /// the outcome only.
    ///
    /// Callers outside `remove` must not run this concurrently with inserts
    /// from another process; the counter read and reset are not atomic.
    pub async fn rebase_ids(&self) -> RebaseOutcome {
        match self.try_rebase_ids().await {
            Ok(outcome) => outcome,
            Err(e) => {
                let max_id = self.store.max_id().await.ok().flatten().unwrap_or(0);
                error!(operation = "rebase_ids", max_id, error = %e, "Failed to re-base equipment ids");
                RebaseOutcome::Failed
            }
        }
    }

    async fn try_rebase_ids(&self) -> Result<RebaseOutcome, StoreError> {
        if self.store.count().await? == 0 {
            self.store.reset_sequence(0).await?;
            info!("Equipment table empty, id counter reset to 1");
            return Ok(RebaseOutcome::Reset);
        }

        let max_id = match self.store.max_id().await {
            Ok(max) => max.unwrap_or(0),
            Err(e) => {
                warn!(error = %e, "Could not read highest equipment id, assuming 0");
                0
            }
        };

        let next_id = self.store.current_sequence().await?.unwrap_or(0) + 1;
        if next_id == max_id + 1 {
            debug!(max_id, "Id counter already aligned");
            return Ok(RebaseOutcome::AlreadyAligned { max_id });
        }

        self.store.reset_sequence(max_id).await?;
        info!(max_id, previous_next_id = next_id, "Equipment id counter re-based");
        Ok(RebaseOutcome::Rebased { max_id })
    }
}
