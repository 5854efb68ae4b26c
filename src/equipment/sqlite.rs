use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::model::Equipment;
use super::store::{EquipmentStore, StoreError};
use crate::lifecycle::EquipmentState;

/// Table name as recorded in `sqlite_sequence`.
pub const TABLE_NAME: &str = "equipment";

const SELECT_COLUMNS: &str = r#"
    SELECT id, date_register, state, customer, user, category, brand, model,
           serial_number, processor, memory_ram, storage, operating_system,
           note, responsible
    FROM equipment
"#;

/// `EquipmentStore` backed by a SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteEquipmentStore {
    pool: SqlitePool,
}

impl SqliteEquipmentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn equipment_from_row(row: &SqliteRow) -> Result<Equipment, StoreError> {
    let id: i64 = row.try_get("id")?;
    let raw_state: String = row.try_get("state")?;
    let state = EquipmentState::parse(&raw_state).ok_or_else(|| StoreError::CorruptRow {
        id,
        reason: format!("unknown state '{raw_state}'"),
    })?;
    let date_register: NaiveDate = row.try_get("date_register")?;

    Ok(Equipment {
        id,
        date_register,
        state,
        customer: row.try_get("customer")?,
        user: row.try_get("user")?,
        category: row.try_get("category")?,
        brand: row.try_get("brand")?,
        model: row.try_get("model")?,
        serial_number: row.try_get("serial_number")?,
        processor: row.try_get("processor")?,
        memory_ram: row.try_get("memory_ram")?,
        storage: row.try_get("storage")?,
        operating_system: row.try_get("operating_system")?,
        note: row.try_get("note")?,
        responsible: row.try_get("responsible")?,
    })
}

#[async_trait]
impl EquipmentStore for SqliteEquipmentStore {
    async fn fetch_all(&self) -> Result<Vec<Equipment>, StoreError> {
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY id ASC"))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(equipment_from_row).collect()
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Option<Equipment>, StoreError> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(equipment_from_row).transpose()
    }

    async fn insert(&self, equipment: &Equipment) -> Result<i64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO equipment (
                date_register, state, customer, user, category, brand, model,
                serial_number, processor, memory_ram, storage, operating_system,
                note, responsible
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
            "#,
        )
        .bind(equipment.date_register)
        .bind(equipment.state.as_str())
        .bind(&equipment.customer)
        .bind(&equipment.user)
        .bind(&equipment.category)
        .bind(&equipment.brand)
        .bind(&equipment.model)
        .bind(&equipment.serial_number)
        .bind(&equipment.processor)
        .bind(&equipment.memory_ram)
        .bind(&equipment.storage)
        .bind(&equipment.operating_system)
        .bind(&equipment.note)
        .bind(&equipment.responsible)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, equipment: &Equipment) -> Result<u64, StoreError> {
        // date_register is fixed at creation
        let result = sqlx::query(
            r#"
            UPDATE equipment
            SET state = ?2, customer = ?3, user = ?4, category = ?5, brand = ?6,
                model = ?7, serial_number = ?8, processor = ?9, memory_ram = ?10,
                storage = ?11, operating_system = ?12, note = ?13, responsible = ?14
            WHERE id = ?1
            "#,
        )
        .bind(equipment.id)
        .bind(equipment.state.as_str())
        .bind(&equipment.customer)
        .bind(&equipment.user)
        .bind(&equipment.category)
        .bind(&equipment.brand)
        .bind(&equipment.model)
        .bind(&equipment.serial_number)
        .bind(&equipment.processor)
        .bind(&equipment.memory_ram)
        .bind(&equipment.storage)
        .bind(&equipment.operating_system)
        .bind(&equipment.note)
        .bind(&equipment.responsible)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn max_id(&self) -> Result<Option<i64>, StoreError> {
        let max: Option<i64> = sqlx::query_scalar("SELECT MAX(id) FROM equipment")
            .fetch_one(&self.pool)
            .await?;
        Ok(max)
    }

    async fn current_sequence(&self) -> Result<Option<i64>, StoreError> {
        let seq: Option<i64> = sqlx::query_scalar("SELECT seq FROM sqlite_sequence WHERE name = ?1")
            .bind(TABLE_NAME)
            .fetch_optional(&self.pool)
            .await?;
        Ok(seq)
    }

    async fn reset_sequence(&self, value: i64) -> Result<(), StoreError> {
        let updated = sqlx::query("UPDATE sqlite_sequence SET seq = ?1 WHERE name = ?2")
            .bind(value)
            .bind(TABLE_NAME)
            .execute(&self.pool)
            .await?;

        if updated.rows_affected() == 0 {
            sqlx::query("INSERT INTO sqlite_sequence (name, seq) VALUES (?1, ?2)")
                .bind(TABLE_NAME)
                .bind(value)
                .execute(&self.pool)
                .await?;
        }

        debug!(table = TABLE_NAME, seq = value, "Auto-increment counter reset");
        Ok(())
    }
}
