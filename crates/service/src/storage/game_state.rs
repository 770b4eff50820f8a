use std::sync::Arc;

use migration::MigratorTrait;
use models::gamestate::{self, STATE_ROW_ID};
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use tracing::info;

use crate::errors::ServiceError;

/// Bootstrap document used when no saved state exists yet.
pub const DEFAULT_STATE_JSON: &str = include_str!("default_state.json");

/// Database-backed store for the map document.
///
/// The document is kept as raw JSON text so a load returns exactly the
/// bytes the last save wrote, field order and unknown fields included.
pub struct GameStateStore {
    db: DatabaseConnection,
}

impl GameStateStore {
    /// The connection is an explicit parameter so tests can point each
    /// store at its own database file.
    pub fn new(db: DatabaseConnection) -> Arc<Self> {
        Arc::new(Self { db })
    }

    /// Create the backing table and seed the bootstrap document if no row
    /// exists. Safe to call against an already-initialized store.
    pub async fn initialize(&self) -> Result<(), ServiceError> {
        migration::Migrator::up(&self.db, None)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let existing = gamestate::Entity::find_by_id(STATE_ROW_ID)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        if existing.is_none() {
            let seed = gamestate::ActiveModel {
                id: Set(STATE_ROW_ID),
                data: Set(DEFAULT_STATE_JSON.to_string()),
            };
            gamestate::Entity::insert(seed)
                .exec(&self.db)
                .await
                .map_err(|e| ServiceError::Storage(e.to_string()))?;
            info!("seeded game state with bootstrap document");
        }
        Ok(())
    }

    /// Return the stored document verbatim, or the bootstrap default when
    /// the row is missing (defensive; initialize() normally guarantees it).
    pub async fn load(&self) -> Result<String, ServiceError> {
        let row = gamestate::Entity::find_by_id(STATE_ROW_ID)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(row.map(|m| m.data).unwrap_or_else(|| DEFAULT_STATE_JSON.to_string()))
    }

    /// Replace the stored document wholesale. No merge, no validation.
    pub async fn save(&self, document: String) -> Result<(), ServiceError> {
        let replacement = gamestate::ActiveModel {
            id: Set(STATE_ROW_ID),
            data: Set(document),
        };
        gamestate::Entity::insert(replacement)
            .on_conflict(
                OnConflict::column(gamestate::Column::Id)
                    .update_column(gamestate::Column::Data)
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }
}
