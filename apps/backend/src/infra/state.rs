use migration::{Migrator, MigratorTrait};

use crate::config::db::DbKind;
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_kind: DbKind,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_kind: DbKind::Postgres,
        }
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = kind;
        self
    }

    /// Connect and bring the schema up to date, single entrypoint for both
    /// startup and tests.
    pub async fn build(self) -> Result<AppState, AppError> {
        let conn = connect_db(self.db_kind).await?;
        Migrator::up(&conn, None).await?;
        Ok(AppState::new(conn))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
