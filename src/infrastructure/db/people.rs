use async_trait::async_trait;
use sqlx::SqlitePool;
use std::path::Path;

use crate::domain::csv::FieldMap;
use crate::domain::error::{AppError, Result};
use crate::domain::people::PersonRow;

use super::connection::connect_pool;
use super::PersonStore;

pub struct PeopleRepository {
    pool: SqlitePool,
}

impl PeopleRepository {
    pub async fn connect(db_path: &Path) -> Result<Self> {
        let pool = connect_pool(db_path).await?;
        Ok(Self { pool })
    }

    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool for direct queries
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn to_json(map: &FieldMap) -> Result<String> {
    serde_json::to_string(map)
        .map_err(|e| AppError::DatabaseError(format!("Failed to serialize record payload: {}", e)))
}

#[async_trait]
impl PersonStore for PeopleRepository {
    async fn insert_person(&self, person: &PersonRow) -> Result<()> {
        let address_json = to_json(&person.address)?;
        let additional_json = to_json(&person.additional)?;

        sqlx::query("INSERT INTO people (name, age, address, additional_info) VALUES (?, ?, ?, ?)")
            .bind(&person.name)
            .bind(person.age)
            .bind(address_json)
            .bind(additional_json)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to insert person: {}", e)))?;

        Ok(())
    }

    async fn all_ages(&self) -> Result<Vec<i64>> {
        sqlx::query_scalar("SELECT age FROM people")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to read ages: {}", e)))
    }
}
