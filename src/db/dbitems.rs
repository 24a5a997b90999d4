use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Error as SqlxError;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{Item, UpdateItemDto};
use crate::services::{ItemError, ItemStore};

/// Database-backed item store
pub struct DbItems {
    pool: PgPool,
}

impl DbItems {
    /// Create a new database connection pool
    ///
    /// # Arguments
    /// * `database_url` - PostgreSQL connection string
    ///
    /// # Returns
    /// * `Result<Self, SqlxError>` - Database connection pool or error
    pub async fn new(database_url: &str) -> Result<Self, SqlxError> {
        info!("Connecting to database...");

        let pool = PgPoolOptions::new()
            .max_connections(20)
            .min_connections(2)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .connect(database_url)
            .await?;

        info!("Database connection pool created successfully");

        Ok(Self { pool })
    }

    /// Create the items table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), SqlxError> {
        let schema_sql = r#"
            CREATE TABLE IF NOT EXISTS items (
                id UUID PRIMARY KEY,
                name VARCHAR(120) NOT NULL,
                price NUMERIC(12, 2) NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            );
        "#;

        sqlx::query(schema_sql).execute(&self.pool).await?;
        info!("Database schema is up to date");
        Ok(())
    }
}

#[async_trait]
impl ItemStore for DbItems {
    async fn create(&self, name: &str, price: Decimal) -> Result<Item, ItemError> {
        let id = Uuid::new_v4();
        debug!("Inserting item '{}' with id {}", name, id);

        let query_sql = r#"
            INSERT INTO items (id, name, price)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, created_at;
        "#;

        let item = sqlx::query_as::<_, Item>(query_sql)
            .bind(id)
            .bind(name)
            .bind(price)
            .fetch_one(&self.pool)
            .await?;

        Ok(item)
    }

    async fn find_many(&self) -> Result<Vec<Item>, ItemError> {
        let query_sql = r#"
            SELECT id, name, price, created_at
            FROM items
            ORDER BY created_at DESC;
        "#;

        let items = sqlx::query_as::<_, Item>(query_sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    async fn find_unique(&self, id: Uuid) -> Result<Option<Item>, ItemError> {
        let query_sql = r#"
            SELECT id, name, price, created_at
            FROM items
            WHERE id = $1;
        "#;

        let item = sqlx::query_as::<_, Item>(query_sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    async fn update(&self, id: Uuid, patch: &UpdateItemDto) -> Result<Option<Item>, ItemError> {
        debug!("Updating item {}", id);

        // Omitted fields keep their stored values
        let query_sql = r#"
            UPDATE items
            SET name = COALESCE($2, name),
                price = COALESCE($3, price)
            WHERE id = $1
            RETURNING id, name, price, created_at;
        "#;

        let item = sqlx::query_as::<_, Item>(query_sql)
            .bind(id)
            .bind(patch.name.as_deref())
            .bind(patch.price)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ItemError> {
        debug!("Deleting item {}", id);

        let query_sql = r#"
            DELETE FROM items
            WHERE id = $1;
        "#;

        let result = sqlx::query(query_sql)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
