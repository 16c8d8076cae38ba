use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Pool, Postgres};

use super::models::Visit;
use super::schema::{POSTGRES_INIT, statements};
use super::store::{StoreError, VisitStore};
use crate::config::ConnectionParams;

pub type PgPool = Pool<Postgres>;

#[derive(Clone)]
pub struct PgVisitStore {
    pool: PgPool,
}

impl PgVisitStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a store whose pool connects on first use.
    pub fn connect_lazy(params: &ConnectionParams, host: &str, port: u16) -> Self {
        let options = PgConnectOptions::new()
            .host(host)
            .port(port)
            .username(&params.user)
            .password(&params.password)
            .database(&params.database);
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy_with(options);
        Self::new(pool)
    }
}

#[async_trait]
impl VisitStore for PgVisitStore {
    async fn insert(&self, visit: &Visit) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO visits (timestamp, address_hash) VALUES ($1, $2)")
            .bind(&visit.timestamp)
            .bind(&visit.address_hash)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn select_recent(&self, limit: u32) -> Result<Vec<Visit>, StoreError> {
        let rows = sqlx::query_as::<_, Visit>(
            r#"SELECT timestamp, address_hash FROM visits
               ORDER BY timestamp DESC, id DESC
               LIMIT $1"#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        for stmt in statements(POSTGRES_INIT) {
            sqlx::query(stmt).execute(&self.pool).await?;
        }
        Ok(())
    }
}
