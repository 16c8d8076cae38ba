use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{MySql, Pool};

use super::models::Visit;
use super::schema::{MYSQL_INIT, statements};
use super::store::{StoreError, VisitStore};
use crate::config::ConnectionParams;

pub type MySqlPool = Pool<MySql>;

#[derive(Clone)]
pub struct MySqlVisitStore {
    pool: MySqlPool,
}

impl MySqlVisitStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Build a store whose pool connects on first use.
    pub fn connect_lazy(params: &ConnectionParams, host: &str, port: u16) -> Self {
        let options = MySqlConnectOptions::new()
            .host(host)
            .port(port)
            .username(&params.user)
            .password(&params.password)
            .database(&params.database);
        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect_lazy_with(options);
        Self::new(pool)
    }
}

#[async_trait]
impl VisitStore for MySqlVisitStore {
    async fn insert(&self, visit: &Visit) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO visits (timestamp, address_hash) VALUES (?, ?)")
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
               LIMIT ?"#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        for stmt in statements(MYSQL_INIT) {
            sqlx::query(stmt).execute(&self.pool).await?;
        }
        Ok(())
    }
}
