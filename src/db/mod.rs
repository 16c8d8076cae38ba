//! Database module: the visit store abstraction and its backends.
//!
//! Layout:
//! - `models.rs`: the `Visit` row
//! - `schema.rs`: DDL per engine
//! - `store.rs`: the `VisitStore` trait and `StoreError`
//! - `mysql.rs` / `postgres.rs`: sqlx-backed stores
//! - `memory.rs`: in-process store

pub mod memory;
pub mod models;
pub mod mysql;
pub mod postgres;
pub mod schema;
pub mod store;

use std::sync::Arc;

use crate::config::{ServiceConfig, SqlClient};

pub use memory::MemoryVisitStore;
pub use models::Visit;
pub use mysql::MySqlVisitStore;
pub use postgres::PgVisitStore;
pub use store::{StoreError, VisitStore};

/// Build the one store this process uses, bound to the configured engine.
///
/// The pool is lazy: no socket is opened until the first query.
pub fn connect(cfg: &ServiceConfig, host: &str, port: u16) -> Arc<dyn VisitStore> {
    match cfg.client {
        SqlClient::MySql => Arc::new(MySqlVisitStore::connect_lazy(&cfg.connection, host, port)),
        SqlClient::Postgres => Arc::new(PgVisitStore::connect_lazy(&cfg.connection, host, port)),
    }
}
