pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod service;
pub mod startup;

pub use config::{Config, ConfigError, ServiceConfig, SqlClient};
pub use db::{Visit, VisitStore};
pub use error::{StartupError, VisitError};
