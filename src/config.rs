use figment::{Figment, providers::Serialized};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error as ThisError;

pub const DEFAULT_DB_HOST: &str = "127.0.0.1";
pub const DEFAULT_HTTP_PORT: u16 = 8080;
pub const DEFAULT_LOGLEVEL: &str = "info";

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("The SQL_CLIENT environment variable must be set to 'pg' or 'mysql'.")]
    InvalidClient,

    #[error("Missing required environment variable: {0}")]
    MissingVariable(&'static str),

    #[error("Invalid port in {name}: {value:?}")]
    InvalidPort { name: &'static str, value: String },

    #[error("Failed to read configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
}

/// Database engine selected by `SQL_CLIENT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlClient {
    MySql,
    Postgres,
}

impl SqlClient {
    pub fn parse(selector: Option<&str>) -> Result<Self, ConfigError> {
        match selector {
            Some("mysql") => Ok(Self::MySql),
            Some("pg") => Ok(Self::Postgres),
            _ => Err(ConfigError::InvalidClient),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Postgres => "pg",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Self::MySql => 3306,
            Self::Postgres => 5432,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    pub user: String,
    pub password: String,
    pub database: String,
}

impl std::fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}

/// Engine plus credentials handed to the store factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub client: SqlClient,
    pub connection: ConnectionParams,
}

/// Raw environment view, keyed by lowercased variable name.
///
/// Every field is text: credentials must reach the driver byte-for-byte.
#[derive(Debug, Default, Deserialize)]
struct RawEnv {
    sql_client: Option<String>,
    mysql_user: Option<String>,
    mysql_password: Option<String>,
    mysql_database: Option<String>,
    postgres_user: Option<String>,
    postgres_password: Option<String>,
    postgres_database: Option<String>,
    db_host: Option<String>,
    db_port: Option<String>,
    port: Option<String>,
    loglevel: Option<String>,
}

impl RawEnv {
    fn extract(figment: &Figment) -> Result<Self, ConfigError> {
        figment.extract().map_err(|e| ConfigError::Extract(Box::new(e)))
    }

    fn service_config(&self) -> Result<ServiceConfig, ConfigError> {
        let client = SqlClient::parse(self.sql_client.as_deref())?;
        let connection = match client {
            SqlClient::MySql => ConnectionParams {
                user: required(&self.mysql_user, "MYSQL_USER")?,
                password: self.mysql_password.clone().unwrap_or_default(),
                database: required(&self.mysql_database, "MYSQL_DATABASE")?,
            },
            SqlClient::Postgres => ConnectionParams {
                user: required(&self.postgres_user, "POSTGRES_USER")?,
                password: self.postgres_password.clone().unwrap_or_default(),
                database: required(&self.postgres_database, "POSTGRES_DATABASE")?,
            },
        };
        Ok(ServiceConfig { client, connection })
    }
}

fn parse_port(value: Option<&str>, name: &'static str) -> Result<Option<u16>, ConfigError> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.trim().parse().map_err(|_| ConfigError::InvalidPort {
                name,
                value: v.to_string(),
            })
        })
        .transpose()
}

fn required(value: &Option<String>, name: &'static str) -> Result<String, ConfigError> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .ok_or(ConfigError::MissingVariable(name))
}

impl ServiceConfig {
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        RawEnv::extract(figment)?.service_config()
    }
}

/// Full process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub service: ServiceConfig,
    pub db_host: String,
    pub db_port: u16,
    pub port: u16,
    pub loglevel: String,
}

impl Config {
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let raw = RawEnv::extract(figment)?;
        let service = raw.service_config()?;
        let db_port = parse_port(raw.db_port.as_deref(), "DB_PORT")?
            .unwrap_or_else(|| service.client.default_port());
        let port = parse_port(raw.port.as_deref(), "PORT")?.unwrap_or(DEFAULT_HTTP_PORT);
        Ok(Self {
            db_host: raw.db_host.unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
            db_port,
            port,
            loglevel: raw.loglevel.unwrap_or_else(|| DEFAULT_LOGLEVEL.to_string()),
            service,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_figment(&env_figment())
    }
}

/// Figment over the process environment.
///
/// Values stay strings: `Env` would parse `007` as a number and `[x]` as a
/// list. Keys are lowercased to match `RawEnv`; non-UTF-8 variables are skipped.
pub fn env_figment() -> Figment {
    let vars: HashMap<String, String> = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?.to_lowercase(), v.into_string().ok()?)))
        .collect();
    Figment::from(Serialized::defaults(vars))
}
