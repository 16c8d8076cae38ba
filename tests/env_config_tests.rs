use std::sync::Mutex;
use visit_logger::config::{ConfigError, ServiceConfig, SqlClient, env_figment};

/// Process env is global; tests in this file take turns.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const VARS: &[&str] = &[
    "SQL_CLIENT",
    "MYSQL_USER",
    "MYSQL_PASSWORD",
    "MYSQL_DATABASE",
    "POSTGRES_USER",
    "POSTGRES_PASSWORD",
    "POSTGRES_DATABASE",
];

fn set_env(pairs: &[(&str, &str)]) {
    // SAFETY: every env mutation in this binary happens under ENV_LOCK.
    unsafe {
        for var in VARS {
            std::env::remove_var(var);
        }
        for (k, v) in pairs {
            std::env::set_var(k, v);
        }
    }
}

#[test]
fn mysql_credentials_pass_through_verbatim() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    set_env(&[
        ("SQL_CLIENT", "mysql"),
        ("MYSQL_USER", "0042"),
        ("MYSQL_PASSWORD", "007"),
        ("MYSQL_DATABASE", "1.50"),
    ]);

    let cfg = ServiceConfig::from_figment(&env_figment()).expect("config should load");
    assert_eq!(cfg.client, SqlClient::MySql);
    assert_eq!(cfg.connection.user, "0042");
    assert_eq!(cfg.connection.password, "007");
    assert_eq!(cfg.connection.database, "1.50");
}

#[test]
fn postgres_credentials_with_brackets_and_literals() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    set_env(&[
        ("SQL_CLIENT", "pg"),
        ("POSTGRES_USER", "true"),
        ("POSTGRES_PASSWORD", "[secret]"),
        ("POSTGRES_DATABASE", "{x}"),
        ("MYSQL_PASSWORD", "unused"),
    ]);

    let cfg = ServiceConfig::from_figment(&env_figment()).expect("config should load");
    assert_eq!(cfg.client, SqlClient::Postgres);
    assert_eq!(cfg.connection.user, "true");
    assert_eq!(cfg.connection.password, "[secret]");
    assert_eq!(cfg.connection.database, "{x}");
}

#[test]
fn unset_sql_client_is_rejected() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    set_env(&[
        ("MYSQL_USER", "root"),
        ("MYSQL_DATABASE", "visits"),
    ]);

    let err = ServiceConfig::from_figment(&env_figment()).expect_err("SQL_CLIENT is unset");
    assert!(matches!(err, ConfigError::InvalidClient));
    assert_eq!(
        err.to_string(),
        "The SQL_CLIENT environment variable must be set to 'pg' or 'mysql'."
    );
}
