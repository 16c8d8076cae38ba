//! SQL DDL for the `visits` table, one flavor per engine.
//!
//! `timestamp` is stored as fixed-width RFC 3339 text. `id` records insertion
//! order and breaks ties between equal timestamps.

pub const MYSQL_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS visits (
    id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
    timestamp VARCHAR(32) NOT NULL,
    address_hash VARCHAR(64) NOT NULL,
    INDEX idx_visits_timestamp (timestamp)
);
"#;

pub const POSTGRES_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS visits (
    id BIGSERIAL PRIMARY KEY,
    timestamp VARCHAR(32) NOT NULL,
    address_hash VARCHAR(64) NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_visits_timestamp ON visits(timestamp);
"#;

/// Split a DDL bundle into individual statements.
///
/// sqlx prepares each query, so multi-statement strings must be sent one at a time.
pub fn statements(ddl: &str) -> impl Iterator<Item = &str> {
    ddl.split(';').map(str::trim).filter(|s| !s.is_empty())
}
