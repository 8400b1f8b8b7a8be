//! Persisted-state schema.

pub const SCHEMA_SQL: &str = r#"
-- One row per persisted dashboard value. Values are opaque JSON text.
CREATE TABLE IF NOT EXISTS app_state (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL
) STRICT;
"#;
