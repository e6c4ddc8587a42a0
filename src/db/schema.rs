//! SQL DDL for the durable entities.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `messages`: append-only contact-form submissions, RFC3339 timestamps
/// - `site_settings`: singleton row, id pinned to 1 by a CHECK constraint
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS messages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL DEFAULT '',
    email TEXT NOT NULL DEFAULT '',
    phone TEXT NOT NULL DEFAULT '',
    content TEXT NOT NULL DEFAULT '',
    timestamp TEXT NOT NULL -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_messages_timestamp ON messages(timestamp);

CREATE TABLE IF NOT EXISTS site_settings (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    site_name TEXT NOT NULL,
    email TEXT NOT NULL DEFAULT '',
    phone TEXT NOT NULL DEFAULT '',
    address TEXT NOT NULL DEFAULT '',
    logo TEXT NOT NULL DEFAULT ''
);
"#;
