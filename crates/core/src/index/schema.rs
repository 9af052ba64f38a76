//! SQLite schema for the in-memory index cache.

use rusqlite::Connection;
use thiserror::Error;

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 1;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Schema version {found} is newer than supported {supported}")]
    VersionTooNew { found: i32, supported: i32 },
}

/// Initialize the index schema on a fresh connection.
pub fn init_schema(conn: &Connection) -> Result<(), SchemaError> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        create_schema_v1(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
    } else if version > SCHEMA_VERSION {
        return Err(SchemaError::VersionTooNew {
            found: version,
            supported: SCHEMA_VERSION,
        });
    }

    Ok(())
}

fn get_schema_version(conn: &Connection) -> Result<i32, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='schema_version'",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 =
        conn.query_row("SELECT version FROM schema_version", [], |row| row.get(0))?;

    Ok(version)
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<(), SchemaError> {
    conn.execute(
        "INSERT OR REPLACE INTO schema_version (id, version) VALUES (1, ?1)",
        [version],
    )?;
    Ok(())
}

fn create_schema_v1(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(
        r#"
        -- Schema version tracking
        CREATE TABLE schema_version (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            version INTEGER NOT NULL
        );

        -- One row per indexed note
        CREATE TABLE notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            vault TEXT NOT NULL,
            title TEXT NOT NULL,
            modified_at TEXT NOT NULL,
            UNIQUE (vault, title)
        );

        CREATE INDEX idx_notes_vault ON notes(vault);

        -- Inverted index: term postings with per-note frequency
        CREATE TABLE postings (
            note_id INTEGER NOT NULL REFERENCES notes(id) ON DELETE CASCADE,
            term TEXT NOT NULL,
            frequency INTEGER NOT NULL,
            PRIMARY KEY (note_id, term)
        );

        CREATE INDEX idx_postings_term ON postings(term);

        -- Link edges extracted from note content; targets may be unresolved
        CREATE TABLE links (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            source_id INTEGER NOT NULL REFERENCES notes(id) ON DELETE CASCADE,
            target_title TEXT NOT NULL,
            raw_reference TEXT NOT NULL,
            position INTEGER NOT NULL
        );

        CREATE INDEX idx_links_source ON links(source_id);
        CREATE INDEX idx_links_target ON links(target_title);
        "#,
    )?;

    Ok(())
}
