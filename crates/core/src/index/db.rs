//! In-memory index database: postings, note records and link edges.
//!
//! The index is a derived cache over NoteStore content. It is never
//! persisted; `Workspace::open` rebuilds it from the filesystem, and the
//! write path keeps it current afterwards. At any quiescent point a scratch
//! rebuild must produce identical postings.

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};
use thiserror::Error;

use super::schema::{SchemaError, init_schema};
use super::tokenizer;
use crate::links;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("index lock poisoned")]
    LockPoisoned,
}

/// A stored link edge. `target` may reference a note that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredLink {
    pub source: String,
    pub target: String,
    pub raw: String,
}

/// A ranked search match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub score: i64,
}

/// Index database handle. All access is serialized through one connection;
/// callers providing per-vault ordering guarantees layer above this.
pub struct IndexDb {
    conn: Mutex<Connection>,
}

impl IndexDb {
    /// Create the in-memory index cache.
    pub fn open_in_memory() -> Result<Self, IndexError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        init_schema(&conn)?;
        Ok(Self { conn: Mutex::new(conn) })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, IndexError> {
        self.conn.lock().map_err(|_| IndexError::LockPoisoned)
    }

    /// Replace the note's entire index contribution: record, postings and
    /// link edges, in one transaction. Stale postings from a previous
    /// version of the note cannot survive this call.
    pub fn index_note(
        &self,
        vault: &str,
        title: &str,
        content: &str,
        modified: DateTime<Utc>,
    ) -> Result<(), IndexError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO notes (vault, title, modified_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(vault, title) DO UPDATE SET modified_at = excluded.modified_at",
            params![vault, title, modified.to_rfc3339()],
        )?;
        let note_id: i64 = tx.query_row(
            "SELECT id FROM notes WHERE vault = ?1 AND title = ?2",
            params![vault, title],
            |row| row.get(0),
        )?;

        tx.execute("DELETE FROM postings WHERE note_id = ?1", [note_id])?;
        tx.execute("DELETE FROM links WHERE source_id = ?1", [note_id])?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO postings (note_id, term, frequency) VALUES (?1, ?2, ?3)",
            )?;
            for (term, frequency) in tokenizer::term_frequencies(content) {
                stmt.execute(params![note_id, term, frequency])?;
            }

            let mut stmt = tx.prepare(
                "INSERT INTO links (source_id, target_title, raw_reference, position)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (position, link) in links::extract_refs(content).iter().enumerate() {
                stmt.execute(params![
                    note_id,
                    link.target,
                    link.raw,
                    position as i64
                ])?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    /// Drop everything the note contributed. No-op when the note was never
    /// indexed; this is the terminal step of deletion and must not block it.
    pub fn remove_note(&self, vault: &str, title: &str) -> Result<(), IndexError> {
        let conn = self.lock()?;
        conn.execute(
            "DELETE FROM notes WHERE vault = ?1 AND title = ?2",
            params![vault, title],
        )?;
        Ok(())
    }

    /// Drop all state scoped to a vault.
    pub fn purge_vault(&self, vault: &str) -> Result<(), IndexError> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM notes WHERE vault = ?1", [vault])?;
        Ok(())
    }

    /// Rank note titles by summed term frequency over the query's terms,
    /// ties broken by lexicographic title order. The query is tokenized
    /// identically to indexing; an empty or all-punctuation query matches
    /// nothing.
    pub fn search(&self, vault: &str, query: &str) -> Result<Vec<SearchHit>, IndexError> {
        let terms: Vec<String> =
            BTreeSet::from_iter(tokenizer::tokenize(query)).into_iter().collect();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; terms.len()].join(", ");
        let sql = format!(
            "SELECT n.title, SUM(p.frequency) AS score
             FROM postings p
             JOIN notes n ON n.id = p.note_id
             WHERE n.vault = ? AND p.term IN ({placeholders})
             GROUP BY n.title
             ORDER BY score DESC, n.title ASC"
        );

        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> =
            vec![Box::new(vault.to_string())];
        for term in &terms {
            params_vec.push(Box::new(term.clone()));
        }
        let params_refs: Vec<&dyn rusqlite::ToSql> =
            params_vec.iter().map(|p| p.as_ref()).collect();

        let conn = self.lock()?;
        let mut stmt = conn.prepare(&sql)?;
        let hits = stmt
            .query_map(params_refs.as_slice(), |row| {
                Ok(SearchHit { title: row.get(0)?, score: row.get(1)? })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(hits)
    }

    /// Titles of notes whose content links to `title`, sorted.
    pub fn backlinks(&self, vault: &str, title: &str) -> Result<Vec<String>, IndexError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT DISTINCT n.title
             FROM links l
             JOIN notes n ON n.id = l.source_id
             WHERE n.vault = ?1 AND l.target_title = ?2
             ORDER BY n.title",
        )?;
        let titles = stmt
            .query_map(params![vault, title], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(titles)
    }

    /// All stored edges for a vault, ordered by source then appearance.
    pub fn edges(&self, vault: &str) -> Result<Vec<StoredLink>, IndexError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT n.title, l.target_title, l.raw_reference
             FROM links l
             JOIN notes n ON n.id = l.source_id
             WHERE n.vault = ?1
             ORDER BY n.title, l.position",
        )?;
        let edges = stmt
            .query_map([vault], |row| {
                Ok(StoredLink {
                    source: row.get(0)?,
                    target: row.get(1)?,
                    raw: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(edges)
    }

    /// Titles currently present in the index for a vault, sorted.
    pub fn indexed_titles(&self, vault: &str) -> Result<Vec<String>, IndexError> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT title FROM notes WHERE vault = ?1 ORDER BY title")?;
        let titles = stmt
            .query_map([vault], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(titles)
    }

    /// Full postings for a vault as `(title, term, frequency)` rows in a
    /// canonical order. Exists so tests can compare a scratch rebuild
    /// against the incrementally maintained index.
    pub fn postings_snapshot(
        &self,
        vault: &str,
    ) -> Result<Vec<(String, String, i64)>, IndexError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT n.title, p.term, p.frequency
             FROM postings p
             JOIN notes n ON n.id = p.note_id
             WHERE n.vault = ?1
             ORDER BY n.title, p.term",
        )?;
        let rows = stmt
            .query_map([vault], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
