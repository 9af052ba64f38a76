//! Scratch reconstruction of a vault's index from its notes on disk.
//!
//! Used at workspace startup (the index is not persisted) and by explicit
//! reindex requests. Individual unreadable files are skipped and logged;
//! they must not abort the rebuild of the rest of the vault.

use std::path::Path;

use chrono::{DateTime, Utc};
use walkdir::WalkDir;

use super::db::{IndexDb, IndexError};

/// Statistics from a rebuild operation.
#[derive(Debug, Clone, Default)]
pub struct RebuildStats {
    /// Number of note files discovered.
    pub files_found: usize,
    /// Number of notes indexed.
    pub notes_indexed: usize,
    /// Number of notes skipped due to errors.
    pub notes_skipped: usize,
    /// Rebuild duration in milliseconds.
    pub duration_ms: u64,
}

/// Drop the vault's index state and rebuild it from the files under `root`.
pub fn rebuild_vault(
    db: &IndexDb,
    vault: &str,
    root: &Path,
) -> Result<RebuildStats, IndexError> {
    let start = std::time::Instant::now();
    let mut stats = RebuildStats::default();

    db.purge_vault(vault)?;

    for entry in WalkDir::new(root).max_depth(1).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("failed to walk vault '{}': {}", vault, e);
                continue;
            }
        };

        let path = entry.path();
        if !is_note_file(path) {
            continue;
        }
        stats.files_found += 1;

        let title = match path.file_stem().and_then(|s| s.to_str()) {
            Some(t) => t.to_string(),
            None => {
                stats.notes_skipped += 1;
                continue;
            }
        };

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("failed to read {}: {}", path.display(), e);
                stats.notes_skipped += 1;
                continue;
            }
        };

        let modified = file_modified(path);
        match db.index_note(vault, &title, &content, modified) {
            Ok(()) => stats.notes_indexed += 1,
            Err(e) => {
                tracing::warn!("failed to index {}: {}", path.display(), e);
                stats.notes_skipped += 1;
            }
        }
    }

    stats.duration_ms = start.elapsed().as_millis() as u64;
    Ok(stats)
}

fn is_note_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'));
    if hidden {
        return false;
    }
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "md")
}

fn file_modified(path: &Path) -> DateTime<Utc> {
    path.metadata()
        .and_then(|m| m.modified())
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_rebuild_indexes_notes() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Todo.md"), "Buy milk [[Groceries]]").unwrap();
        fs::write(dir.path().join("Journal.md"), "milk milk").unwrap();
        fs::write(dir.path().join("readme.txt"), "not a note").unwrap();
        fs::write(dir.path().join(".Draft.md.tmp"), "partial write").unwrap();

        let db = IndexDb::open_in_memory().unwrap();
        let stats = rebuild_vault(&db, "v", dir.path()).unwrap();

        assert_eq!(stats.files_found, 2);
        assert_eq!(stats.notes_indexed, 2);
        assert_eq!(stats.notes_skipped, 0);

        let hits = db.search("v", "milk").unwrap();
        assert_eq!(hits[0].title, "Journal");
        assert_eq!(hits[1].title, "Todo");
    }

    #[test]
    fn test_rebuild_replaces_stale_state() {
        let dir = TempDir::new().unwrap();
        let db = IndexDb::open_in_memory().unwrap();

        db.index_note("v", "Ghost", "this note no longer exists on disk", Utc::now())
            .unwrap();
        fs::write(dir.path().join("Real.md"), "actual words").unwrap();

        rebuild_vault(&db, "v", dir.path()).unwrap();

        assert!(db.search("v", "ghost").unwrap().is_empty());
        assert_eq!(db.indexed_titles("v").unwrap(), vec!["Real"]);
    }

    #[test]
    fn test_rebuild_empty_vault() {
        let dir = TempDir::new().unwrap();
        let db = IndexDb::open_in_memory().unwrap();
        let stats = rebuild_vault(&db, "v", dir.path()).unwrap();

        assert_eq!(stats.files_found, 0);
        assert_eq!(stats.notes_indexed, 0);
    }
}
