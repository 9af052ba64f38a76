//! The index is a pure cache: at any quiescent point, rebuilding from the
//! notes on disk must reproduce the incrementally maintained postings.

use inkvault_core::{Workspace, WorkspaceOptions};
use tempfile::TempDir;

fn open(dir: &TempDir) -> Workspace {
    Workspace::open(&WorkspaceOptions {
        base_path: dir.path().to_path_buf(),
        default_vault: "Notes".to_string(),
    })
    .unwrap()
}

#[test]
fn scratch_rebuild_matches_incremental_index() {
    let dir = TempDir::new().unwrap();
    let ws = open(&dir);

    ws.create_note("Notes", "Todo", "Buy milk [[Groceries]]").unwrap();
    ws.create_note("Notes", "Groceries", "milk bread milk eggs").unwrap();
    ws.create_note("Notes", "Journal", "Long day. See [[Todo]].").unwrap();

    // Mutate: overwrite one note, delete another.
    ws.create_note("Notes", "Todo", "Call the plumber [[Home]]").unwrap();
    ws.delete_note("Notes", "Journal").unwrap();

    let incremental = ws.postings_snapshot("Notes").unwrap();
    assert!(!incremental.is_empty());

    let stats = ws.reindex_vault("Notes").unwrap();
    assert_eq!(stats.notes_indexed, 2);

    let rebuilt = ws.postings_snapshot("Notes").unwrap();
    assert_eq!(incremental, rebuilt);
}

#[test]
fn search_ranks_by_summed_frequency_with_lexicographic_ties() {
    let dir = TempDir::new().unwrap();
    let ws = open(&dir);

    ws.create_note("Notes", "Heavy", "milk milk milk").unwrap();
    ws.create_note("Notes", "LightB", "milk").unwrap();
    ws.create_note("Notes", "LightA", "milk").unwrap();

    let hits = ws.search_notes("Notes", "milk").unwrap();
    let titles: Vec<&str> = hits.iter().map(|h| h.title.as_str()).collect();
    assert_eq!(titles, vec!["Heavy", "LightA", "LightB"]);
    assert_eq!(hits[0].score, 3);
}

#[test]
fn search_is_case_insensitive_both_ways() {
    let dir = TempDir::new().unwrap();
    let ws = open(&dir);

    ws.create_note("Notes", "Todo", "Buy MILK").unwrap();

    assert_eq!(ws.search_notes("Notes", "milk").unwrap().len(), 1);
    assert_eq!(ws.search_notes("Notes", "Milk").unwrap().len(), 1);
}

#[test]
fn multi_term_query_sums_across_terms() {
    let dir = TempDir::new().unwrap();
    let ws = open(&dir);

    ws.create_note("Notes", "Both", "milk bread").unwrap();
    ws.create_note("Notes", "OnlyMilk", "milk milk").unwrap();

    let hits = ws.search_notes("Notes", "milk bread").unwrap();
    let titles: Vec<&str> = hits.iter().map(|h| h.title.as_str()).collect();
    // Both: 1 + 1 = 2, OnlyMilk: 2; tie broken lexicographically.
    assert_eq!(titles, vec!["Both", "OnlyMilk"]);
}
