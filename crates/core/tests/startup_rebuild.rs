//! Derived caches are not persisted; reopening the workspace must rebuild
//! them from the notes on disk.

use inkvault_core::{Workspace, WorkspaceOptions};
use tempfile::TempDir;

fn options(dir: &TempDir) -> WorkspaceOptions {
    WorkspaceOptions {
        base_path: dir.path().to_path_buf(),
        default_vault: "Notes".to_string(),
    }
}

#[test]
fn reopen_restores_search_and_links() {
    let dir = TempDir::new().unwrap();

    {
        let ws = Workspace::open(&options(&dir)).unwrap();
        ws.create_vault("Personal", None).unwrap();
        ws.create_note("Personal", "Todo", "Buy milk [[Groceries]]").unwrap();
    }

    // New process: fresh in-memory index, same files.
    let ws = Workspace::open(&options(&dir)).unwrap();

    assert!(ws.list_vaults().unwrap().contains(&"Personal".to_string()));
    assert_eq!(ws.search_notes("Personal", "milk").unwrap()[0].title, "Todo");
    assert_eq!(ws.backlinks("Personal", "Groceries").unwrap(), vec!["Todo"]);
    assert_eq!(ws.read_note("Personal", "Todo").unwrap(), "Buy milk [[Groceries]]");
}

#[test]
fn default_vault_is_created_once() {
    let dir = TempDir::new().unwrap();

    let ws = Workspace::open(&options(&dir)).unwrap();
    assert_eq!(ws.list_vaults().unwrap(), vec!["Notes"]);
    drop(ws);

    let ws = Workspace::open(&options(&dir)).unwrap();
    assert_eq!(ws.list_vaults().unwrap(), vec!["Notes"]);

    // A workspace that already has vaults gets no implicit default.
    let dir2 = TempDir::new().unwrap();
    std::fs::create_dir(dir2.path().join("Existing")).unwrap();
    let ws = Workspace::open(&options(&dir2)).unwrap();
    assert_eq!(ws.list_vaults().unwrap(), vec!["Existing"]);
}

#[test]
fn rebuild_matches_incremental_state_across_restart() {
    let dir = TempDir::new().unwrap();

    let before = {
        let ws = Workspace::open(&options(&dir)).unwrap();
        ws.create_note("Notes", "A", "alpha beta [[B]]").unwrap();
        ws.create_note("Notes", "B", "beta gamma").unwrap();
        ws.postings_snapshot("Notes").unwrap()
    };

    let ws = Workspace::open(&options(&dir)).unwrap();
    let after = ws.postings_snapshot("Notes").unwrap();

    assert_eq!(before, after);
}
