//! Create/read round-trip and upsert semantics.

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
fn create_then_read_returns_exact_content() {
    let dir = TempDir::new().unwrap();
    let ws = open(&dir);

    let contents = [
        "plain text",
        "# Heading\n\nBody with [[Link]] and `code`.\n",
        "trailing newline preserved\n\n\n",
        "unicode: über café 日本語",
        "",
    ];

    for (i, content) in contents.iter().enumerate() {
        let title = format!("Note{i}");
        ws.create_note("Notes", &title, content).unwrap();
        assert_eq!(ws.read_note("Notes", &title).unwrap(), *content);
    }
}

#[test]
fn duplicate_create_leaves_only_second_content() {
    let dir = TempDir::new().unwrap();
    let ws = open(&dir);

    ws.create_note("Notes", "Todo", "first version").unwrap();
    ws.create_note("Notes", "Todo", "second version").unwrap();

    assert_eq!(ws.read_note("Notes", "Todo").unwrap(), "second version");
    assert_eq!(ws.list_notes("Notes").unwrap(), vec!["Todo"]);

    // The overwrite also replaced the index contribution in full.
    assert!(ws.search_notes("Notes", "first").unwrap().is_empty());
    assert_eq!(ws.search_notes("Notes", "second").unwrap()[0].title, "Todo");
}

#[test]
fn list_notes_is_lexicographic() {
    let dir = TempDir::new().unwrap();
    let ws = open(&dir);

    for title in ["Charlie", "alpha", "Bravo"] {
        ws.create_note("Notes", title, "x").unwrap();
    }

    // Byte order, as on disk
    assert_eq!(ws.list_notes("Notes").unwrap(), vec!["Bravo", "Charlie", "alpha"]);
}

#[test]
fn invalid_titles_are_rejected() {
    let dir = TempDir::new().unwrap();
    let ws = open(&dir);

    for bad in ["", "  ", "a/b", "..", ".hidden", "with\ttab"] {
        assert!(
            ws.create_note("Notes", bad, "x").is_err(),
            "title {bad:?} should be rejected"
        );
    }
    assert!(ws.list_notes("Notes").unwrap().is_empty());
}
