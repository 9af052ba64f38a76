//! Search, link and index queries.

use inkvault_core::Workspace;
use serde::Serialize;

use super::print_names;

/// Search hit for JSON output.
#[derive(Debug, Serialize)]
struct SearchHitOutput {
    title: String,
    score: i64,
}

pub fn search(
    workspace: &Workspace,
    vault: &str,
    query: &str,
    json: bool,
) -> color_eyre::Result<()> {
    let hits = workspace.search_notes(vault, query)?;

    if json {
        let out: Vec<SearchHitOutput> = hits
            .into_iter()
            .map(|h| SearchHitOutput { title: h.title, score: h.score })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        return Ok(());
    }

    if hits.is_empty() {
        println!("(no results found)");
        return Ok(());
    }
    for hit in hits {
        println!("{:>5}  {}", hit.score, hit.title);
    }
    Ok(())
}

pub fn links(
    workspace: &Workspace,
    vault: &str,
    title: &str,
    json: bool,
) -> color_eyre::Result<()> {
    let targets = workspace.extract_links(vault, title)?;
    print_names(&targets, json);
    Ok(())
}

pub fn backlinks(
    workspace: &Workspace,
    vault: &str,
    title: &str,
    json: bool,
) -> color_eyre::Result<()> {
    let sources = workspace.backlinks(vault, title)?;
    print_names(&sources, json);
    Ok(())
}

pub fn graph(workspace: &Workspace, vault: &str) -> color_eyre::Result<()> {
    print!("{}", workspace.render_graph(vault)?);
    Ok(())
}

pub fn reindex(workspace: &Workspace, vault: &str) -> color_eyre::Result<()> {
    let stats = workspace.reindex_vault(vault)?;
    println!(
        "Reindexed vault '{}': {} notes in {}ms ({} skipped)",
        vault, stats.notes_indexed, stats.duration_ms, stats.notes_skipped
    );
    Ok(())
}
