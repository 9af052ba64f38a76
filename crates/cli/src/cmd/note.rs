//! Note lifecycle commands.

use inkvault_core::Workspace;

use super::{content_or_stdin, print_names};

pub fn create(
    workspace: &Workspace,
    vault: &str,
    title: &str,
    content: Option<String>,
) -> color_eyre::Result<()> {
    let content = content_or_stdin(content)?;
    workspace.create_note(vault, title, &content)?;
    println!("Wrote note '{title}' in vault '{vault}'");
    Ok(())
}

pub fn read(workspace: &Workspace, vault: &str, title: &str) -> color_eyre::Result<()> {
    // Raw content, unmodified; no trailing newline added.
    print!("{}", workspace.read_note(vault, title)?);
    Ok(())
}

pub fn delete(
    workspace: &Workspace,
    vault: &str,
    title: &str,
) -> color_eyre::Result<()> {
    workspace.delete_note(vault, title)?;
    println!("Deleted note '{title}' from vault '{vault}'");
    Ok(())
}

pub fn list(workspace: &Workspace, vault: &str, json: bool) -> color_eyre::Result<()> {
    let titles = workspace.list_notes(vault)?;
    print_names(&titles, json);
    Ok(())
}
