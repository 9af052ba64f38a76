//! Pure markup commands: HTML rendering and plain-text projection.

use inkvault_core::Workspace;

use super::content_or_stdin;

pub fn render(
    workspace: &Workspace,
    content: Option<String>,
) -> color_eyre::Result<()> {
    let content = content_or_stdin(content)?;
    print!("{}", workspace.parse_markdown_content(&content));
    Ok(())
}

pub fn plain(workspace: &Workspace, content: Option<String>) -> color_eyre::Result<()> {
    let content = content_or_stdin(content)?;
    println!("{}", workspace.extract_plain_text(&content));
    Ok(())
}
