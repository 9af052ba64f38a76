//! The command surface: the boundary the presentation shell calls.
//!
//! Pure request/response plumbing. Validation and semantics live in the
//! components; this module only routes typed requests and shapes results.

pub mod requests;

pub use requests::{Request, Response, WireError};

use crate::workspace::Workspace;

/// Execute one command against the workspace.
pub fn dispatch(workspace: &Workspace, request: Request) -> Result<Response, WireError> {
    match request {
        Request::CreateVault { name, base_path } => {
            workspace.create_vault(&name, base_path.as_deref())?;
            Ok(Response::Unit)
        }
        Request::ListVaults => Ok(Response::Names(workspace.list_vaults()?)),
        Request::DeleteVault { name } => {
            workspace.delete_vault(&name)?;
            Ok(Response::Unit)
        }
        Request::CreateNote { vault, title, content } => {
            workspace.create_note(&vault, &title, &content)?;
            Ok(Response::Unit)
        }
        Request::ReadNote { vault, title } => {
            Ok(Response::Text(workspace.read_note(&vault, &title)?))
        }
        Request::DeleteNote { vault, title } => {
            workspace.delete_note(&vault, &title)?;
            Ok(Response::Unit)
        }
        Request::ListNotes { vault } => {
            Ok(Response::Names(workspace.list_notes(&vault)?))
        }
        Request::IndexNote { vault, title, content } => {
            workspace.index_note(&vault, &title, &content);
            Ok(Response::Unit)
        }
        Request::DeleteNoteIndex { vault, title } => {
            workspace.delete_note_index(&vault, &title);
            Ok(Response::Unit)
        }
        Request::ExtractPlainText { content } => {
            Ok(Response::Text(workspace.extract_plain_text(&content)))
        }
        Request::ExtractLinks { vault, title } => {
            Ok(Response::Names(workspace.extract_links(&vault, &title)?))
        }
        Request::ParseMarkdownContent { content } => {
            Ok(Response::Text(workspace.parse_markdown_content(&content)))
        }
        Request::SearchNotes { vault, query } => {
            let hits = workspace.search_notes(&vault, &query)?;
            Ok(Response::Names(hits.into_iter().map(|h| h.title).collect()))
        }
        Request::Backlinks { vault, title } => {
            Ok(Response::Names(workspace.backlinks(&vault, &title)?))
        }
        Request::RenderGraph { vault } => {
            Ok(Response::Text(workspace.render_graph(&vault)?))
        }
    }
}
