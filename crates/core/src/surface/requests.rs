//! Typed wire payloads for the command surface.
//!
//! The serde tag values are the wire contract and must be preserved
//! exactly; the presentation shell addresses commands by these names.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, ErrorKind};

/// A command request. Internally tagged so a shell submits e.g.
/// `{"command": "create_note", "vault": "...", "title": "...", ...}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Request {
    CreateVault {
        name: String,
        /// Optional override; the configured base path when omitted.
        #[serde(default)]
        base_path: Option<PathBuf>,
    },
    ListVaults,
    DeleteVault { name: String },
    CreateNote { vault: String, title: String, content: String },
    ReadNote { vault: String, title: String },
    DeleteNote { vault: String, title: String },
    ListNotes { vault: String },
    IndexNote { vault: String, title: String, content: String },
    DeleteNoteIndex { vault: String, title: String },
    ExtractPlainText { content: String },
    ExtractLinks { vault: String, title: String },
    ParseMarkdownContent { content: String },
    // Extras beyond the frozen table
    SearchNotes { vault: String, query: String },
    Backlinks { vault: String, title: String },
    RenderGraph { vault: String },
}

/// A command result. Untagged: unit results serialize as `null`, lists as
/// arrays, text as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Unit,
    Names(Vec<String>),
    Text(String),
}

/// Structured failure reported to the shell: a stable category plus a
/// human-readable message. Never an ambiguous empty success.
#[derive(Debug, Clone, Serialize)]
pub struct WireError {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<CoreError> for WireError {
    fn from(err: CoreError) -> Self {
        Self { kind: err.kind(), message: err.to_string() }
    }
}
