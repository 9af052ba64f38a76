//! Inverted full-text index over vault notes.
//!
//! SQLite-backed (in memory, never persisted) storage for:
//! - Note records (vault, title, modified time)
//! - Term postings with per-note frequencies, for ranked search
//! - Link edges between notes, including unresolved targets
//!
//! The index is a pure cache over NoteStore content: rebuilding it from
//! scratch at any quiescent point must reproduce the maintained state.

pub mod db;
pub mod rebuild;
pub mod schema;
pub mod tokenizer;

pub use db::{IndexDb, IndexError, SearchHit, StoredLink};
pub use rebuild::{RebuildStats, rebuild_vault};
pub use schema::{SCHEMA_VERSION, SchemaError};
pub use tokenizer::{term_frequencies, tokenize};
