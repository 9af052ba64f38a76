//! The process-wide core object: vault registry plus index engine.
//!
//! Every mutating operation pairs the durable file change with the
//! matching index update while holding the vault's write lock, so a stale
//! index is structurally impossible rather than a caller convention. Index
//! and link failures on mutation paths degrade to a warning; they never
//! block a note's durability.
//!
//! Lock order is fixed: registry, then vault, then index. Reads take the
//! vault's read half and therefore observe either the pre- or post-state
//! of any single mutation.

use std::path::{Path, PathBuf};
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use chrono::Utc;

use crate::config::ResolvedConfig;
use crate::errors::CoreError;
use crate::graph::LinkGraph;
use crate::index::{IndexDb, RebuildStats, SearchHit, rebuild_vault};
use crate::links;
use crate::markdown;
use crate::notes::store;
use crate::vaults::{VaultHandle, VaultManager};

/// Startup options, typically derived from [`ResolvedConfig`].
#[derive(Debug, Clone)]
pub struct WorkspaceOptions {
    pub base_path: PathBuf,
    pub default_vault: String,
}

impl From<&ResolvedConfig> for WorkspaceOptions {
    fn from(cfg: &ResolvedConfig) -> Self {
        Self { base_path: cfg.base_path.clone(), default_vault: cfg.default_vault.clone() }
    }
}

pub struct Workspace {
    vaults: VaultManager,
    index: IndexDb,
}

impl Workspace {
    /// Open the workspace: discover vaults under the base path (creating
    /// the default vault if none exist) and rebuild the in-memory index
    /// from the notes on disk.
    pub fn open(options: &WorkspaceOptions) -> Result<Self, CoreError> {
        let vaults = VaultManager::open(&options.base_path, &options.default_vault)?;
        let index = IndexDb::open_in_memory()?;
        let workspace = Self { vaults, index };

        for handle in workspace.vaults.handles()? {
            let _guard = write_lock(&handle)?;
            match rebuild_vault(&workspace.index, &handle.name, &handle.root) {
                Ok(stats) => tracing::debug!(
                    "indexed vault '{}': {} notes in {}ms",
                    handle.name,
                    stats.notes_indexed,
                    stats.duration_ms
                ),
                Err(e) => {
                    tracing::warn!("failed to index vault '{}': {}", handle.name, e);
                }
            }
        }

        Ok(workspace)
    }

    pub fn from_config(cfg: &ResolvedConfig) -> Result<Self, CoreError> {
        Self::open(&WorkspaceOptions::from(cfg))
    }

    // ── Vault lifecycle ─────────────────────────────────────────────────

    /// Create and register a vault. The storage root defaults to the
    /// configured base path when the caller does not supply one.
    pub fn create_vault(
        &self,
        name: &str,
        base_path: Option<&Path>,
    ) -> Result<(), CoreError> {
        let handle = self.vaults.create(name, base_path)?;

        // The directory may pre-date registration and already hold notes.
        let _guard = write_lock(&handle)?;
        if let Err(e) = rebuild_vault(&self.index, &handle.name, &handle.root) {
            tracing::warn!("failed to index new vault '{}': {}", handle.name, e);
        }
        Ok(())
    }

    /// Vault names in registration order.
    pub fn list_vaults(&self) -> Result<Vec<String>, CoreError> {
        self.vaults.names()
    }

    /// Delete a vault, its notes and all derived state. The registration
    /// is removed first, so no lookup can observe a half-deleted vault.
    pub fn delete_vault(&self, name: &str) -> Result<(), CoreError> {
        let handle = self.vaults.remove(name)?;
        let _guard = write_lock(&handle)?;

        if let Err(e) = self.index.purge_vault(&handle.name) {
            tracing::warn!("failed to purge index for vault '{}': {}", handle.name, e);
        }

        match std::fs::remove_dir_all(&handle.root) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    // ── Note lifecycle ──────────────────────────────────────────────────

    /// Create or overwrite a note, then bring the index and link edges up
    /// to date before returning.
    pub fn create_note(
        &self,
        vault: &str,
        title: &str,
        content: &str,
    ) -> Result<(), CoreError> {
        let handle = self.vaults.resolve(vault)?;
        let _guard = write_lock(&handle)?;

        store::write(&handle, title, content)?;

        if let Err(e) = self.index.index_note(&handle.name, title, content, Utc::now())
        {
            tracing::warn!(
                "failed to index note '{}' in vault '{}': {}",
                title,
                handle.name,
                e
            );
        }
        Ok(())
    }

    /// Raw note content, unmodified.
    pub fn read_note(&self, vault: &str, title: &str) -> Result<String, CoreError> {
        let handle = self.vaults.resolve(vault)?;
        let _guard = read_lock(&handle)?;
        store::read(&handle, title)
    }

    /// Delete a note and invalidate its index contribution before
    /// returning, so no later search can still surface it.
    pub fn delete_note(&self, vault: &str, title: &str) -> Result<(), CoreError> {
        let handle = self.vaults.resolve(vault)?;
        let _guard = write_lock(&handle)?;

        store::remove(&handle, title)?;

        if let Err(e) = self.index.remove_note(&handle.name, title) {
            tracing::warn!(
                "failed to de-index note '{}' in vault '{}': {}",
                title,
                handle.name,
                e
            );
        }
        Ok(())
    }

    /// All note titles in the vault, lexicographic.
    pub fn list_notes(&self, vault: &str) -> Result<Vec<String>, CoreError> {
        let handle = self.vaults.resolve(vault)?;
        let _guard = read_lock(&handle)?;
        store::list_titles(&handle)
    }

    // ── Index operations ────────────────────────────────────────────────

    /// Explicit re-index of one note. Best-effort by contract: failures
    /// (including an unknown vault) are logged, never surfaced.
    pub fn index_note(&self, vault: &str, title: &str, content: &str) {
        let handle = match self.vaults.resolve(vault) {
            Ok(h) => h,
            Err(_) => {
                tracing::warn!("index_note: unknown vault '{}'", vault);
                return;
            }
        };
        let guard = write_lock(&handle);
        if guard.is_err() {
            tracing::warn!("index_note: lock poisoned for vault '{}'", vault);
            return;
        }
        if let Err(e) = self.index.index_note(&handle.name, title, content, Utc::now())
        {
            tracing::warn!("index_note failed for '{}': {}", title, e);
        }
    }

    /// Drop one note's index contribution. No-op when absent.
    pub fn delete_note_index(&self, vault: &str, title: &str) {
        let handle = match self.vaults.resolve(vault) {
            Ok(h) => h,
            Err(_) => return,
        };
        let guard = write_lock(&handle);
        if guard.is_err() {
            return;
        }
        if let Err(e) = self.index.remove_note(&handle.name, title) {
            tracing::warn!("delete_note_index failed for '{}': {}", title, e);
        }
    }

    /// Ranked full-text search within one vault.
    pub fn search_notes(
        &self,
        vault: &str,
        query: &str,
    ) -> Result<Vec<SearchHit>, CoreError> {
        let handle = self.vaults.resolve(vault)?;
        let _guard = read_lock(&handle)?;
        Ok(self.index.search(&handle.name, query)?)
    }

    /// Rebuild one vault's index from disk.
    pub fn reindex_vault(&self, vault: &str) -> Result<RebuildStats, CoreError> {
        let handle = self.vaults.resolve(vault)?;
        let _guard = write_lock(&handle)?;
        Ok(rebuild_vault(&self.index, &handle.name, &handle.root)?)
    }

    // ── Links and rendering ─────────────────────────────────────────────

    /// Referenced titles in the note's current content, in order of
    /// appearance with duplicates preserved. Targets are returned as-is;
    /// callers distinguish resolved from unresolved by cross-checking
    /// [`Workspace::list_notes`].
    pub fn extract_links(
        &self,
        vault: &str,
        title: &str,
    ) -> Result<Vec<String>, CoreError> {
        let handle = self.vaults.resolve(vault)?;
        let _guard = read_lock(&handle)?;
        let content = store::read(&handle, title)?;
        Ok(links::extract_targets(&content))
    }

    /// Titles of notes linking to the given title.
    pub fn backlinks(&self, vault: &str, title: &str) -> Result<Vec<String>, CoreError> {
        let handle = self.vaults.resolve(vault)?;
        let _guard = read_lock(&handle)?;
        Ok(self.index.backlinks(&handle.name, title)?)
    }

    /// The vault's link graph rendered as Graphviz DOT.
    pub fn render_graph(&self, vault: &str) -> Result<String, CoreError> {
        let handle = self.vaults.resolve(vault)?;
        let _guard = read_lock(&handle)?;
        let titles = self.index.indexed_titles(&handle.name)?;
        let edges = self.index.edges(&handle.name)?;
        Ok(LinkGraph::from_vault(&titles, &edges).render_dot())
    }

    /// Plain-text projection of markup. Pure; no vault involved.
    pub fn extract_plain_text(&self, content: &str) -> String {
        markdown::plain_text(content)
    }

    /// Display HTML for markup. Pure; no vault involved.
    pub fn parse_markdown_content(&self, content: &str) -> String {
        markdown::render_html(content)
    }

    /// Test- and diagnostics-facing view of a vault's postings.
    pub fn postings_snapshot(
        &self,
        vault: &str,
    ) -> Result<Vec<(String, String, i64)>, CoreError> {
        let handle = self.vaults.resolve(vault)?;
        let _guard = read_lock(&handle)?;
        Ok(self.index.postings_snapshot(&handle.name)?)
    }
}

fn write_lock(handle: &VaultHandle) -> Result<RwLockWriteGuard<'_, ()>, CoreError> {
    handle.lock.write().map_err(|_| CoreError::LockPoisoned)
}

fn read_lock(handle: &VaultHandle) -> Result<RwLockReadGuard<'_, ()>, CoreError> {
    handle.lock.read().map_err(|_| CoreError::LockPoisoned)
}
