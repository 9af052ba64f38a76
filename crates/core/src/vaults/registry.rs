//! Vault registry: creation, lookup, listing and removal of storage roots.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use walkdir::WalkDir;

use super::types::VaultHandle;
use crate::errors::CoreError;
use crate::notes::store::sync_dir;
use crate::notes::title;

/// Owns the name → storage-root mapping for the process.
///
/// `list` returns names in registration order; vaults discovered at
/// startup register in lexicographic order, before anything created at
/// runtime.
pub struct VaultManager {
    base_path: PathBuf,
    vaults: RwLock<Vec<Arc<VaultHandle>>>,
}

impl VaultManager {
    /// Discover existing vault directories under `base_path` and register
    /// them. If none exist, create the default vault — the only implicit
    /// side effect the core performs, and idempotent across restarts
    /// because an existing directory is discovered instead of re-created.
    pub fn open(base_path: &Path, default_vault: &str) -> Result<Self, CoreError> {
        fs::create_dir_all(base_path)?;

        let discovered = discover(base_path);
        let manager = Self {
            base_path: base_path.to_path_buf(),
            vaults: RwLock::new(discovered),
        };

        let empty =
            manager.vaults.read().map_err(|_| CoreError::LockPoisoned)?.is_empty();
        if empty {
            manager.create(default_vault, None)?;
        }

        Ok(manager)
    }

    /// Register a new vault and durably create its storage root.
    pub fn create(
        &self,
        name: &str,
        base_override: Option<&Path>,
    ) -> Result<Arc<VaultHandle>, CoreError> {
        title::validate(name)?;

        let base = base_override.unwrap_or(&self.base_path);
        let root = base.join(name);

        let mut vaults = self.vaults.write().map_err(|_| CoreError::LockPoisoned)?;

        if vaults.iter().any(|v| v.name == name) {
            return Err(CoreError::VaultExists(name.to_string()));
        }
        for existing in vaults.iter() {
            if root.starts_with(&existing.root) || existing.root.starts_with(&root) {
                return Err(CoreError::RootOverlap(root.display().to_string()));
            }
        }

        fs::create_dir_all(&root)?;
        sync_dir(base)?;

        let handle = Arc::new(VaultHandle::new(name, root));
        vaults.push(Arc::clone(&handle));
        Ok(handle)
    }

    /// Look up a vault by name.
    pub fn resolve(&self, name: &str) -> Result<Arc<VaultHandle>, CoreError> {
        let vaults = self.vaults.read().map_err(|_| CoreError::LockPoisoned)?;
        vaults
            .iter()
            .find(|v| v.name == name)
            .cloned()
            .ok_or_else(|| CoreError::VaultNotFound(name.to_string()))
    }

    /// Vault names in registration order.
    pub fn names(&self) -> Result<Vec<String>, CoreError> {
        let vaults = self.vaults.read().map_err(|_| CoreError::LockPoisoned)?;
        Ok(vaults.iter().map(|v| v.name.clone()).collect())
    }

    /// All handles, registration order.
    pub fn handles(&self) -> Result<Vec<Arc<VaultHandle>>, CoreError> {
        let vaults = self.vaults.read().map_err(|_| CoreError::LockPoisoned)?;
        Ok(vaults.to_vec())
    }

    /// Unregister a vault and hand its handle to the caller for teardown.
    /// Lookups arriving after this returns see `VaultNotFound`; the caller
    /// still holds the handle and deletes the storage under its write lock.
    pub fn remove(&self, name: &str) -> Result<Arc<VaultHandle>, CoreError> {
        let mut vaults = self.vaults.write().map_err(|_| CoreError::LockPoisoned)?;
        let pos = vaults
            .iter()
            .position(|v| v.name == name)
            .ok_or_else(|| CoreError::VaultNotFound(name.to_string()))?;
        Ok(vaults.remove(pos))
    }

    /// The configured base path new vaults default to.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

fn discover(base: &Path) -> Vec<Arc<VaultHandle>> {
    let mut found: Vec<(String, PathBuf)> = Vec::new();

    for entry in WalkDir::new(base).min_depth(1).max_depth(1).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("failed to scan vault base {}: {}", base.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = match entry.file_name().to_str() {
            Some(n) => n.to_string(),
            None => continue,
        };
        if name.starts_with('.') {
            continue;
        }
        found.push((name, entry.path().to_path_buf()));
    }

    found.sort();
    found
        .into_iter()
        .map(|(name, root)| Arc::new(VaultHandle::new(name, root)))
        .collect()
}
