use std::path::PathBuf;
use std::sync::RwLock;

/// A registered vault: a named storage root plus the lock that serializes
/// mutations against it. Reads take the read half so they observe either
/// the pre- or post-state of any single mutation, never a partial one.
#[derive(Debug)]
pub struct VaultHandle {
    pub name: String,
    pub root: PathBuf,
    pub(crate) lock: RwLock<()>,
}

impl VaultHandle {
    pub(crate) fn new(name: impl Into<String>, root: PathBuf) -> Self {
        Self { name: name.into(), root, lock: RwLock::new(()) }
    }
}
