//! Durable note file operations.
//!
//! One `<title>.md` file per note under the vault root. Writes go through
//! a temp file, fsync and rename so a crash can never leave a half-written
//! note behind, and no operation reports success before the change has
//! reached disk. Callers (the workspace) hold the vault's write lock for
//! mutations; nothing here locks.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::title;
use crate::errors::CoreError;
use crate::vaults::VaultHandle;

pub(crate) fn note_path(root: &Path, title: &str) -> PathBuf {
    root.join(title::file_name(title))
}

/// Write (or overwrite) a note. Duplicate create is an upsert, never an
/// append and never an error.
pub(crate) fn write(
    handle: &VaultHandle,
    title: &str,
    content: &str,
) -> Result<(), CoreError> {
    title::validate(title)?;

    let path = note_path(&handle.root, title);
    let tmp = handle.root.join(format!(".{}.tmp", title::file_name(title)));

    {
        let mut file = File::create(&tmp)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&tmp, &path)?;
    sync_dir(&handle.root)?;

    Ok(())
}

/// Read a note's raw content, unmodified.
pub(crate) fn read(handle: &VaultHandle, title: &str) -> Result<String, CoreError> {
    title::validate(title)?;

    let path = note_path(&handle.root, title);
    match fs::read_to_string(&path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(CoreError::NoteNotFound {
                vault: handle.name.clone(),
                title: title.to_string(),
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Remove a note's file. The removal is durable before this returns.
pub(crate) fn remove(handle: &VaultHandle, title: &str) -> Result<(), CoreError> {
    title::validate(title)?;

    let path = note_path(&handle.root, title);
    match fs::remove_file(&path) {
        Ok(()) => {
            sync_dir(&handle.root)?;
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(CoreError::NoteNotFound {
                vault: handle.name.clone(),
                title: title.to_string(),
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// All note titles in the vault, lexicographic. A vault directory that
/// vanished mid-flight reads as empty rather than failing.
pub(crate) fn list_titles(handle: &VaultHandle) -> Result<Vec<String>, CoreError> {
    let mut titles = Vec::new();

    for entry in WalkDir::new(&handle.root).max_depth(1).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => continue,
        };
        if name.starts_with('.') || !name.ends_with(".md") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            titles.push(stem.to_string());
        }
    }

    titles.sort();
    Ok(titles)
}

/// Flush directory metadata so renames and removals survive a crash.
pub(crate) fn sync_dir(dir: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        File::open(dir)?.sync_all()?;
    }
    #[cfg(not(unix))]
    {
        let _ = dir;
    }
    Ok(())
}
