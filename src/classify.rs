//! Entry classification for a single directory level.

use std::path::{Path, PathBuf};

use futures::future::join_all;
use tokio::fs;
use tracing::debug;

use crate::error::ScanError;

/// What a directory child turned out to be, per lstat-style metadata.
///
/// Metadata is fetched without following links, so a symbolic link is
/// reported as a link, never as whatever it points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    SymbolicLink,
    /// Anything else (regular file, socket, ...); discarded downstream
    Other,
}

impl From<std::fs::FileType> for EntryKind {
    fn from(file_type: std::fs::FileType) -> Self {
        if file_type.is_symlink() {
            Self::SymbolicLink
        } else if file_type.is_dir() {
            Self::Directory
        } else {
            Self::Other
        }
    }
}

/// One immediate child of a scanned directory
#[derive(Debug, Clone)]
pub struct Entry {
    /// Basename of the child
    pub name: String,
    /// Parent joined with the basename
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// List the immediate children of `dir` and classify each one.
///
/// An absent `dir` is a valid, silent outcome: the result is empty, not an
/// error. When `allow` is a non-empty set, children whose basename is not in
/// it are dropped before any metadata is fetched. Metadata fetches for the
/// surviving children are issued concurrently; the returned entries keep the
/// listing order.
pub async fn classify(dir: &Path, allow: Option<&[String]>) -> Result<Vec<Entry>, ScanError> {
    if !fs::try_exists(dir).await.unwrap_or(false) {
        debug!(dir = %dir.display(), "classify: directory absent, empty result");
        return Ok(Vec::new());
    }

    let mut reader = fs::read_dir(dir).await.map_err(|source| ScanError::List {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut children: Vec<(String, PathBuf)> = Vec::new();
    while let Some(child) = reader.next_entry().await.map_err(|source| ScanError::List {
        path: dir.to_path_buf(),
        source,
    })? {
        let name = child.file_name().to_string_lossy().into_owned();
        if let Some(allow) = allow {
            if !allow.is_empty() && !allow.iter().any(|a| a == &name) {
                continue;
            }
        }
        children.push((name, child.path()));
    }

    debug!(dir = %dir.display(), count = children.len(), "classify: fetching metadata");

    let stats = children.into_iter().map(|(name, path)| async move {
        let meta = fs::symlink_metadata(&path).await.map_err(|source| ScanError::Stat {
            path: path.clone(),
            source,
        })?;
        Ok(Entry {
            name,
            kind: meta.file_type().into(),
            path,
        })
    });

    join_all(stats).await.into_iter().collect()
}
