//! Symbolic link resolution for package-installed partial directories.

use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::classify::{EntryKind, classify};
use crate::discover::AdmittedDir;
use crate::error::ScanError;

/// Resolve a symbolic link found at the scan root and collect the
/// directories one level below its target.
///
/// A link at the root typically points at a package manager's components
/// directory; its children are the individual component directories. Only
/// one level of indirection is followed here: links nested below the target
/// are not resolved again. Each returned entry keeps the logical path
/// through the link as its name (so namespaces reflect the link's position
/// in the tree) while its path is the resolved location templates are
/// actually read from.
///
/// A dangling or unreadable link chain is a hard error, not a skip.
pub async fn resolve_link(link: &Path, ignore: &[String]) -> Result<Vec<AdmittedDir>, ScanError> {
    let target = fs::canonicalize(link).await.map_err(|source| ScanError::ResolveLink {
        path: link.to_path_buf(),
        source,
    })?;
    debug!(link = %link.display(), target = %target.display(), "resolve_link: chain resolved");

    let entries = classify(&target, None).await?;
    Ok(entries
        .into_iter()
        .filter(|e| e.kind == EntryKind::Directory && !ignore.iter().any(|i| i == &e.name))
        .map(|e| AdmittedDir {
            name: link.join(&e.name).to_string_lossy().into_owned(),
            path: e.path,
        })
        .collect())
}
