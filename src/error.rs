//! Error types for discovery passes.

use std::path::PathBuf;

use thiserror::Error;

/// Errors a discovery pass can surface.
///
/// An absent scan root is not among them: scanning a root that does not
/// exist is a valid, silent outcome that yields an empty result. Everything
/// below aborts the whole pass; there is no partial-success mode.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A directory that exists could not be listed
    #[error("failed to list {}: {}", .path.display(), .source)]
    List { path: PathBuf, source: std::io::Error },

    /// Metadata for a directory child could not be fetched
    #[error("failed to stat {}: {}", .path.display(), .source)]
    Stat { path: PathBuf, source: std::io::Error },

    /// A symbolic link's chain could not be resolved to a real target
    #[error("failed to resolve link {}: {}", .path.display(), .source)]
    ResolveLink { path: PathBuf, source: std::io::Error },

    /// The template-loading collaborator failed for an admitted directory
    #[error("failed to load templates from {}: {}", .path.display(), .reason)]
    TemplateLoad { path: PathBuf, reason: eyre::Report },
}
