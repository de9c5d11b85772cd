//! Discovery orchestration: scan the root, resolve links, filter, group.

use std::path::PathBuf;

use futures::future::join_all;
use tracing::debug;

use crate::classify::{EntryKind, classify};
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::link::resolve_link;
use crate::namespace::derive_namespace;
use crate::templates::TemplateSource;

/// A directory that survived classification and filtering and will have its
/// templates loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmittedDir {
    /// Logical name; for link-discovered directories this is the composed
    /// path through the link, and namespaces derive from it
    pub name: String,
    /// Real filesystem path templates are read from
    pub path: PathBuf,
}

/// One admitted directory's templates, keyed by its namespace.
///
/// Output order carries no meaning; treat a discovery result as a set.
#[derive(Debug, Clone)]
pub struct PartialGroup<T> {
    pub namespace: String,
    pub templates: T,
}

/// Discovers partial directories under a scan root.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Run one discovery pass.
    ///
    /// Classifies the root's children (allow-list applied), resolves every
    /// symbolic link found there concurrently, then concatenates root
    /// directories, extra roots, and link-discovered directories into one
    /// admitted set. Duplicates across those sources are kept; their
    /// templates simply load twice. Each admitted directory is handed to
    /// `loader` concurrently, and results are reassembled in concatenation
    /// order regardless of completion order.
    ///
    /// A single broken link or failed template load fails the whole pass;
    /// sibling operations already in flight still run to completion, their
    /// results discarded.
    pub async fn discover<L: TemplateSource>(
        &self,
        loader: &L,
    ) -> Result<Vec<PartialGroup<L::Templates>>, ScanError> {
        let entries = classify(&self.config.root, self.config.allow.as_deref()).await?;

        let mut dirs = Vec::new();
        let mut links = Vec::new();
        for entry in entries {
            match entry.kind {
                EntryKind::Directory => dirs.push(entry),
                EntryKind::SymbolicLink => links.push(entry),
                EntryKind::Other => {}
            }
        }
        debug!(
            root = %self.config.root.display(),
            dirs = dirs.len(),
            links = links.len(),
            "discover: root classified"
        );

        let resolutions = join_all(
            links
                .iter()
                .map(|link| resolve_link(&link.path, &self.config.ignore)),
        )
        .await;

        let mut admitted: Vec<AdmittedDir> = dirs
            .into_iter()
            .map(|e| AdmittedDir {
                name: e.path.to_string_lossy().into_owned(),
                path: e.path,
            })
            .collect();
        admitted.extend(self.config.extra_roots.iter().map(|p| AdmittedDir {
            name: p.to_string_lossy().into_owned(),
            path: p.clone(),
        }));
        for resolved in resolutions {
            admitted.extend(resolved?);
        }

        debug!(admitted = admitted.len(), "discover: loading templates");

        let root_label = self.config.root.to_string_lossy();
        let loads = admitted.into_iter().map(|dir| {
            let namespace = derive_namespace(&dir.name, root_label.as_ref());
            async move {
                match loader.get_templates(&dir.path).await {
                    Ok(templates) => Ok(PartialGroup { namespace, templates }),
                    Err(reason) => Err(ScanError::TemplateLoad {
                        path: dir.path,
                        reason,
                    }),
                }
            }
        });

        join_all(loads).await.into_iter().collect()
    }
}
