//! PartialScan - template partial directory discovery
//!
//! Discovers directories of template "partials" under a scan root, including
//! directories reached through symbolic links the way package managers
//! install components, and groups each directory's templates under a
//! namespace derived from its path relative to the root.
//!
//! # How a scan classifies the root
//!
//! ```text
//! partials/
//! ├── shared/                      ← admitted directly, namespace "/shared"
//! ├── vendor -> ~/.pkg/components  ← resolved one level deep
//! │   ├── button/                  ← admitted, namespace "/vendor/button"
//! │   └── internal/                ← dropped when "internal" is ignored
//! └── README.md                    ← neither directory nor link, dropped
//! ```
//!
//! Template loading is delegated to a [`TemplateSource`]; the scanner never
//! inspects template content. One broken link or one failed load fails the
//! whole pass; there is no partial result and no retry.
//!
//! # Example
//!
//! ```ignore
//! use partialscan::{HandlebarsTemplates, ScanConfig, Scanner};
//!
//! let scanner = Scanner::new(ScanConfig {
//!     root: "views/partials".into(),
//!     ..Default::default()
//! });
//! let groups = scanner.discover(&HandlebarsTemplates::new()).await?;
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod link;
pub mod namespace;
pub mod templates;

pub use classify::{Entry, EntryKind, classify};
pub use config::ScanConfig;
pub use discover::{AdmittedDir, PartialGroup, Scanner};
pub use error::ScanError;
pub use link::resolve_link;
pub use namespace::derive_namespace;
pub use templates::{HandlebarsTemplates, TemplateSource, register_partials};
