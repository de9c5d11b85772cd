//! Template-loading collaborators.
//!
//! Discovery never inspects template content; it hands each admitted
//! directory to a [`TemplateSource`] and carries back whatever collection
//! the source returns. [`HandlebarsTemplates`] is the stock source: it
//! compiles every template file under a directory with handlebars.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use eyre::{Context, Result, eyre};
use futures::future::join_all;
use handlebars::Handlebars;
use handlebars::template::Template;
use tracing::debug;
use walkdir::WalkDir;

use crate::discover::PartialGroup;

/// Loads the templates for one admitted directory.
#[async_trait]
pub trait TemplateSource: Sync {
    /// Opaque collection handed back through [`PartialGroup`]
    type Templates: Send;

    async fn get_templates(&self, dir: &Path) -> Result<Self::Templates>;
}

/// Compiles every template file under a directory, recursively, keyed by its
/// extension-less path relative to that directory.
#[derive(Debug, Clone)]
pub struct HandlebarsTemplates {
    extension: String,
}

impl HandlebarsTemplates {
    pub fn new() -> Self {
        Self {
            extension: "hbs".to_string(),
        }
    }

    /// Use a different template file extension (without the dot).
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    fn template_files(&self, dir: &Path) -> Vec<(String, PathBuf)> {
        WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| entry.path().extension().and_then(|x| x.to_str()) == Some(self.extension.as_str()))
            .filter_map(|entry| {
                let name = entry.path().strip_prefix(dir).ok()?.with_extension("");
                Some((name.to_string_lossy().into_owned(), entry.into_path()))
            })
            .collect()
    }
}

impl Default for HandlebarsTemplates {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TemplateSource for HandlebarsTemplates {
    type Templates = HashMap<String, Template>;

    async fn get_templates(&self, dir: &Path) -> Result<Self::Templates> {
        let files = self.template_files(dir);
        debug!(dir = %dir.display(), count = files.len(), "get_templates: compiling");

        let compiled = join_all(files.into_iter().map(|(name, path)| async move {
            let source = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("failed to read template {}", path.display()))?;
            let template = Template::compile(&source)
                .map_err(|e| eyre!("failed to compile template {}: {}", path.display(), e))?;
            Ok::<_, eyre::Report>((name, template))
        }))
        .await;

        compiled.into_iter().collect()
    }
}

/// Register discovered groups as templates in a handlebars registry, so
/// `{{> name}}` resolves them as partials.
///
/// Names are `namespace/template-name` with the namespace's leading
/// separators dropped, or just the template name when the namespace is
/// empty.
pub fn register_partials(hbs: &mut Handlebars<'static>, groups: Vec<PartialGroup<HashMap<String, Template>>>) {
    for group in groups {
        let prefix = group.namespace.trim_start_matches(['/', '\\']).to_string();
        for (name, template) in group.templates {
            let key = if prefix.is_empty() {
                name
            } else {
                format!("{prefix}/{name}")
            };
            hbs.register_template(&key, template);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn compiles_templates_recursively() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("nested")).unwrap();
        std::fs::write(temp.path().join("header.hbs"), "<h1>{{title}}</h1>").unwrap();
        std::fs::write(temp.path().join("nested/footer.hbs"), "<footer></footer>").unwrap();
        std::fs::write(temp.path().join("notes.txt"), "not a template").unwrap();

        let source = HandlebarsTemplates::new();
        let templates = source.get_templates(temp.path()).await.unwrap();

        assert_eq!(templates.len(), 2);
        assert!(templates.contains_key("header"));
        assert!(templates.contains_key("nested/footer"));
    }

    #[tokio::test]
    async fn other_extensions_can_be_selected() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("page.handlebars"), "{{body}}").unwrap();
        std::fs::write(temp.path().join("page.hbs"), "{{body}}").unwrap();

        let source = HandlebarsTemplates::with_extension("handlebars");
        let templates = source.get_templates(temp.path()).await.unwrap();

        assert_eq!(templates.len(), 1);
        assert!(templates.contains_key("page"));
    }

    #[tokio::test]
    async fn invalid_template_fails_the_load() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("broken.hbs"), "{{#if cond}} no closing tag").unwrap();

        let source = HandlebarsTemplates::new();
        assert!(source.get_templates(temp.path()).await.is_err());
    }

    #[tokio::test]
    async fn registered_partials_render_under_namespaced_names() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("header.hbs"), "<h1>{{title}}</h1>").unwrap();

        let source = HandlebarsTemplates::new();
        let templates = source.get_templates(temp.path()).await.unwrap();
        let groups = vec![
            PartialGroup {
                namespace: "/shared".to_string(),
                templates,
            },
        ];

        let mut hbs = Handlebars::new();
        register_partials(&mut hbs, groups);

        let out = hbs
            .render_template("{{> shared/header}}", &serde_json::json!({"title": "hi"}))
            .unwrap();
        assert_eq!(out, "<h1>hi</h1>");
    }
}
