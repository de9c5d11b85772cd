//! pscan - partial directory discovery CLI
//!
//! Thin consumer of the partialscan library: runs one discovery pass and
//! prints each namespace with the template names found under it.

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;

use partialscan::Scanner;
use partialscan::cli::Cli;
use partialscan::config::ScanConfig;
use partialscan::templates::HandlebarsTemplates;

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    let level: tracing::Level = cli_log_level
        .and_then(|s| s.parse().ok())
        .unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let mut config = ScanConfig::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(root) = cli.root {
        config.root = root;
    }
    if !cli.extra_roots.is_empty() {
        config.extra_roots = cli.extra_roots;
    }
    if !cli.ignore.is_empty() {
        config.ignore = cli.ignore;
    }
    if !cli.allow.is_empty() {
        config.allow = Some(cli.allow);
    }
    if let Some(extension) = cli.extension {
        config.extension = extension;
    }

    info!("pscan scanning {}", config.root.display());

    let loader = HandlebarsTemplates::with_extension(config.extension.as_str());
    let scanner = Scanner::new(config.clone());
    let groups = scanner.discover(&loader).await.context("Discovery failed")?;

    if cli.json {
        let out: Vec<_> = groups
            .iter()
            .map(|g| {
                let mut names: Vec<&String> = g.templates.keys().collect();
                names.sort();
                serde_json::json!({
                    "namespace": g.namespace,
                    "templates": names,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if groups.is_empty() {
        println!("No partial directories found under {}", config.root.display());
    } else {
        for group in &groups {
            if group.namespace.is_empty() {
                println!("{}", "(ungrouped)".dimmed());
            } else {
                println!("{}", group.namespace.as_str().cyan());
            }
            let mut names: Vec<&String> = group.templates.keys().collect();
            names.sort();
            for name in names {
                println!("  {}", name);
            }
        }
    }

    Ok(())
}
