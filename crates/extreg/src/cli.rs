//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `providers` | List linked provider classes |
//! | `manifests <extension point>` | List discovery resources for an extension point |
//! | `validate <extension point>` | Parse and resolve every resource, print the key index |

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use extreg_application::registry::Discovery;
use extreg_application::{KeyIndex, LinkedClassResolver};
use extreg_domain::{ClassResolver, ProviderClass};
use extreg_infrastructure::bootstrap::build_locator;
use extreg_infrastructure::config::{AppConfig, ConfigLoader};
use serde::Serialize;

/// Command line interface for the extension registry
#[derive(Parser, Debug)]
#[command(name = "extreg")]
#[command(about = "Inspect extension points and provider discovery")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Load configuration from `--config`, the default locations and the environment
    pub fn load_config(&self) -> extreg_domain::Result<AppConfig> {
        match &self.config {
            Some(path) => ConfigLoader::new().with_config_path(path).load(),
            None => ConfigLoader::new().load(),
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List provider classes linked into this binary
    Providers {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List discovery resources found for an extension point
    Manifests {
        /// Fully-qualified extension point name
        extension_point: String,
    },

    /// Check that every class listed for an extension point resolves and implements it
    Validate {
        /// Fully-qualified extension point name
        extension_point: String,
    },
}

#[derive(Debug, Serialize)]
struct ProviderRow {
    name: &'static str,
    extension_point: &'static str,
    key: &'static str,
    key_class: Option<&'static str>,
}

impl From<&ProviderClass> for ProviderRow {
    fn from(class: &ProviderClass) -> Self {
        Self {
            name: class.name,
            extension_point: class.extension_point().name(),
            key: class.key(),
            key_class: class.key_class().map(|key_class| key_class.name()),
        }
    }
}

/// Run one command, writing its report to `out`
///
/// Returns a failure exit code when validation finds a broken resource;
/// other errors are returned as `Err`.
pub fn run(
    command: &Command,
    config: &AppConfig,
    out: &mut dyn Write,
) -> anyhow::Result<ExitCode> {
    match command {
        Command::Providers { json } => providers(*json, out),
        Command::Manifests { extension_point } => manifests(extension_point, config, out),
        Command::Validate { extension_point } => validate(extension_point, config, out),
    }
}

fn providers(json: bool, out: &mut dyn Write) -> anyhow::Result<ExitCode> {
    let rows: Vec<ProviderRow> = LinkedClassResolver::new()
        .classes()
        .into_iter()
        .map(ProviderRow::from)
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &rows).context("Failed to encode providers")?;
        writeln!(out)?;
        return Ok(ExitCode::SUCCESS);
    }

    for row in &rows {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            row.name,
            row.extension_point,
            row.key,
            row.key_class.unwrap_or("-")
        )?;
    }
    Ok(ExitCode::SUCCESS)
}

fn manifests(
    extension_point: &str,
    config: &AppConfig,
    out: &mut dyn Write,
) -> anyhow::Result<ExitCode> {
    let locator = build_locator(&config.discovery);

    for resource in Discovery::locate(extension_point, &locator)? {
        writeln!(out, "{}", resource.origin())?;
    }
    Ok(ExitCode::SUCCESS)
}

fn validate(
    extension_point: &str,
    config: &AppConfig,
    out: &mut dyn Write,
) -> anyhow::Result<ExitCode> {
    let locator = build_locator(&config.discovery);
    let resolver = LinkedClassResolver::new();
    let discovery = Discovery::new(extension_point, &locator, &resolver);

    let scanned = discovery.scan(|class| class.extension_point().name() == extension_point);
    let discovered = match scanned {
        Ok(discovered) => discovered,
        Err(e) => {
            writeln!(out, "invalid: {e}")?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let index = KeyIndex::build(extension_point, &discovered);
    for key in index.keys() {
        if let Some(class) = index.get(key) {
            writeln!(out, "{key}\t{}", class.name)?;
        }
    }
    for (key_class, key) in index.key_classes() {
        writeln!(out, "{}\t-> {key}", key_class.name())?;
    }
    writeln!(
        out,
        "ok: {} key(s), {} listed class(es)",
        index.len(),
        discovered.len()
    )?;
    Ok(ExitCode::SUCCESS)
}
