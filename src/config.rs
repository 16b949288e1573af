//! Configuration loading and merging.
//!
//! Booklet parameters can come from three places, in increasing priority: an
//! optional `a6-booklet.toml` file, `A6_BOOKLET_*` environment variables, and
//! command line flags. clap takes care of the latter two; this module reads the
//! file and folds everything into a validated [`BookletJob`].

use crate::cli::Cli;
use crate::command::DEFAULT_TOOL;
use crate::error::BookletError;
use anyhow::{anyhow, Context, Result};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` isn't given
pub const DEFAULT_CONFIG_FILE: &str = "a6-booklet.toml";

/// Contents of a booklet config file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub pages: Option<i64>,
    #[serde(default)]
    pub tool: Option<String>,
}

impl Configuration {
    pub fn load(path: &Path) -> Result<Configuration> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to load {} contents", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML in {}", path.display()))
    }

    /// Load the explicitly requested config file, or the default one if it exists.
    ///
    /// An explicit path that doesn't exist is an error; a missing default file
    /// just yields an empty configuration.
    pub fn discover(explicit: Option<&Path>) -> Result<Configuration> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(anyhow!("Config file '{}' doesn't exist!", path.display()));
                }
                log::debug!("loading configuration from {}", path.display());
                Configuration::load(path)
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    log::debug!("loading configuration from {}", path.display());
                    Configuration::load(path)
                } else {
                    Ok(Configuration::default())
                }
            }
        }
    }
}

/// A fully specified booklet run.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(
    setter(into),
    build_fn(validate = "Self::validate", error = "BookletError")
)]
pub struct BookletJob {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Unvalidated page count; checked when the order is calculated
    pub pages: i64,
    #[builder(default = "DEFAULT_TOOL.to_string()")]
    pub tool: String,
}

impl BookletJobBuilder {
    fn validate(&self) -> Result<(), BookletError> {
        if self
            .input
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(BookletError::MissingParameter("input"));
        }
        if self
            .output
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(BookletError::MissingParameter("output"));
        }
        if self.tool.as_ref().is_some_and(|tool| tool.trim().is_empty()) {
            return Err(BookletError::MissingParameter("tool"));
        }
        Ok(())
    }
}

/// Merge command line (and environment) values over the config file values.
pub fn resolve_job(cli: &Cli, file: Configuration) -> Result<BookletJob, BookletError> {
    let mut builder = BookletJobBuilder::default();
    if let Some(input) = cli.input.clone().or(file.input) {
        builder.input(input);
    }
    if let Some(output) = cli.output.clone().or(file.output) {
        builder.output(output);
    }
    if let Some(pages) = cli.pages.or(file.pages) {
        builder.pages(pages);
    }
    if let Some(tool) = cli.tool.clone().or(file.tool) {
        builder.tool(tool);
    }
    builder.build()
}
