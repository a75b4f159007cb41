//! CLI argument parsing for singlehdr

use crate::amalgamator::AmalgamateOptions;
use crate::guard::GuardStyle;
use crate::manifest::{Manifest, DEFAULT_MANIFEST};
use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Format of the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary on stderr (default)
    Text,
    /// JSON summary on stdout
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "singlehdr")]
#[command(version)]
#[command(
    about = "Amalgamate an ordered list of headers into one self-contained header",
    long_about = "Amalgamate an ordered list of headers into one self-contained header.\n\n\
                  Sources are emitted in the order given, which must already be a valid \
                  dependency order. Each body is wrapped in its own include guard; \
                  quoted includes and #pragma once lines are removed."
)]
pub struct Cli {
    /// TOML manifest with `sources` and `output` (default: ./singlehdr.toml if present)
    #[arg(short, long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Comma-separated source headers in dependency order (overrides the manifest)
    #[arg(short, long, value_name = "LIST", value_delimiter = ',')]
    pub sources: Option<Vec<PathBuf>>,

    /// Output header path, or `-` for stdout (overrides the manifest)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Guard canonicalization
    #[arg(long = "guard-style", value_enum)]
    pub guard_style: Option<GuardStyle>,

    /// Suffix appended to each guard stem (default: _IMPL_H)
    #[arg(long = "guard-suffix", value_name = "SUFFIX")]
    pub guard_suffix: Option<String>,

    /// Summary format
    #[arg(long = "report", value_enum, default_value = "text")]
    pub report: ReportFormat,

    /// Suppress the text summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug tracing on stderr
    #[arg(long)]
    pub debug: bool,
}

/// Where the amalgamated header goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

/// Fully resolved invocation: flags merged over the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub sources: Vec<PathBuf>,
    pub output: OutputTarget,
    pub options: AmalgamateOptions,
}

impl Cli {
    /// Merge flags with the manifest found in `cwd`
    ///
    /// Each flag overrides only its own manifest field.
    pub fn resolve(&self, cwd: &Path) -> Result<RunPlan> {
        let manifest = match &self.manifest {
            Some(path) => Some(Manifest::from_file(cwd.join(path))?),
            None => {
                let default = cwd.join(DEFAULT_MANIFEST);
                if default.exists() {
                    Some(Manifest::from_file(default)?)
                } else {
                    None
                }
            }
        };

        let sources = match (&self.sources, &manifest) {
            (Some(sources), _) => sources.clone(),
            (None, Some(m)) => m.sources.clone(),
            (None, None) => bail!(
                "No sources given. Pass --sources a.h,b.h or provide {}",
                DEFAULT_MANIFEST
            ),
        };

        let output = match (&self.output, manifest.as_ref().and_then(|m| m.output.as_ref())) {
            (Some(path), _) if path.as_os_str() == "-" => OutputTarget::Stdout,
            (Some(path), _) => OutputTarget::File(path.clone()),
            (None, Some(path)) => OutputTarget::File(path.clone()),
            (None, None) => {
                bail!("No output path given. Pass --output PATH or set `output` in the manifest")
            }
        };

        let mut options = manifest.as_ref().map(Manifest::options).unwrap_or_default();
        if let Some(style) = self.guard_style {
            options = options.with_guard_style(style);
        }
        if let Some(suffix) = &self.guard_suffix {
            options = options.with_guard_suffix(suffix.clone());
        }

        Ok(RunPlan {
            sources,
            output,
            options,
        })
    }
}
