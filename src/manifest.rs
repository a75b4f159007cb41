//! TOML manifest listing the headers to amalgamate
//!
//! # Example singlehdr.toml
//!
//! ```toml
//! output = "glascii.h"
//! guard_style = "upper"
//! sources = [
//!     "Utils/Math.h",
//!     "Utils/Vertex.h",
//!     "Renderer/Renderer.h",
//! ]
//! ```
//!
//! `sources` must already be in dependency order. Relative paths resolve
//! against the directory holding the manifest.

use crate::amalgamator::AmalgamateOptions;
use crate::guard::GuardStyle;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest file looked up when `--manifest` is not given
pub const DEFAULT_MANIFEST: &str = "singlehdr.toml";

/// Root of a singlehdr.toml file
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Ordered source headers
    #[serde(default)]
    pub sources: Vec<PathBuf>,

    /// Output header path
    pub output: Option<PathBuf>,

    /// Guard canonicalization (`upper` or `capitalize`)
    pub guard_style: Option<GuardStyle>,

    /// Suffix appended to each guard stem
    pub guard_suffix: Option<String>,
}

impl Manifest {
    /// Load a manifest and resolve its paths against its directory
    ///
    /// ```no_run
    /// use singlehdr::manifest::Manifest;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let manifest = Manifest::from_file("singlehdr.toml")?;
    /// println!("{} sources", manifest.sources.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        let manifest = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid manifest {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(manifest.resolve_against(base))
    }

    /// Parse a manifest without touching the filesystem
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }

    /// Make relative `sources` and `output` relative to `base`
    pub fn resolve_against(mut self, base: &Path) -> Self {
        self.sources = self.sources.into_iter().map(|p| base.join(p)).collect();
        self.output = self.output.map(|p| base.join(p));
        self
    }

    /// Guard options with defaults filled in
    pub fn options(&self) -> AmalgamateOptions {
        let mut options = AmalgamateOptions::default();
        if let Some(style) = self.guard_style {
            options = options.with_guard_style(style);
        }
        if let Some(suffix) = &self.guard_suffix {
            options = options.with_guard_suffix(suffix.clone());
        }
        options
    }
}
