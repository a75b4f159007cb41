//! Include guard derivation
//!
//! Each source header gets a guard token built from its filename stem:
//! `Renderer/DepthBuffer.h` becomes `DEPTHBUFFER_IMPL_H` with the default
//! style. Tokens must be unique within one run.

use crate::error::{AmalgamateError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Suffix appended to every guard stem unless overridden
pub const DEFAULT_GUARD_SUFFIX: &str = "_IMPL_H";

/// How a filename stem is turned into a guard token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardStyle {
    /// Upper-case every letter (`FPSCounter` -> `FPSCOUNTER`)
    #[default]
    Upper,
    /// Upper-case the first letter, lower-case the rest (`FPSCounter` -> `Fpscounter`)
    Capitalize,
}

impl GuardStyle {
    /// Canonicalize a filename stem into a valid identifier fragment
    pub fn canonicalize(self, stem: &str) -> String {
        let cased: String = match self {
            GuardStyle::Upper => stem.to_ascii_uppercase(),
            GuardStyle::Capitalize => {
                let mut chars = stem.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                    None => String::new(),
                }
            }
        };

        let mut token: String = cased
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect();

        // Identifiers cannot start with a digit
        if token.is_empty() || token.starts_with(|c: char| c.is_ascii_digit()) {
            token.insert_str(0, "H_");
        }
        token
    }
}

/// Filename stem of a source path: the final component up to its first `.`
pub fn guard_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.find('.') {
        Some(idx) => name[..idx].to_string(),
        None => name,
    }
}

/// Check that a guard suffix only holds identifier characters
pub fn validate_suffix(suffix: &str) -> Result<()> {
    if suffix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        Ok(())
    } else {
        Err(AmalgamateError::InvalidGuardSuffix(suffix.to_string()))
    }
}

/// Builds guard tokens for a run and rejects duplicates
#[derive(Debug, Clone)]
pub struct GuardRegistry {
    style: GuardStyle,
    suffix: String,
    /// Guard token -> source that claimed it first
    claimed: HashMap<String, PathBuf>,
}

impl GuardRegistry {
    pub fn new(style: GuardStyle, suffix: impl Into<String>) -> Result<Self> {
        let suffix = suffix.into();
        validate_suffix(&suffix)?;
        Ok(Self {
            style,
            suffix,
            claimed: HashMap::new(),
        })
    }

    /// Guard token for a path, without claiming it
    pub fn guard_for(&self, path: &Path) -> String {
        let mut guard = self.style.canonicalize(&guard_stem(path));
        guard.push_str(&self.suffix);
        guard
    }

    /// Derive and claim the guard for `path`
    pub fn claim(&mut self, path: &Path) -> Result<String> {
        let guard = self.guard_for(path);
        if let Some(first) = self.claimed.get(&guard) {
            return Err(AmalgamateError::GuardCollision {
                guard,
                first: first.clone(),
                second: path.to_path_buf(),
            });
        }
        self.claimed.insert(guard.clone(), path.to_path_buf());
        Ok(guard)
    }
}
