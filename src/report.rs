//! Run summary for an amalgamation pass
//!
//! Printed as text on stderr, or as JSON on stdout with `--report json`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// What happened to one source header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Source path as given by the caller
    pub source: PathBuf,
    /// Guard token wrapped around the body
    pub guard: String,
    /// Body lines copied to the output
    pub lines_kept: usize,
    /// `#include "..."` lines removed
    pub quoted_includes_dropped: usize,
    /// `#pragma once` lines removed
    pub pragmas_dropped: usize,
}

/// Summary of a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Output path, `None` when written to an arbitrary writer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Per-source entries in emission order
    pub files: Vec<FileReport>,
}

impl Report {
    pub fn total_lines_kept(&self) -> usize {
        self.files.iter().map(|f| f.lines_kept).sum()
    }

    pub fn total_dropped(&self) -> usize {
        self.files
            .iter()
            .map(|f| f.quoted_includes_dropped + f.pragmas_dropped)
            .sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for file in &self.files {
            writeln!(
                f,
                "{:<24} {} ({} lines, -{} includes, -{} pragmas)",
                file.guard,
                file.source.display(),
                file.lines_kept,
                file.quoted_includes_dropped,
                file.pragmas_dropped
            )?;
        }
        let target = self
            .output
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<stream>".to_string());
        write!(
            f,
            "{} headers -> {} ({} lines kept, {} directives dropped)",
            self.files.len(),
            target,
            self.total_lines_kept(),
            self.total_dropped()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report {
            output: Some(PathBuf::from("out.h")),
            files: vec![
                FileReport {
                    source: PathBuf::from("A.h"),
                    guard: "A_IMPL_H".to_string(),
                    lines_kept: 2,
                    quoted_includes_dropped: 1,
                    pragmas_dropped: 1,
                },
                FileReport {
                    source: PathBuf::from("B.h"),
                    guard: "B_IMPL_H".to_string(),
                    lines_kept: 1,
                    quoted_includes_dropped: 0,
                    pragmas_dropped: 1,
                },
            ],
        }
    }

    #[test]
    fn test_totals() {
        let report = sample();
        assert_eq!(report.total_lines_kept(), 3);
        assert_eq!(report.total_dropped(), 3);
    }

    #[test]
    fn test_json_fields() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["output"], "out.h");
        assert_eq!(value["files"][0]["guard"], "A_IMPL_H");
        assert_eq!(value["files"][1]["pragmas_dropped"], 1);
    }

    #[test]
    fn test_json_omits_missing_output() {
        let report = Report {
            output: None,
            ..sample()
        };
        let json = report.to_json().unwrap();
        assert!(!json.contains("\"output\""));
    }

    #[test]
    fn test_display_summary_line() {
        let text = sample().to_string();
        assert!(text.contains("A_IMPL_H"));
        assert!(text.contains("2 headers -> out.h (3 lines kept, 3 directives dropped)"));
    }
}
