//! Single-header amalgamation
//!
//! Concatenates an ordered list of headers into one output, wrapping each
//! body in its own include guard:
//!
//! ```text
//! #ifndef <GUARD>
//! #define <GUARD>
//! <filtered body>
//!
//! #endif
//! ```
//!
//! The source order is taken as given. It must already be a valid
//! dependency order (every header after the headers it includes); the
//! amalgamator never reorders, deduplicates or resolves includes itself.

use crate::directive::filter_body;
use crate::error::{AmalgamateError, Result};
use crate::guard::{GuardRegistry, GuardStyle, DEFAULT_GUARD_SUFFIX};
use crate::report::{FileReport, Report};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Output label used in errors when writing to a stream
const STREAM_LABEL: &str = "-";

/// Guard settings for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmalgamateOptions {
    pub guard_style: GuardStyle,
    pub guard_suffix: String,
}

impl Default for AmalgamateOptions {
    fn default() -> Self {
        Self {
            guard_style: GuardStyle::default(),
            guard_suffix: DEFAULT_GUARD_SUFFIX.to_string(),
        }
    }
}

impl AmalgamateOptions {
    pub fn with_guard_style(mut self, style: GuardStyle) -> Self {
        self.guard_style = style;
        self
    }

    pub fn with_guard_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.guard_suffix = suffix.into();
        self
    }
}

/// Lifecycle of an amalgamator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Not started
    Idle,
    /// Emitting the source at `index`
    Processing { index: usize },
    /// Output written and flushed
    Done,
    /// Aborted; terminal
    Failed,
}

/// One-shot amalgamation pass over an ordered source list
#[derive(Debug, Clone)]
pub struct Amalgamator {
    sources: Vec<PathBuf>,
    options: AmalgamateOptions,
    state: RunState,
}

impl Amalgamator {
    pub fn new<I, P>(sources: I, options: AmalgamateOptions) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
            options,
            state: RunState::Idle,
        }
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn options(&self) -> &AmalgamateOptions {
        &self.options
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Amalgamate into `output`, truncating any existing content
    ///
    /// The file handle is flushed on success and released on every error
    /// path. After a failure the file content is undefined.
    pub fn write_file(&mut self, output: &Path) -> Result<Report> {
        let mut report = self.run(|this| {
            let file = File::create(output).map_err(|source| AmalgamateError::OutputWrite {
                path: output.to_path_buf(),
                source,
            })?;
            let mut writer = BufWriter::new(file);
            this.emit_all(&mut writer, output)
        })?;
        report.output = Some(output.to_path_buf());
        Ok(report)
    }

    /// Amalgamate into an arbitrary writer (stdout, an in-memory buffer)
    ///
    /// Write failures name the output as `-`.
    pub fn write_to<W: Write>(&mut self, out: &mut W) -> Result<Report> {
        self.run(|this| this.emit_all(out, Path::new(STREAM_LABEL)))
    }

    fn run<F>(&mut self, body: F) -> Result<Report>
    where
        F: FnOnce(&mut Self) -> Result<Report>,
    {
        if self.state != RunState::Idle {
            return Err(AmalgamateError::AlreadyRun);
        }

        let result = if self.sources.is_empty() {
            Err(AmalgamateError::EmptySourceList)
        } else {
            body(self)
        };

        self.state = match &result {
            Ok(_) => RunState::Done,
            Err(e) => {
                warn!("Amalgamation failed: {}", e);
                RunState::Failed
            }
        };
        result
    }

    fn emit_all<W: Write>(&mut self, out: &mut W, output: &Path) -> Result<Report> {
        let write_err = |source| AmalgamateError::OutputWrite {
            path: output.to_path_buf(),
            source,
        };

        let mut guards =
            GuardRegistry::new(self.options.guard_style, self.options.guard_suffix.as_str())?;
        let mut report = Report::default();

        for index in 0..self.sources.len() {
            self.state = RunState::Processing { index };
            let source = &self.sources[index];

            let text = fs::read_to_string(source).map_err(|e| AmalgamateError::SourceRead {
                path: source.clone(),
                source: e,
            })?;
            let guard = guards.claim(source)?;
            let body = filter_body(&text);

            debug!(
                "{} -> {} ({} kept, {} includes dropped, {} pragmas dropped)",
                source.display(),
                guard,
                body.lines_kept,
                body.quoted_includes_dropped,
                body.pragmas_dropped
            );

            write!(
                out,
                "#ifndef {guard}\n#define {guard}\n{}\n#endif\n",
                body.text
            )
            .map_err(write_err)?;

            report.files.push(FileReport {
                source: source.clone(),
                guard,
                lines_kept: body.lines_kept,
                quoted_includes_dropped: body.quoted_includes_dropped,
                pragmas_dropped: body.pragmas_dropped,
            });
        }

        out.flush().map_err(write_err)?;
        Ok(report)
    }
}

/// Amalgamate `sources` into `output` with the default guard settings
pub fn amalgamate<P: AsRef<Path>>(sources: &[P], output: &Path) -> Result<Report> {
    let paths = sources.iter().map(|p| p.as_ref().to_path_buf());
    Amalgamator::new(paths, AmalgamateOptions::default()).write_file(output)
}
