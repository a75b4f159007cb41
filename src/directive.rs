//! Line-level directive filtering
//!
//! Two directive shapes are removed from each source body:
//! - quoted includes (`#include "Vertex.h"`), which point at files that are
//!   already part of the amalgamation
//! - once-pragmas (`#pragma once`), replaced by the generated guards
//!
//! Matching is a plain substring scan per line. Block comments, string
//! literals and line continuations are not understood, so a line such as
//! `// see #include "x.h"` is dropped like a real directive.

/// Marker for a local, quoted include
pub const QUOTED_INCLUDE: &str = "#include \"";

/// Marker for a compile-once pragma
pub const ONCE_PRAGMA: &str = "#pragma once";

/// Classification of a single source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `#include "..."`, dropped
    QuotedInclude,
    /// `#pragma once`, dropped
    OncePragma,
    /// Everything else, including `#include <...>`
    Passthrough,
}

/// Classify a line by scanning for directive markers
pub fn classify(line: &str) -> LineKind {
    if line.contains(ONCE_PRAGMA) {
        LineKind::OncePragma
    } else if line.contains(QUOTED_INCLUDE) {
        LineKind::QuotedInclude
    } else {
        LineKind::Passthrough
    }
}

/// Body text after filtering, plus what was removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredBody {
    /// Kept lines with their original terminators; always ends with `\n`
    /// unless empty
    pub text: String,
    pub lines_kept: usize,
    pub quoted_includes_dropped: usize,
    pub pragmas_dropped: usize,
}

/// Filter a whole source body line by line
pub fn filter_body(source: &str) -> FilteredBody {
    let mut body = FilteredBody {
        text: String::with_capacity(source.len()),
        ..FilteredBody::default()
    };

    for line in source.split_inclusive('\n') {
        match classify(line) {
            LineKind::QuotedInclude => body.quoted_includes_dropped += 1,
            LineKind::OncePragma => body.pragmas_dropped += 1,
            LineKind::Passthrough => {
                body.text.push_str(line);
                body.lines_kept += 1;
            }
        }
    }

    if !body.text.is_empty() && !body.text.ends_with('\n') {
        body.text.push('\n');
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_quoted_include() {
        assert_eq!(classify("#include \"Vertex.h\"\n"), LineKind::QuotedInclude);
        assert_eq!(classify("  #include \"../Utils/Math.h\""), LineKind::QuotedInclude);
    }

    #[test]
    fn test_classify_angle_include_passes() {
        assert_eq!(classify("#include <vector>\n"), LineKind::Passthrough);
        assert_eq!(classify("#include <assert.h>"), LineKind::Passthrough);
    }

    #[test]
    fn test_classify_pragma_once() {
        assert_eq!(classify("#pragma once\n"), LineKind::OncePragma);
        assert_eq!(classify("\t#pragma once // guard\r\n"), LineKind::OncePragma);
    }

    #[test]
    fn test_classify_other_pragmas_pass() {
        assert_eq!(classify("#pragma pack(push, 1)"), LineKind::Passthrough);
        assert_eq!(classify("int a;"), LineKind::Passthrough);
    }

    #[test]
    fn test_directive_in_comment_is_still_dropped() {
        // Textual matching does not know about comments
        assert_eq!(classify("// #include \"old.h\""), LineKind::QuotedInclude);
    }

    #[test]
    fn test_include_with_extra_space_is_kept() {
        // Only the exact marker is recognized
        assert_eq!(classify("#  include \"x.h\""), LineKind::Passthrough);
    }

    #[test]
    fn test_filter_body_example() {
        let body = filter_body("#pragma once\n#include \"B.h\"\n#include <vector>\nint a;\n");
        assert_eq!(body.text, "#include <vector>\nint a;\n");
        assert_eq!(body.lines_kept, 2);
        assert_eq!(body.quoted_includes_dropped, 1);
        assert_eq!(body.pragmas_dropped, 1);
    }

    #[test]
    fn test_filter_body_preserves_crlf() {
        let body = filter_body("#pragma once\r\nint a;\r\n");
        assert_eq!(body.text, "int a;\r\n");
    }

    #[test]
    fn test_filter_body_terminates_last_line() {
        let body = filter_body("int a;\nint b;");
        assert_eq!(body.text, "int a;\nint b;\n");
        assert_eq!(body.lines_kept, 2);
    }

    #[test]
    fn test_filter_body_empty() {
        assert_eq!(filter_body(""), FilteredBody::default());
        assert_eq!(filter_body("#pragma once\n").text, "");
    }

    #[test]
    fn test_filter_body_keeps_blank_lines() {
        let body = filter_body("\n\nint x;\n");
        assert_eq!(body.text, "\n\nint x;\n");
        assert_eq!(body.lines_kept, 3);
    }
}
