//! Signature extraction from raw docstrings.
//!
//!     Many backends prepend one or more call signatures to the docstring
//!     body. This module splits the raw text into the signature run and the
//!     remaining body so the assembler can render signatures as code and the
//!     body as prose. Signatures must appear contiguously at the very top;
//!     only blank-line gaps are tolerated between them.

use serde::Serialize;

/// A raw docstring split into its leading call signatures and body.
///
/// `signatures` preserves source order, duplicates included. Continuation
/// lines of a wrapped signature are merged into the preceding entry with a
/// single separating space, not preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDocumentation {
    /// Call signatures found at the top of the docstring, in appearance order.
    pub signatures: Vec<String>,
    /// The remaining documentation body.
    pub body: String,
    /// Whether the raw text already contains fenced Markdown code, meaning
    /// the backend produced final markup and conversion should be skipped.
    pub is_markdown_like: bool,
}

/// Split `documentation` into signatures and body.
///
/// `expected_signature` is used only for its callable-name prefix (the text
/// before the first `(`); a line whose trimmed form starts with that prefix
/// is collected as a signature. Any input, including the empty string,
/// yields a valid result.
pub fn parse_documentation(
    documentation: &str,
    expected_signature: &str,
    language: &str,
) -> ParsedDocumentation {
    let signature_prefix = expected_signature.split('(').next().unwrap_or("");

    let mut signatures: Vec<String> = Vec::new();
    let mut body_lines: Vec<&str> = Vec::new();
    let mut look_for_signature = true;
    let mut body_started = false;

    for line in documentation.split('\n') {
        if look_for_signature {
            if language == crate::PYTHON {
                // pyls artifact: hundreds of numpy functions get a spurious
                // ufunc signature prepended; drop it unless ufunc itself is
                // being documented
                if signature_prefix != "ufunc" && line.trim().starts_with("ufunc(") {
                    continue;
                }
                // an indented line continues the signature wrapped above it
                if line.starts_with(|c: char| c.is_whitespace()) {
                    if let Some(last) = signatures.last_mut() {
                        last.push(' ');
                        last.push_str(line.trim());
                    }
                    continue;
                }
            }
            if line.trim().starts_with(signature_prefix) {
                signatures.push(line.trim().to_string());
                continue;
            }
            if !line.trim().is_empty() {
                // signatures appear in the first lines, with at most single
                // blank lines between them; the first unrelated non-blank
                // line ends the search for good
                look_for_signature = false;
            }
        }
        // skip blank lines prior to the body start
        if !body_started && !line.trim().is_empty() {
            body_started = true;
        }
        if body_started {
            body_lines.push(line);
        }
    }

    ParsedDocumentation {
        signatures,
        body: body_lines.join("\n"),
        is_markdown_like: documentation.contains("```\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_an_empty_result() {
        let parsed = parse_documentation("", "map()", "python");
        assert!(parsed.signatures.is_empty());
        assert_eq!(parsed.body, "");
        assert!(!parsed.is_markdown_like);
    }

    #[test]
    fn ufunc_artifact_is_skipped() {
        let parsed = parse_documentation(
            "ufunc(x, out=None)\nadd(x1, x2)\n\nAdd arguments element-wise.",
            "add()",
            "python",
        );
        assert_eq!(parsed.signatures, vec!["add(x1, x2)"]);
        assert_eq!(parsed.body, "Add arguments element-wise.");
    }

    #[test]
    fn ufunc_signatures_are_kept_when_documenting_ufunc() {
        let parsed = parse_documentation("ufunc(x, out=None)\n\nBase class.", "ufunc()", "python");
        assert_eq!(parsed.signatures, vec!["ufunc(x, out=None)"]);
    }

    #[test]
    fn continuation_without_a_prior_signature_is_dropped() {
        let parsed = parse_documentation("    stray indented line\nBody.", "map()", "python");
        assert!(parsed.signatures.is_empty());
        assert_eq!(parsed.body, "Body.");
    }

    #[test]
    fn continuation_merging_only_applies_to_python() {
        let parsed = parse_documentation(
            "plot(x, y)\n    extra, args\n\nDraw a plot.",
            "plot()",
            "r",
        );
        assert_eq!(parsed.signatures, vec!["plot(x, y)"]);
        // the indented line is not merged; it ends the signature run instead
        assert_eq!(parsed.body, "    extra, args\n\nDraw a plot.");
    }

    #[test]
    fn duplicate_signatures_are_preserved_in_order() {
        let parsed = parse_documentation("f(a)\nf(a)\n\nBody.", "f()", "python");
        assert_eq!(parsed.signatures, vec!["f(a)", "f(a)"]);
    }

    #[test]
    fn fenced_code_marks_the_text_as_markdown_like() {
        assert!(parse_documentation("```\ncode\n```\n", "f()", "python").is_markdown_like);
        assert!(!parse_documentation("has ``double backticks''", "f()", "python").is_markdown_like);
    }
}
