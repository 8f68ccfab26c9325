//! Static rewrite tables for the RST subset.
//!
//!     Two tables drive all single-line and paragraph-level rewriting:
//!
//!     1. The directive table: ordered (pattern, replacement) rules for
//!        version notes, warnings, cross-references, links, module
//!        references, inline math and the two block-introducing directives.
//!     2. The section table: the recognized NumPy-style section names and
//!        their dash-underlined heading form.
//!
//!     Both are process-wide statics built once via `once_cell::sync::Lazy`.
//!     The converter applies every directive rule in table order to the same
//!     flushed text buffer, so the order is part of the semantics: a rule's
//!     output must not be re-matched by a later rule. Do not reorder entries
//!     without re-running the conversion tests.

use once_cell::sync::Lazy;
use regex::Regex;

/// A single-line or paragraph-level rewrite rule.
pub struct Directive {
    /// Pattern with named capture groups.
    pub pattern: Regex,
    /// Replacement template referencing captures as `${name}`.
    pub replacement: &'static str,
    /// Identifier for rules that the converter also consults directly.
    pub name: Option<&'static str>,
}

// The block-introducing rules are consulted on their own by the converter
// (highlight switches the fence language, code-block starts a block parser),
// so their sources are shared between the table and the standalone patterns.
const HIGHLIGHT_RULE: &str = r"\.\. highlight:: (?P<language>.+)(?P<end>$|\n)";
const CODE_BLOCK_RULE: &str = r"\.\. (code-block|productionlist)::(?P<language>.*)(?P<end>$|\n)";

/// The directive table, in application order.
pub static RST_DIRECTIVES: Lazy<Vec<Directive>> = Lazy::new(|| {
    vec![
        Directive {
            pattern: Regex::new(r"\.\. versionchanged:: (?P<version>\S+)(?P<end>$|\n)").unwrap(),
            replacement: "*Changed in ${version}*${end}",
            name: None,
        },
        Directive {
            pattern: Regex::new(r"\.\. versionadded:: (?P<version>\S+)(?P<end>$|\n)").unwrap(),
            replacement: "*Added in ${version}*${end}",
            name: None,
        },
        Directive {
            pattern: Regex::new(r"\.\. deprecated:: (?P<version>\S+)(?P<end>$|\n)").unwrap(),
            replacement: "*Deprecated since ${version}*${end}",
            name: None,
        },
        Directive {
            pattern: Regex::new(r"\.\. warning::").unwrap(),
            replacement: "**Warning**",
            name: None,
        },
        Directive {
            pattern: Regex::new(r"\.\. seealso::(?P<short_form>.*)(?P<end>$|\n)").unwrap(),
            replacement: "*See also*${short_form}${end}",
            name: None,
        },
        Directive {
            pattern: Regex::new(r":ref:`(?P<label>[^<`]+?)\s*<(?P<ref>[^>`]+?)>`").unwrap(),
            replacement: "${label}: `${ref}`",
            name: None,
        },
        Directive {
            pattern: Regex::new(r"`(?P<label>[^<`]+?)(\n?)<(?P<url>[^>`]+)>`_+").unwrap(),
            replacement: "[${label}](${url})",
            name: None,
        },
        Directive {
            pattern: Regex::new(r":mod:`(?P<label>[^`]+)`").unwrap(),
            replacement: "`${label}`",
            name: None,
        },
        Directive {
            pattern: Regex::new(r"\.\. currentmodule:: (?P<module>.+)(?P<end>$|\n)").unwrap(),
            replacement: "",
            name: None,
        },
        Directive {
            // `$$` is an escaped dollar in the template; this yields ${latex}$
            pattern: Regex::new(r":math:`(?P<latex>[^`]+?)`").unwrap(),
            replacement: "$$${latex}$$",
            name: None,
        },
        Directive {
            pattern: Regex::new(HIGHLIGHT_RULE).unwrap(),
            replacement: "",
            name: Some("highlight"),
        },
        Directive {
            pattern: Regex::new(CODE_BLOCK_RULE).unwrap(),
            replacement: "${end}",
            name: Some("code-block"),
        },
    ]
});

/// Standalone copy of the highlight rule for the converter's per-line check.
pub(crate) static HIGHLIGHT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(HIGHLIGHT_RULE).unwrap());

/// Standalone copy of the code-block rule for block-parser recognition.
pub(crate) static CODE_BLOCK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(CODE_BLOCK_RULE).unwrap());

/// Section names rewritten to headings when dash-underlined.
pub const RST_SECTIONS: [&str; 7] = [
    "Parameters",
    "Returns",
    "See Also",
    "Examples",
    "Attributes",
    "Notes",
    "References",
];

/// The dash underline matching a section name's length.
pub(crate) fn section_underline(section: &str) -> String {
    "-".repeat(section.len())
}

// Some backends indent with non-breaking spaces; normalized during flush.
pub(crate) const NBSP_INDENT: &str = "\u{a0}\u{a0}\u{a0}\u{a0}";
