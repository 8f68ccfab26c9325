//! Property-based robustness tests.
//!
//! The conversion API is total: any input, well-formed or not, must produce
//! a result without panicking, and text that carries no markup at all must
//! survive conversion unchanged.

use hoverdoc::{looks_like_rst, parse_documentation, rst_to_markdown, string_to_markdown, DisplayOptions};
use proptest::prelude::*;

/// Multi-line printable ASCII, including the markup metacharacters.
fn docstring_strategy() -> impl Strategy<Value = String> {
    "[ -~\n]{0,300}"
}

/// Multi-line text with no markup metacharacters: no colons, dots, dashes,
/// backticks or prompt markers, so neither the directive table nor any
/// block parser can trigger.
fn plain_text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 \n]{0,300}"
}

proptest! {
    #[test]
    fn conversion_never_panics(text in docstring_strategy()) {
        let _ = rst_to_markdown(&text);
    }

    #[test]
    fn detection_never_panics(text in docstring_strategy()) {
        let _ = looks_like_rst(&text);
    }

    #[test]
    fn extraction_never_panics(
        text in docstring_strategy(),
        signature in "[ -~]{0,40}",
        language in "[a-z]{0,8}",
    ) {
        let _ = parse_documentation(&text, &signature, &language);
    }

    #[test]
    fn assembly_never_panics(
        text in docstring_strategy(),
        signature in "[ -~]{0,40}",
        language in "[a-z]{0,8}",
        skip_signatures in any::<bool>(),
        collapse_signatures in any::<bool>(),
    ) {
        let options = DisplayOptions { skip_signatures, collapse_signatures };
        let _ = string_to_markdown(&text, &language, &signature, &options);
    }

    #[test]
    fn markup_free_text_converts_to_itself(text in plain_text_strategy()) {
        prop_assert_eq!(rst_to_markdown(&text), text);
    }

    #[test]
    fn assembled_output_contains_the_body_of_plain_docstrings(
        // starts non-blank so the line cannot look like a wrapped signature
        body in "[a-zA-Z0-9][a-zA-Z0-9 ]{0,79}",
    ) {
        // a body with no signatures and no markup is wrapped, never dropped
        let rendered = string_to_markdown(&body, "python", "zzz()", &DisplayOptions::default());
        prop_assert!(rendered.contains(body.trim_end()));
    }
}
