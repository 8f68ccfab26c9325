//! RST detection and line-driving conversion to Markdown.
//!
//!     [`looks_like_rst`] is a cheap, order-independent heuristic deciding
//!     whether a docstring body uses RST markup at all. False positives are
//!     fine: they route text into the converter, which degrades unmatched
//!     constructs to literal text. Section underlines must match the section
//!     name length exactly so short names don't produce false negatives.
//!
//!     [`rst_to_markdown`] scans the input line by line with two states: no
//!     active block, or one active [`BlockParser`]. Ordinary lines collect in
//!     a plain-text buffer that is flushed through the directive and section
//!     tables whenever a block closes and once at the end. Covered input
//!     shapes:
//!
//!     - doctest blocks (highlighted code, unhighlighted output)
//!     - blocks introduced by a trailing `::`, production lists, explicit
//!       code-block directives, math blocks
//!     - NumPy-style list items and dash-underlined section headings
//!     - inline external links and the single-line directive subset
//!
//!     This intentionally covers common docstring patterns, not the full RST
//!     grammar.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::blocks::{BlockKind, BlockParser};
use crate::directives::{
    section_underline, HIGHLIGHT_PATTERN, NBSP_INDENT, RST_DIRECTIVES, RST_SECTIONS,
};

/// Matches `text::` or `text ::` block introducers, but not bare `::` or
/// `:::` lines.
static BLOCK_INTRODUCER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\s|\w)::\n").unwrap());

/// NumPy-style list item: `name : description`, with no colon inside `name`.
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<argument>[^: ]+) : (?P<type>.+)$").unwrap());

/// Heuristic check for whether `value` contains RST markup.
pub fn looks_like_rst(value: &str) -> bool {
    // any characteristic section with a properly sized underline
    for section in RST_SECTIONS {
        let heading = format!("{}\n{}\n", section, section_underline(section));
        if value.contains(&heading) {
            return true;
        }
    }
    if RST_DIRECTIVES
        .iter()
        .any(|directive| directive.pattern.is_match(value))
    {
        return true;
    }
    BLOCK_INTRODUCER.is_match(value) || value.contains("\n>>> ")
}

/// Apply the directive table, section heading rewriting and indent
/// normalization to the joined plain-text buffer, clearing the buffer.
fn flush_plain_text(buffer: &mut Vec<String>) -> String {
    let mut lines = buffer.join("\n");
    for directive in RST_DIRECTIVES.iter() {
        lines = directive
            .pattern
            .replace_all(&lines, directive.replacement)
            .into_owned();
    }
    for section in RST_SECTIONS {
        let heading = format!("\n{}\n{}", section, section_underline(section));
        lines = lines.replace(&heading, &format!("\n#### {section}\n"));
    }
    lines = lines.replace(NBSP_INDENT, "    ");
    buffer.clear();
    lines
}

/// Convert a docstring using the partial RST subset to Markdown.
///
/// The default fence language is `python`; a `.. highlight::` directive
/// switches it for subsequent blocks. All converter state is local to the
/// call, so concurrent conversions never interact.
pub fn rst_to_markdown(text: &str) -> String {
    let mut language = String::from("python");
    let mut markdown = String::new();
    let mut active_parser: Option<BlockParser> = None;
    let mut lines_buffer: Vec<String> = Vec::new();

    for raw_line in text.split('\n') {
        let mut line = raw_line.to_string();
        let trimmed_line = raw_line.trim_start();

        if let Some(mut parser) = active_parser.take() {
            if parser.can_consume(&line) {
                parser.consume(&line);
                active_parser = Some(parser);
            } else {
                markdown.push_str(&flush_plain_text(&mut lines_buffer));
                markdown.push_str(&parser.finish(false));
                if let Some(kind) = parser.follower() {
                    // the line that closed the prompt block opens its output
                    let mut follower = BlockParser::new(kind);
                    follower.initiate(&line, &language);
                    active_parser = Some(follower);
                }
            }
        }

        if active_parser.is_none() {
            // not inside a block; maybe this line starts one
            for kind in BlockKind::PRIORITY {
                if kind.can_parse(&line) {
                    let mut parser = BlockParser::new(kind);
                    line = parser.initiate(&line, &language);
                    active_parser = Some(parser);
                    break;
                }
            }

            // list item detection (whole line is rewritten, indentation dropped)
            if let Some(captures) = LIST_ITEM.captures(trimmed_line) {
                line = format!("- `{}`: {}", &captures["argument"], &captures["type"]);
            }

            // change the highlight language if requested; the directive sits
            // on a line of its own, so this cannot conflict with the block
            // parsers probed above
            if let Some(captures) = HIGHLIGHT_PATTERN.captures(&line) {
                let requested = captures["language"].trim().to_string();
                if !requested.is_empty() {
                    language = requested;
                }
            }

            lines_buffer.push(line);
        }
    }

    markdown.push_str(&flush_plain_text(&mut lines_buffer));
    // close off the block still open at end of input
    if let Some(mut parser) = active_parser {
        markdown.push_str(&parser.finish(true));
    }
    markdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Parameters")]
    #[case("Returns")]
    #[case("See Also")]
    #[case("Examples")]
    #[case("Attributes")]
    #[case("Notes")]
    #[case("References")]
    fn section_heading_round_trip(#[case] section: &str) {
        let input = format!("\n{}\n{}\n", section, section_underline(section));
        let expected = format!("\n#### {section}\n\n");
        assert_eq!(rst_to_markdown(&input), expected);
    }

    #[test]
    fn recognises_rst() {
        assert!(looks_like_rst("the following code ::\n\n\tcode"));
        assert!(looks_like_rst("the following code::\n\n\tcode"));
        assert!(looks_like_rst("See Also\n--------\n"));
        assert!(looks_like_rst("text\n>>> print('a')"));
        assert!(looks_like_rst(".. versionadded:: 1.0"));
    }

    #[test]
    fn ignores_plain_text() {
        assert!(!looks_like_rst("this is plain text"));
        assert!(!looks_like_rst("this might be **markdown**"));
        assert!(!looks_like_rst("::::::\n\n\tcode"));
        assert!(!looks_like_rst("::"));
        assert!(!looks_like_rst("See Also: Interesting Topic"));
    }

    #[test]
    fn underline_length_must_match_exactly() {
        assert!(!looks_like_rst("Notes\n----\n"));
        assert!(!looks_like_rst("Notes\n------\n"));
        assert!(looks_like_rst("Notes\n-----\n"));
    }

    #[test]
    fn list_items_are_rewritten() {
        assert_eq!(
            rst_to_markdown("start : str or datetime-like, optional"),
            "- `start`: str or datetime-like, optional"
        );
    }

    #[test]
    fn highlight_directive_is_invisible_and_switches_the_language() {
        let converted = rst_to_markdown(".. highlight:: R\n\nCode block ::\n\n   data.frame()\n");
        assert_eq!(converted, "\nCode block \n\n```R\ndata.frame()\n```\n");
    }

    #[test]
    fn block_open_at_end_of_input_is_still_closed() {
        let converted = rst_to_markdown(">>> x = 42\n>>> x = x + 1");
        assert_eq!(converted, "```python\nx = 42\nx = x + 1\n```\n");
    }

    #[test]
    fn plain_text_passes_through_the_flush_unchanged() {
        assert_eq!(rst_to_markdown("just some text\nover two lines"), "just some text\nover two lines");
    }
}
