//! Top-level display assembly.
//!
//!     Combines the signature extractor, the RST detector and the converter
//!     into the final display string shown by the hover/completion UI. Text
//!     the backend already formatted as Markdown passes through unchanged;
//!     everything else is assembled from fenced signatures plus a converted
//!     or literally-wrapped body. Assembly never fails: the worst case for
//!     unrecognized input is plain preformatted rendering.

use serde::{Deserialize, Serialize};

use crate::rst::{looks_like_rst, rst_to_markdown};
use crate::signatures::parse_documentation;

/// Rendering knobs for [`string_to_markdown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Drop extracted signatures from the rendered output. Off by default.
    pub skip_signatures: bool,
    /// Render overload signatures past the first inside a collapsible
    /// "More signatures" element. On by default.
    pub collapse_signatures: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            skip_signatures: false,
            collapse_signatures: true,
        }
    }
}

/// Fence `code` as a Markdown code block, unhighlighted when `language` is
/// empty.
pub fn wrap_code(code: &str, language: &str) -> String {
    let newline = if code.ends_with('\n') { "" } else { "\n" };
    format!("```{language}\n{code}{newline}```\n")
}

/// Render raw backend documentation as Markdown.
///
/// A workaround for servers returning plain-text RST rather than Markdown:
/// proper conversion belongs upstream, and in the meantime this very simple
/// Python-docstring converter covers the gap. Guaranteed non-empty for
/// non-empty input; never an error.
pub fn string_to_markdown(
    text: &str,
    language: &str,
    signature: &str,
    options: &DisplayOptions,
) -> String {
    let documentation = parse_documentation(text, signature, language);

    // fenced code in the raw text means the server already produced Markdown
    // (though it forgot to label it as such); trust it and return as is
    if documentation.is_markdown_like {
        return text.to_string();
    }

    let mut markdown = String::new();

    if !options.skip_signatures {
        if language == crate::PYTHON
            && options.collapse_signatures
            && documentation.signatures.len() > 1
        {
            markdown.push_str(&wrap_code(&documentation.signatures[0], language));
            markdown.push_str("<details class=\"lsp-signatures\">\n<summary>More signatures</summary>\n\n");
            for overload in &documentation.signatures[1..] {
                markdown.push_str(&wrap_code(overload, language));
                markdown.push('\n');
            }
            markdown.push_str("\n</details>\n\n");
        } else {
            for overload in &documentation.signatures {
                markdown.push_str(&wrap_code(overload, language));
            }
        }
    }

    if language == crate::PYTHON && looks_like_rst(&documentation.body) {
        markdown.push_str(&rst_to_markdown(&documentation.body));
    } else {
        // escape the body as a preformatted block, without code highlighting
        markdown.push_str(&wrap_code(&documentation.body, ""));
    }

    markdown
}
