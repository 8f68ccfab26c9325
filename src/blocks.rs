//! Block parsers for multi-line embedded blocks.
//!
//!     Five cooperating state machines, each owning recognition, buffering and
//!     closing of one block kind found inside docstrings: interactive-prompt
//!     code, the output that follows it, `::`-introduced blocks, explicit
//!     code-block directives, and math blocks.
//!
//!     A parser is a [`BlockKind`] tag plus one [`BlockParser`] state value.
//!     The converter holds at most one active parser at a time and constructs
//!     a fresh one per block, so nothing here is shared across conversion
//!     calls. The only inter-parser relation is the follower edge: a finished
//!     prompt block hands the terminating line to an output block.
//!
//!     Consuming a line on a parser whose block was never initiated is a
//!     contract violation and panics; it indicates a converter bug, not bad
//!     input.

use crate::directives::CODE_BLOCK_PATTERN;

const MARKDOWN_FENCE: &str = "```";
const MATH_FENCE: &str = "$$";

/// The block kinds recognized inside docstrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `>>> `-prefixed interactive session code.
    PythonPrompt,
    /// Output lines immediately following a prompt block. Never
    /// self-initiates; entered only as the follower of [`PythonPrompt`].
    ///
    /// [`PythonPrompt`]: BlockKind::PythonPrompt
    PythonOutput,
    /// `.. math::` blocks, fenced with double dollars.
    Math,
    /// `.. code-block::` / `.. productionlist::` directive blocks.
    ExplicitCode,
    /// Indented blocks introduced by a trailing `::`.
    DoubleColon,
}

impl BlockKind {
    /// Kinds the converter probes when no block is active, in priority order.
    /// `.. math::` ends in `::`, so math must be probed before double-colon.
    pub const PRIORITY: [BlockKind; 4] = [
        BlockKind::PythonPrompt,
        BlockKind::Math,
        BlockKind::ExplicitCode,
        BlockKind::DoubleColon,
    ];

    /// Whether `line` starts a block of this kind.
    pub fn can_parse(self, line: &str) -> bool {
        match self {
            Self::PythonPrompt => line.starts_with(">>>"),
            Self::PythonOutput => false,
            Self::Math => line.trim() == ".. math::",
            Self::ExplicitCode => CODE_BLOCK_PATTERN.is_match(line),
            // Python prose uses ` ::` but NumPy docstrings use a bare `::`
            Self::DoubleColon => line.trim_end().ends_with("::"),
        }
    }

    /// The block hand-off target, if any.
    pub fn follower(self) -> Option<BlockKind> {
        match self {
            Self::PythonPrompt => Some(Self::PythonOutput),
            _ => None,
        }
    }

    fn fence(self) -> &'static str {
        if matches!(self, Self::Math) {
            MATH_FENCE
        } else {
            MARKDOWN_FENCE
        }
    }

    /// Whether block content is delimited by indentation rather than by
    /// line prefixes.
    fn indent_delimited(self) -> bool {
        matches!(self, Self::Math | Self::ExplicitCode | Self::DoubleColon)
    }
}

/// Per-block buffering state. Fresh per block; never reused across calls.
#[derive(Debug)]
pub struct BlockParser {
    kind: BlockKind,
    buffer: Vec<String>,
    block_started: bool,
    // indent-delimited kinds only
    is_block_beginning: bool,
    block_indent_size: Option<usize>,
}

impl BlockParser {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            buffer: Vec::new(),
            block_started: false,
            is_block_beginning: false,
            block_indent_size: None,
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn follower(&self) -> Option<BlockKind> {
        self.kind.follower()
    }

    fn start_block(&mut self, language: &str) {
        self.buffer.push(format!("{}{}", self.kind.fence(), language));
        self.block_started = true;
        self.block_indent_size = None;
        self.is_block_beginning = true;
    }

    /// Open the block for its first line. Returns the remainder that still
    /// belongs to the surrounding text (e.g. prose preceding a trailing `::`)
    /// and should be buffered in place of the consumed line.
    pub fn initiate(&mut self, line: &str, current_language: &str) -> String {
        match self.kind {
            BlockKind::PythonPrompt => {
                self.start_block("python");
                self.consume(line);
                String::new()
            }
            BlockKind::PythonOutput => {
                self.start_block("");
                self.consume(line);
                String::new()
            }
            BlockKind::Math => {
                self.start_block("");
                String::new()
            }
            BlockKind::ExplicitCode => {
                let captures = CODE_BLOCK_PATTERN
                    .captures(line)
                    .expect("explicit code block initiated without a matching directive");
                let directive_language = captures["language"].trim().to_string();
                let language = if directive_language.is_empty() {
                    current_language
                } else {
                    &directive_language
                };
                self.start_block(language);
                String::new()
            }
            BlockKind::DoubleColon => {
                let (language, remainder) = if line.trim() == ".. autosummary::" {
                    // autosummary listings carry no code; drop the line and
                    // leave the fence unhighlighted
                    ("", "")
                } else {
                    (current_language, line.strip_suffix("::").unwrap_or(line))
                };
                self.start_block(language);
                format!("{remainder}\n\n")
            }
        }
    }

    /// Whether `line` still belongs to the open block.
    pub fn can_consume(&self, line: &str) -> bool {
        if self.kind.indent_delimited() {
            // blank lines between the introducer and the first content line
            // are tolerated without fixing the indent
            if self.is_block_beginning && line.trim().is_empty() {
                return true;
            }
            line.is_empty() || line.starts_with(|c: char| c.is_whitespace())
        } else {
            match self.kind {
                BlockKind::PythonPrompt => line.starts_with(">>>") || line.starts_with("..."),
                BlockKind::PythonOutput => !line.trim().is_empty() && !line.starts_with(">>>"),
                _ => unreachable!("indent-delimited kinds handled above"),
            }
        }
    }

    /// Buffer `line`, stripping the prompt or the established block indent.
    pub fn consume(&mut self, line: &str) {
        assert!(
            self.block_started,
            "block parser consumed a line before its block was initiated"
        );
        match self.kind {
            BlockKind::PythonPrompt => self.buffer.push(strip_prompt(line).to_string()),
            kind if kind.indent_delimited() => {
                if self.is_block_beginning {
                    self.is_block_beginning = false;
                    // skip a single leading blank line
                    if line.trim().is_empty() {
                        return;
                    }
                }
                let indent = *self
                    .block_indent_size
                    .get_or_insert_with(|| line.len() - line.trim_start().len());
                self.buffer.push(line.get(indent..).unwrap_or("").to_string());
            }
            _ => self.buffer.push(line.to_string()),
        }
    }

    /// Close the block and return its fenced text, resetting the state.
    /// Non-final blocks get a trailing blank line to separate them from the
    /// text that follows.
    pub fn finish(&mut self, is_final: bool) -> String {
        assert!(
            self.block_started,
            "block parser finished before its block was initiated"
        );
        // a trailing separator line left over from an indented block is dropped
        if self.buffer.last().is_some_and(|line| line.trim().is_empty()) {
            self.buffer.pop();
        }
        self.buffer.push(format!("{}\n", self.kind.fence()));
        let mut result = self.buffer.join("\n");
        if !is_final {
            result.push('\n');
        }
        self.buffer.clear();
        self.block_started = false;
        self.is_block_beginning = false;
        self.block_indent_size = None;
        result
    }
}

/// Strip the 3-character prompt, or 4 characters when a space follows it.
fn strip_prompt(line: &str) -> &str {
    let width = if line.starts_with(">>> ") || line.starts_with("... ") {
        4
    } else {
        3
    };
    line.get(width..).unwrap_or("")
}
