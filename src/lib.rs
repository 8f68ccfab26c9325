//! # hoverdoc
//!
//!     Renders hover and completion documentation returned by a language analysis
//!     backend into normalized Markdown. Backends emit inconsistent text: plain
//!     prose, reStructuredText of varying discipline, or already-formatted
//!     Markdown. This crate folds all of them into one display dialect so a
//!     tooltip or panel can render the result verbatim.
//!
//!     This is a pure lib: no I/O, no editor integration, no UI. The host shell
//!     (plugin lifecycle, panels, adapters) lives elsewhere and only calls the
//!     functions re-exported from this root.
//!
//! Pipeline
//!
//!     raw docstring
//!         → [signatures::parse_documentation]   split off leading call signatures
//!         → [display::string_to_markdown]       pass through / assemble
//!         → [rst::looks_like_rst]               gate the converter
//!         → [rst::rst_to_markdown]              line-driven RST → Markdown
//!
//!     The converter is deliberately partial: it covers the docstring patterns
//!     that dominate real backends (doctest blocks, `::` blocks, directive lines,
//!     NumPy sections) and degrades everything else to preformatted text. It is
//!     not, and does not try to be, an RST implementation.
//!
//! The file structure :
//!     .
//!     ├── directives.rs       # Static rewrite tables (directive + section rules)
//!     ├── blocks.rs           # Block parsers (code/math/example state machines)
//!     ├── rst.rs              # Detector and line-driving converter
//!     ├── signatures.rs       # Signature extraction from raw docstrings
//!     ├── display.rs          # Top-level display assembly
//!     └── lib.rs
//!
//! Re-entrancy
//!
//!     All per-call state (block parser buffers, the active-parser slot, the
//!     current highlight language) is constructed inside each call. The only
//!     shared data are the lazily-built rewrite tables, which are immutable
//!     after initialization and safe for unsynchronized concurrent reads.

pub mod blocks;
pub mod directives;
pub mod display;
pub mod rst;
pub mod signatures;

pub use display::{string_to_markdown, wrap_code, DisplayOptions};
pub use rst::{looks_like_rst, rst_to_markdown};
pub use signatures::{parse_documentation, ParsedDocumentation};

/// Language tag for which the Python-specific heuristics apply
/// (signature continuation merging, the ufunc workaround, RST detection).
pub(crate) const PYTHON: &str = "python";
