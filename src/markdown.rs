//! Hand-written markdown rendering for a constrained syntax subset.
//!
//! Supports headings, paragraphs, flat unordered lists, fenced code
//! blocks, and the inline syntax for links, code spans, bold, and italic.
//! Tables, nested lists, blockquotes, reference links, footnotes, and raw
//! HTML passthrough are unsupported by design.
//!
//! - [`inline`]: escaping and inline substitutions for a single line
//! - [`renderer`]: line-by-line block scan producing the HTML fragment
//!
//! Both are pure text-to-text transforms with no I/O and no state shared
//! across calls.

mod inline;
mod renderer;

pub use inline::{escape_html, render_inline};
pub use renderer::render_markdown;
