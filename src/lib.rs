//! Static HTML page generation from a single Markdown document.

mod config;
mod generator;
mod markdown;
mod page;

pub use config::Config;
pub use generator::generate;
pub use markdown::{escape_html, render_inline, render_markdown};
pub use page::render_page;
