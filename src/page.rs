//! Fixed page template wrapping the rendered fragment.

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Page stylesheet, embedded so the output is self-contained.
const PAGE_CSS: &str = include_str!("../assets/page.css");

/// Wraps a rendered HTML fragment in the full page document.
///
/// Provides DOCTYPE, head metadata (charset, viewport, color scheme,
/// title, optional description, favicon, web fonts), the embedded
/// stylesheet, and the header chrome (badge plus home link). The fragment
/// is spliced in unescaped; the caller guarantees it is well-formed HTML.
///
/// # Arguments
///
/// * `title`: Page title, also shown in the header badge
/// * `description`: Optional description for head metadata
/// * `content_html`: Rendered markdown fragment
///
/// # Returns
///
/// Complete HTML document markup
pub fn render_page(title: &str, description: Option<&str>, content_html: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="color-scheme" content="light dark";
                title { (title) }
                @if let Some(desc) = description {
                    meta name="description" content=(desc);
                }
                link rel="icon" type="image/svg+xml" href="/favicon.svg";
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                link href="https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;700&family=JetBrains+Mono:wght@400&display=swap" rel="stylesheet";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main class="shell" {
                    div class="top" {
                        span class="badge" { (title) }
                        a class="home-link" href="/" { "Back to home" }
                    }
                    (PreEscaped(content_html))
                }
            }
        }
    }
}
