//! Inline syntax rendering for a single line of text.
//!
//! Substitutions are applied in a fixed order, each one operating on the
//! output of the previous: escape, links, code spans, bold, italic. The
//! order is load-bearing — escaping runs first so literal text cannot
//! inject markup, and italic runs after bold so a bold span's asterisks
//! are already consumed.

/// Escapes HTML metacharacters in literal text.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with their entities in a single
/// pass, so ampersands introduced by the replacements are never escaped
/// twice.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Renders inline markdown syntax to an HTML string.
///
/// Escapes the raw text, then rewrites `[text](url)` links, `` `code` ``
/// spans, `**bold**`, and `*italic*` in that order. Substitutions are
/// global, left to right, non-greedy, and non-recursive: nested emphasis
/// and links are not supported, and unmatched markers stay literal.
///
/// # Arguments
///
/// * `raw`: Raw markdown text for one line or joined paragraph
///
/// # Returns
///
/// HTML safe to embed in a block element
pub fn render_inline(raw: &str) -> String {
    let mut value = escape_html(raw);
    value = replace_links(&value);
    value = replace_span(&value, "`", "code");
    value = replace_span(&value, "**", "strong");
    value = replace_span(&value, "*", "em");
    value
}

/// Rewrites `[text](url)` occurrences as anchor elements.
///
/// Link text must be non-empty with no nested `]`; the URL must be
/// non-empty with no nested `)`. Both are emitted literally (the input is
/// already escaped). A `[` that does not start a well-formed link is left
/// in place and the scan resumes one character later.
fn replace_links(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('[') {
        match match_link(&rest[start..]) {
            Some((text, url, len)) => {
                out.push_str(&rest[..start]);
                out.push_str("<a href=\"");
                out.push_str(url);
                out.push_str("\">");
                out.push_str(text);
                out.push_str("</a>");
                rest = &rest[start + len..];
            }
            None => {
                // '[' is ASCII, so start + 1 is a char boundary
                out.push_str(&rest[..start + 1]);
                rest = &rest[start + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Matches a link at the start of `s` (which begins with `[`).
///
/// Returns the text, the URL, and the total byte length consumed.
fn match_link(s: &str) -> Option<(&str, &str, usize)> {
    let text_end = s.find(']')?;
    let text = &s[1..text_end];
    if text.is_empty() {
        return None;
    }

    let after_text = &s[text_end + 1..];
    if !after_text.starts_with('(') {
        return None;
    }

    let url_end = after_text.find(')')?;
    let url = &after_text[1..url_end];
    if url.is_empty() {
        return None;
    }

    Some((text, url, text_end + 1 + url_end + 1))
}

/// Rewrites spans delimited by `delim` as `<tag>content</tag>`.
///
/// Content must be non-empty and may not contain the delimiter character,
/// matching non-greedy single-line emphasis: the span closes at the first
/// delimiter run after the opener. An opener without a matching closer is
/// left literal and the scan resumes one character later.
fn replace_span(input: &str, delim: &str, tag: &str) -> String {
    let marker = delim.as_bytes()[0] as char;
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find(delim) {
        let after_open = &rest[start + delim.len()..];

        match after_open.find(marker) {
            Some(end) if end > 0 && after_open[end..].starts_with(delim) => {
                out.push_str(&rest[..start]);
                out.push('<');
                out.push_str(tag);
                out.push('>');
                out.push_str(&after_open[..end]);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
                rest = &after_open[end + delim.len()..];
            }
            _ => {
                out.push_str(&rest[..start + 1]);
                rest = &rest[start + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}
