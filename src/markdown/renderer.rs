//! Block-level markdown rendering.
//!
//! Scans the document line by line and emits block elements: paragraphs,
//! headings, unordered lists, and fenced code blocks. Inline text is
//! delegated to [`render_inline`]; fenced code content is escaped but never
//! inline-rendered.

use super::inline::{escape_html, render_inline};

/// Scan state for the line classifier.
///
/// An explicit enum rather than separate booleans, so being inside a list
/// and inside a code block at the same time is unrepresentable. The
/// pending paragraph buffer lives outside the state and is only non-empty
/// while scanning in [`ScanState::Normal`].
enum ScanState {
    Normal,
    List,
    Code(Vec<String>),
}

/// Renders a markdown document to an HTML fragment.
///
/// Line endings are normalized (`\r\n` becomes `\n`) before splitting.
/// Each line is classified in priority order: fence marker, code content,
/// heading, list item, blank, paragraph text. Entering a new block type
/// first flushes or closes any open block of a different kind, so emission
/// order always matches scan order.
///
/// The function is total: any input, including empty text and malformed
/// syntax such as an unterminated fence, produces a fragment rather than
/// an error.
///
/// # Arguments
///
/// * `input`: Full markdown document text
///
/// # Returns
///
/// Block elements joined by newlines, with no document wrapper
pub fn render_markdown(input: &str) -> String {
    let normalized = input.replace("\r\n", "\n");
    let mut blocks: Vec<String> = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut state = ScanState::Normal;

    for line in normalized.split('\n') {
        if let ScanState::Code(code_lines) = &mut state {
            if line.starts_with("```") {
                let code = std::mem::take(code_lines);
                blocks.push(code_block(&code));
                state = ScanState::Normal;
            } else {
                code_lines.push(line.to_string());
            }
            continue;
        }

        if line.starts_with("```") {
            flush_paragraph(&mut paragraph, &mut blocks);
            close_list(&mut state, &mut blocks);
            state = ScanState::Code(Vec::new());
            continue;
        }

        if let Some((level, text)) = heading(line) {
            flush_paragraph(&mut paragraph, &mut blocks);
            close_list(&mut state, &mut blocks);
            blocks.push(format!(
                "<h{level}>{}</h{level}>",
                render_inline(text.trim())
            ));
            continue;
        }

        if let Some(text) = list_item(line) {
            flush_paragraph(&mut paragraph, &mut blocks);
            if !matches!(state, ScanState::List) {
                blocks.push("<ul>".to_string());
                state = ScanState::List;
            }
            blocks.push(format!("<li>{}</li>", render_inline(text.trim())));
            continue;
        }

        if line.trim().is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            close_list(&mut state, &mut blocks);
            continue;
        }

        close_list(&mut state, &mut blocks);
        paragraph.push(line.trim());
    }

    flush_paragraph(&mut paragraph, &mut blocks);
    close_list(&mut state, &mut blocks);
    if let ScanState::Code(code_lines) = &state {
        // Unterminated fence: emit everything seen since the opener
        blocks.push(code_block(code_lines));
    }

    blocks.join("\n")
}

/// Emits and clears the pending paragraph, if any.
///
/// Accumulated lines are joined with a single space, trimmed, and
/// inline-rendered; nothing is emitted when the joined text is empty.
fn flush_paragraph(paragraph: &mut Vec<&str>, blocks: &mut Vec<String>) {
    if paragraph.is_empty() {
        return;
    }

    let text = paragraph.join(" ");
    paragraph.clear();

    let text = text.trim();
    if !text.is_empty() {
        blocks.push(format!("<p>{}</p>", render_inline(text)));
    }
}

/// Closes an open list, returning the state to `Normal`.
fn close_list(state: &mut ScanState, blocks: &mut Vec<String>) {
    if matches!(state, ScanState::List) {
        blocks.push("</ul>".to_string());
        *state = ScanState::Normal;
    }
}

/// Emits accumulated fence content as a `<pre><code>` block.
///
/// Each raw line is escaped; no inline substitution is applied.
fn code_block(lines: &[String]) -> String {
    let code: Vec<String> = lines.iter().map(|line| escape_html(line)).collect();
    format!("<pre><code>{}</code></pre>", code.join("\n"))
}

/// Matches a heading line: 1-6 leading `#`, whitespace, then text.
///
/// Returns the heading level and the untrimmed text. Seven or more `#`
/// characters do not form a heading, nor does a `#` run with nothing
/// after the whitespace.
fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }

    let mut rest = line[level..].chars();
    match rest.next() {
        Some(c) if c.is_whitespace() => {}
        _ => return None,
    }

    let text = rest.as_str();
    if text.is_empty() {
        return None;
    }

    Some((level, text))
}

/// Matches a list item line: optional indent, `-`, whitespace, then text.
///
/// Returns the untrimmed item text.
fn list_item(line: &str) -> Option<&str> {
    let mut rest = line.trim_start().strip_prefix('-')?.chars();
    match rest.next() {
        Some(c) if c.is_whitespace() => {}
        _ => return None,
    }

    let text = rest.as_str();
    if text.is_empty() {
        return None;
    }

    Some(text)
}
