//! Integration tests for the markdown renderer.
//!
//! Exercises the public rendering API end to end: block classification,
//! inline substitution order, escaping, and graceful handling of
//! malformed syntax.

use mdpage::{render_inline, render_markdown};

/// Tests the documented inline combination in one paragraph.
#[test]
fn test_inline_combination_in_paragraph() {
    // Arrange
    let input = "See [x](y) and `z` and **b** and *i*.";

    // Act
    let html = render_markdown(input);

    // Assert
    assert_eq!(
        html,
        "<p>See <a href=\"y\">x</a> and <code>z</code> and <strong>b</strong> and <em>i</em>.</p>"
    );
}

/// Tests that literal metacharacters render as entities exactly once,
/// even adjacent to inline markers.
#[test]
fn test_escaping_applies_exactly_once() {
    // Arrange
    let input = "a & b < c > d \" e ' f **& again**";

    // Act
    let html = render_markdown(input);

    // Assert
    assert_eq!(
        html,
        "<p>a &amp; b &lt; c &gt; d &quot; e &#39; f <strong>&amp; again</strong></p>"
    );
}

/// Tests heading boundaries: levels 1 and 6 render, level 7 does not.
#[test]
fn test_heading_level_boundaries() {
    assert_eq!(render_markdown("# Title"), "<h1>Title</h1>");
    assert_eq!(render_markdown("###### Deep"), "<h6>Deep</h6>");
    assert_eq!(
        render_markdown("####### Too deep"),
        "<p>####### Too deep</p>",
        "Seven hashes should fall through to paragraph rules"
    );
}

/// Tests contiguous list items form a single list.
#[test]
fn test_contiguous_list() {
    assert_eq!(
        render_markdown("- a\n- b"),
        "<ul>\n<li>a</li>\n<li>b</li>\n</ul>"
    );
}

/// Tests consecutive plain lines join into one paragraph.
#[test]
fn test_paragraph_join() {
    assert_eq!(
        render_markdown("line one\nline two"),
        "<p>line one line two</p>"
    );
}

/// Tests fenced block contents are escaped but never inline-rendered.
#[test]
fn test_fenced_block_is_literal() {
    // Arrange
    let input = "```\ncode <here>\n```";

    // Act
    let html = render_markdown(input);

    // Assert
    assert_eq!(html, "<pre><code>code &lt;here&gt;</code></pre>");

    // Bold-looking text inside a fence stays literal apart from entities
    assert_eq!(
        render_markdown("```\n**bold** & <b>\n```"),
        "<pre><code>**bold** &amp; &lt;b&gt;</code></pre>"
    );
}

/// Tests a document ending inside a fence still emits a closed block.
#[test]
fn test_unterminated_fence_is_closed() {
    assert_eq!(
        render_markdown("```\nfirst\nsecond"),
        "<pre><code>first\nsecond</code></pre>"
    );
}

/// Tests the renderer is total over awkward inputs.
#[test]
fn test_renderer_totality() {
    // Arrange: inputs that look malformed or degenerate
    let inputs = [
        "",
        "\n",
        "```",
        "``````",
        "**unmatched",
        "[half](link",
        "*",
        "- ",
        "###",
        "\r\n\r\n",
        "only text",
        "```\n```\n```",
    ];

    // Act & Assert: every input renders to some string without panicking
    for input in inputs {
        let _ = render_markdown(input);
        let _ = render_inline(input);
    }
}

/// Tests CRLF line endings render identically to LF.
#[test]
fn test_crlf_equivalence() {
    // Arrange
    let lf = "# Title\n\n- a\n- b\n\ntext\n";
    let crlf = lf.replace('\n', "\r\n");

    // Act & Assert
    assert_eq!(render_markdown(&crlf), render_markdown(lf));
}

/// Tests blank lines and non-list lines both terminate an open list.
#[test]
fn test_list_contiguity() {
    assert_eq!(
        render_markdown("- a\n\n- b"),
        "<ul>\n<li>a</li>\n</ul>\n<ul>\n<li>b</li>\n</ul>"
    );
    assert_eq!(
        render_markdown("- a\nplain"),
        "<ul>\n<li>a</li>\n</ul>\n<p>plain</p>"
    );
}

/// Tests a representative full document renders in scan order.
#[test]
fn test_full_document() {
    // Arrange
    let input = "\
# Statement

Why this project exists, in **plain** words.

## Details

- built with a [tool](https://example.com)
- ships as `index.html`

```
$ mdpage
```

That is all.
";

    // Act
    let html = render_markdown(input);

    // Assert
    let expected = "\
<h1>Statement</h1>
<p>Why this project exists, in <strong>plain</strong> words.</p>
<h2>Details</h2>
<ul>
<li>built with a <a href=\"https://example.com\">tool</a></li>
<li>ships as <code>index.html</code></li>
</ul>
<pre><code>$ mdpage</code></pre>
<p>That is all.</p>";
    assert_eq!(html, expected);
}
