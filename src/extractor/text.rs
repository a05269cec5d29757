//! Plain-text rendering of an HTML tree.
//!
//! Approximates what a reader gets from "select all, copy" in a browser:
//! whitespace collapses, block elements sit on their own lines, `<br>` breaks
//! a line, table cells are separated by tabs, and scripts, styles and other
//! invisible subtrees vanish.
//!
//! The walk is depth-first and left-to-right over an explicit stack, writing
//! into a single `String` accumulator. Boundary decisions only look at the
//! tail of that accumulator.

use crate::dom::{self, Document, NodeRef, Selection};
use crate::extractor::tags::{classify, TagClass};
use crate::patterns::{is_collapsible_whitespace, WHITESPACE_RUN};

/// Pending work for the traversal.
enum Step<'a> {
    /// Render a node (and, if it has any, its children).
    Visit(NodeRef<'a>),
    /// Close an element after its children were rendered.
    Leave(TagClass),
}

/// Extract plain text from an HTML string.
///
/// Returns an empty string for empty input without invoking the parser.
///
/// # Example
///
/// ```rust
/// use rs_pagetext::extract_text;
///
/// let text = extract_text("<h1>Title</h1><p>First <b>bold</b>   line<br>second</p>");
/// assert_eq!(text, "Title\nFirst bold line\nsecond");
/// ```
#[must_use]
pub fn extract_text(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let doc = dom::parse(html);
    let text = extract_text_from_document(&doc);
    tracing::debug!(html_len = html.len(), text_len = text.len(), "extracted text");
    text
}

/// Extract plain text from a parsed document, starting at `<body>` (or the
/// document root when there is no body).
#[must_use]
pub fn extract_text_from_document(doc: &Document) -> String {
    render([dom::body_or_root(doc)])
}

/// Extract plain text from already-selected nodes, rendered in order as if
/// they were siblings.
///
/// An empty selection yields an empty string.
#[must_use]
pub fn extract_text_from_selection(sel: &Selection) -> String {
    render(sel.nodes().iter().copied())
}

fn render<'a, I>(roots: I) -> String
where
    I: IntoIterator<Item = NodeRef<'a>>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut out = String::new();
    let mut stack: Vec<Step<'a>> = roots.into_iter().rev().map(Step::Visit).collect();

    while let Some(step) = stack.pop() {
        match step {
            Step::Visit(node) => visit(node, &mut stack, &mut out),
            Step::Leave(class) => leave(class, &mut out),
        }
    }

    out.trim_matches(is_collapsible_whitespace).to_string()
}

fn visit<'a>(node: NodeRef<'a>, stack: &mut Vec<Step<'a>>, out: &mut String) {
    if node.is_text() {
        push_text(&node, out);
        return;
    }

    let class = match dom::tag_name(&node) {
        Some(tag) => classify(&tag),
        // document and fragment roots are transparent; comments and
        // doctypes have no children
        None => TagClass::Inline,
    };

    match class {
        TagClass::Skip => return,
        TagClass::LineBreak => {
            out.push('\n');
            return;
        }
        TagClass::Block => {
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
        }
        TagClass::Cell | TagClass::Inline => {}
    }

    stack.push(Step::Leave(class));
    stack.extend(node.children().into_iter().rev().map(Step::Visit));
}

fn leave(class: TagClass, out: &mut String) {
    match class {
        TagClass::Cell => out.push('\t'),
        TagClass::Block if !out.ends_with('\n') => out.push('\n'),
        _ => {}
    }
}

fn push_text(node: &NodeRef, out: &mut String) {
    let raw = node.text();

    if dom::parent_is(node, "pre") {
        out.push_str(&raw);
        return;
    }

    let collapsed = WHITESPACE_RUN.replace_all(&raw, " ");
    let at_boundary = out.chars().next_back().is_none_or(is_collapsible_whitespace);
    let chunk: &str = match collapsed.strip_prefix(' ') {
        Some(rest) if at_boundary => rest,
        _ => &collapsed,
    };
    out.push_str(chunk);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_text(""), "");
    }

    #[test]
    fn test_body_text() {
        assert_eq!(extract_text("<html><body>Some text</body></html>"), "Some text");
    }

    #[test]
    fn test_head_is_ignored() {
        let html = "<html><head><title>T</title><style>p{}</style></head><body><p>Body</p></body></html>";
        assert_eq!(extract_text(html), "Body");
    }

    #[test]
    fn test_inline_whitespace_collapses() {
        let html = "<p>  Hello \t\n <em>big</em>\n\n   world  </p>";
        assert_eq!(extract_text(html), "Hello big world");
    }

    #[test]
    fn test_leading_space_suppressed_after_break() {
        assert_eq!(extract_text("<p>one<br>   two</p>"), "one\ntwo");
    }

    #[test]
    fn test_nested_blocks_single_newline() {
        let html = "<div><div><p>a</p></div></div><div><section><p>b</p></section></div>";
        assert_eq!(extract_text(html), "a\nb");
    }

    #[test]
    fn test_skip_subtrees() {
        let html = "<p>a<script>var x = 1;</script><noscript>enable js</noscript>b<svg><text>x</text></svg>c</p>";
        assert_eq!(extract_text(html), "abc");
    }

    #[test]
    fn test_comments_ignored() {
        assert_eq!(extract_text("<p>a<!-- hidden -->b</p>"), "ab");
    }

    #[test]
    fn test_pre_verbatim() {
        let html = "<p>x   y</p><pre>  keep   this\n    indent</pre><p>z   w</p>";
        assert_eq!(extract_text(html), "x y\n  keep   this\n    indent\nz w");
    }

    #[test]
    fn test_pre_only_direct_text() {
        // text inside an inline child of <pre> is not the pre's own text
        let html = "<pre><b>a   b</b>   c</pre>";
        assert_eq!(extract_text(html), "a b   c");
    }

    #[test]
    fn test_table_cells_and_rows() {
        let html = "<table><tr><td>A</td><td>B</td></tr><tr><th>C</th><td>D</td></tr></table>";
        assert_eq!(extract_text(html), "A\tB\t\nC\tD");
    }

    #[test]
    fn test_byte_order_mark_collapses() {
        assert_eq!(extract_text("<p>a</p>\u{feff}  <p>b</p>"), "a\nb");
        assert_eq!(extract_text("\u{feff}<p>x</p>\u{feff}"), "x");
    }

    #[test]
    fn test_br_inside_inline() {
        assert_eq!(extract_text("<span>a<br>b</span>"), "a\nb");
    }

    #[test]
    fn test_consecutive_br_keep_blank_line() {
        assert_eq!(extract_text("a<br><br>b"), "a\n\nb");
    }

    #[test]
    fn test_uppercase_tags() {
        assert_eq!(extract_text("<DIV>a</DIV><DIV>b<SCRIPT>x</SCRIPT></DIV>"), "a\nb");
    }

    #[test]
    fn test_from_document() {
        let doc = dom::parse("<ul><li>one</li><li>two</li></ul>");
        assert_eq!(extract_text_from_document(&doc), "one\ntwo");
    }

    #[test]
    fn test_from_selection() {
        let doc = dom::parse("<div id='a'><p>keep</p></div><div id='b'>drop</div>");
        assert_eq!(extract_text_from_selection(&doc.select("#a")), "keep");
    }

    #[test]
    fn test_from_selection_multiple_nodes() {
        let doc = dom::parse("<p>one</p><aside>skip</aside><p>two</p>");
        assert_eq!(extract_text_from_selection(&doc.select("p")), "one\ntwo");
    }

    #[test]
    fn test_from_empty_selection() {
        let doc = dom::parse("<p>text</p>");
        assert_eq!(extract_text_from_selection(&doc.select("article")), "");
    }
}
