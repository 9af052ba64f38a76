//! Markup rendering: HTML display form and plain-text projection.
//!
//! Note content is untrusted user input echoed back to the same user, so
//! raw HTML embedded in a note is escaped into visible text instead of
//! being passed through to the renderer. Both functions are pure and
//! total: malformed markup renders best-effort, it never aborts.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, Options, markdown_to_html, parse_document};

/// Convert note markup to sanitized display HTML.
pub fn render_html(content: &str) -> String {
    markdown_to_html(content, &render_options())
}

/// Strip markup down to its visible words. Lossless for text content,
/// intentionally lossy for formatting. Blocks become lines.
pub fn plain_text(content: &str) -> String {
    let arena = Arena::new();
    let root = parse_document(&arena, content, &render_options());

    let mut out = String::new();
    collect_plain(root, &mut out);
    out.trim_end().to_string()
}

fn render_options() -> Options<'static> {
    let mut options = Options::default();
    // GFM extensions
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;

    options.parse.smart = false;

    // Raw HTML is escaped, not executed and not silently dropped
    options.render.escape = true;
    options.render.github_pre_lang = true;

    options
}

fn collect_plain<'a>(node: &'a AstNode<'a>, out: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(t) => out.push_str(t),
        NodeValue::Code(code) => out.push_str(&code.literal),
        NodeValue::CodeBlock(block) => {
            out.push_str(&block.literal);
            if !block.literal.ends_with('\n') {
                out.push('\n');
            }
        }
        NodeValue::SoftBreak | NodeValue::LineBreak => out.push('\n'),
        // Raw HTML carries markup, not prose
        NodeValue::HtmlBlock(_) | NodeValue::HtmlInline(_) => {}
        value => {
            for child in node.children() {
                collect_plain(child, out);
            }
            if matches!(value, NodeValue::Paragraph | NodeValue::Heading(_)) {
                out.push('\n');
            }
        }
    }
}
