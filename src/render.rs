//! Markdown to standalone HTML: converter output wrapped in a styled document shell.

use pulldown_cmark::{html, Options, Parser};

/// Render a markdown string into a self-contained HTML document with the
/// given stylesheet inlined. Pure: identical inputs produce identical output.
///
/// Raw HTML in the markdown passes through untouched — the draft is trusted
/// single-author input.
pub fn render_document(markdown: &str, css: &str) -> String {
    let fragment = to_fragment(markdown);
    format!(
        "\n  <html>\n    <head>\n    <style>{css}</style>\n    </head>\n    <body>\n      {fragment}\n    </body>\n  </html>\n  "
    )
}

/// Markdown to an HTML fragment. Headings, emphasis, links, images,
/// blockquotes, inline code, plus tables and strikethrough.
fn to_fragment(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
