//! # handout-html
//!
//! Reference exporter turning a [`Document`] into a single HTML page:
//! a fixed header and footer around one fragment per block. `Html`
//! blocks pass through raw by contract; everything else is escaped.

use handout_engine::{Block, Document};
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Renders a document as one self-contained HTML string.
pub struct HtmlExporter {
    document: Document,
}

impl HtmlExporter {
    pub fn new(document: Document) -> Self {
        HtmlExporter { document }
    }

    fn header(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head><title>{}</title></head>\n<body>",
            encode_text(self.document.title())
        )
    }

    fn body(&self) -> String {
        self.document
            .blocks()
            .iter()
            .filter(|block| !block.is_empty())
            .map(fragment)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn footer(&self) -> String {
        "</body>\n</html>".to_string()
    }

    pub fn render(&self) -> String {
        [self.header(), self.body(), self.footer()].join("\n")
    }
}

/// One HTML fragment per block kind.
fn fragment(block: &Block) -> String {
    match block {
        Block::Code(lines) => format!(
            "<pre><code>{}</code></pre>",
            encode_text(&lines.join("\n"))
        ),
        Block::Text(lines) => format!("<p>{}</p>", encode_text(&lines.join("\n"))),
        Block::Message(lines) => format!(
            "<pre class=\"message\">{}</pre>",
            encode_text(&lines.join("\n"))
        ),
        // Raw markup: the recorder's caller vouches for it.
        Block::Html(lines) => lines.join("\n"),
        Block::Image(figure) => format!(
            "<img src=\"{}\" style=\"width: {:.0}%;\" />",
            encode_double_quoted_attribute(&figure.filename),
            figure.width * 100.0
        ),
        Block::Video(figure) => format!(
            "<video controls style=\"width: {:.0}%;\"><source src=\"{}\" /></video>",
            figure.width * 100.0,
            encode_double_quoted_attribute(&figure.filename)
        ),
    }
}
