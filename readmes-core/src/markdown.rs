//! Markdown document model and rendering.
//!
//! Report assembly produces an ordered [`Block`] sequence; this module
//! serializes it to Markdown text. Rendering is pure and deterministic.

use std::fmt::Write;

/// Inline content inside a heading, paragraph, or list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// A plain text fragment.
    Text(String),
    /// A link with display text and a target URL.
    Link {
        /// Text shown for the link.
        text: String,
        /// Target URL.
        url: String,
    },
}

impl Inline {
    /// Plain-text inline.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Link inline with display text and target URL.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// One block element of a generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A heading with its level (1 is the document title).
    Heading {
        /// Heading level, 1-6.
        level: u8,
        /// Inline content of the heading.
        content: Vec<Inline>,
    },
    /// A paragraph of inline content.
    Paragraph(Vec<Inline>),
    /// An unordered list; each item is a sequence of inlines.
    List(Vec<Vec<Inline>>),
    /// A fenced code block.
    CodeBlock {
        /// Language tag on the opening fence.
        lang: String,
        /// Verbatim code body.
        code: String,
    },
    /// A horizontal rule.
    Rule,
}

impl Block {
    /// Heading block from plain text.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            content: vec![Inline::text(text)],
        }
    }

    /// Paragraph block from a single plain-text fragment.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph(vec![Inline::text(text)])
    }
}

/// Render a block sequence to Markdown.
///
/// Blocks are separated by one blank line; the output ends with a single
/// newline.
pub fn render_markdown(blocks: &[Block]) -> String {
    let mut output = String::new();
    for block in blocks {
        match block {
            Block::Heading { level, content } => {
                let marker = "#".repeat(usize::from(*level));
                let _ = writeln!(output, "{marker} {}\n", render_inlines(content));
            }
            Block::Paragraph(content) => {
                let _ = writeln!(output, "{}\n", render_inlines(content));
            }
            Block::List(items) => {
                if items.is_empty() {
                    continue;
                }
                for item in items {
                    let _ = writeln!(output, "- {}", render_inlines(item));
                }
                let _ = writeln!(output);
            }
            Block::CodeBlock { lang, code } => {
                let _ = writeln!(output, "```{lang}\n{code}\n```\n");
            }
            Block::Rule => {
                let _ = writeln!(output, "---\n");
            }
        }
    }
    while output.ends_with("\n\n") {
        output.pop();
    }
    output
}

fn render_inlines(content: &[Inline]) -> String {
    let mut rendered = String::new();
    for inline in content {
        match inline {
            Inline::Text(text) => rendered.push_str(text),
            Inline::Link { text, url } => {
                let _ = write!(rendered, "[{text}]({url})");
            }
        }
    }
    rendered
}
