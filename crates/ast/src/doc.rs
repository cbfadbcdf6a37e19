//! The documentation model consumed by the emitter base's documentation
//! emitter (spec §4.1 "Documentation emitter").
//!
//! A `CodeDoc` is the parser/resolver's structured view of a doc comment:
//! a one-line summary plus zero or more blocks, each block a sequence of
//! paragraphs or bullet lists, each paragraph a sequence of inline runs.
//! Backends render this target-appropriately; nothing in this crate knows
//! what a JS `/** */` block looks like.

/// One inline run inside a paragraph: either plain text or an inline code
/// span (`` `like this` ``).
#[derive(Debug, Clone)]
pub enum Inline {
    Text(String),
    Code(String),
}

#[derive(Debug, Clone)]
pub struct Paragraph {
    pub runs: Vec<Inline>,
}

#[derive(Debug, Clone)]
pub enum DocBlock {
    Paragraph(Paragraph),
    Bullets(Vec<Paragraph>),
}

#[derive(Debug, Clone, Default)]
pub struct CodeDoc {
    pub summary: Paragraph,
    pub blocks: Vec<DocBlock>,
}

impl Default for Paragraph {
    fn default() -> Self {
        Paragraph { runs: Vec::new() }
    }
}

impl CodeDoc {
    pub fn is_empty(&self) -> bool {
        self.summary.runs.is_empty() && self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_doc_has_no_content() {
        assert!(CodeDoc::default().is_empty());
    }

    #[test]
    fn summary_alone_is_not_empty() {
        let doc = CodeDoc {
            summary: Paragraph {
                runs: vec![Inline::Text("Adds two numbers.".into())],
            },
            blocks: Vec::new(),
        };
        assert!(!doc.is_empty());
    }
}
