use crate::models::Block;

/// The finished report: a title and the collapsed block sequence.
///
/// Produced fresh by each pipeline run; safe to render repeatedly.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    title: String,
    blocks: Vec<Block>,
}

impl Document {
    pub fn new(title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Document {
            title: title.into(),
            blocks,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}
