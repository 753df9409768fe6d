/// A figure referenced by an atomic block.
///
/// `width` is a fraction of the rendered page width; `1.0` means full width.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub filename: String,
    pub width: f64,
}

impl Figure {
    /// Create a full-width figure.
    pub fn new(filename: impl Into<String>) -> Self {
        Figure {
            filename: filename.into(),
            width: 1.0,
        }
    }

    pub fn with_width(filename: impl Into<String>, width: f64) -> Self {
        Figure {
            filename: filename.into(),
            width,
        }
    }
}

/// A single node of the final report.
///
/// `Code`, `Text`, `Html` and `Message` are text-bearing: they carry an
/// ordered list of lines and adjacent blocks of the same kind can be
/// collapsed into one. `Image` and `Video` are atomic: each stays a
/// singleton in the output, even next to another block of the same kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Verbatim source code lines.
    Code(Vec<String>),
    /// Prose lines, either fenced prose from the script or recorded text.
    Text(Vec<String>),
    /// Raw markup lines emitted into the report without escaping.
    Html(Vec<String>),
    /// An inline message recorded during the run.
    Message(Vec<String>),
    Image(Figure),
    Video(Figure),
}

/// Discriminant of a [`Block`], used for same-kind comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Code,
    Text,
    Html,
    Message,
    Image,
    Video,
}

impl BlockKind {
    /// Whether blocks of this kind carry lines and participate in collapsing.
    pub fn is_text_bearing(self) -> bool {
        matches!(
            self,
            BlockKind::Code | BlockKind::Text | BlockKind::Html | BlockKind::Message
        )
    }
}

impl Block {
    /// Single-line constructor for recorded code.
    pub fn code(line: impl Into<String>) -> Self {
        Block::Code(vec![line.into()])
    }

    /// Single-line constructor for recorded prose.
    pub fn text(line: impl Into<String>) -> Self {
        Block::Text(vec![line.into()])
    }

    /// Single-line constructor for raw markup.
    pub fn html(line: impl Into<String>) -> Self {
        Block::Html(vec![line.into()])
    }

    /// Single-line constructor for a message.
    pub fn message(line: impl Into<String>) -> Self {
        Block::Message(vec![line.into()])
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Code(_) => BlockKind::Code,
            Block::Text(_) => BlockKind::Text,
            Block::Html(_) => BlockKind::Html,
            Block::Message(_) => BlockKind::Message,
            Block::Image(_) => BlockKind::Image,
            Block::Video(_) => BlockKind::Video,
        }
    }

    /// The lines of a text-bearing block, `None` for atomic blocks.
    pub fn lines(&self) -> Option<&[String]> {
        match self {
            Block::Code(lines)
            | Block::Text(lines)
            | Block::Html(lines)
            | Block::Message(lines) => Some(lines),
            Block::Image(_) | Block::Video(_) => None,
        }
    }

    fn lines_mut(&mut self) -> Option<&mut Vec<String>> {
        match self {
            Block::Code(lines)
            | Block::Text(lines)
            | Block::Html(lines)
            | Block::Message(lines) => Some(lines),
            Block::Image(_) | Block::Video(_) => None,
        }
    }

    /// Whether a text-bearing block has no visible content (no lines, or
    /// every line empty). Atomic blocks are never empty.
    pub fn is_empty(&self) -> bool {
        match self.lines() {
            Some(lines) => lines.iter().all(|line| line.is_empty()),
            None => false,
        }
    }

    /// Append `other`'s lines onto this block, in order.
    ///
    /// Only valid between two text-bearing blocks of the exact same kind;
    /// otherwise `other` is handed back unchanged.
    pub fn merge_append(&mut self, other: Block) -> Result<(), Block> {
        if self.kind() != other.kind() || !self.kind().is_text_bearing() {
            return Err(other);
        }
        match (self.lines_mut(), other) {
            (
                Some(lines),
                Block::Code(tail) | Block::Text(tail) | Block::Html(tail) | Block::Message(tail),
            ) => {
                lines.extend(tail);
                Ok(())
            }
            // Unreachable after the kind check, but keeps the match total.
            (_, other) => Err(other),
        }
    }
}
