pub mod block;
pub mod document;

pub use block::{Block, BlockKind, Figure};
pub use document::Document;
