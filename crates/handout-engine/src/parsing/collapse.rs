use crate::models::Block;

/// Coalesce runs of adjacent same-kind text-bearing blocks.
///
/// A left-to-right scan keeps an accumulator; each block either
/// merge-appends onto it (same text-bearing kind) or flushes it and
/// takes its place. Atomic blocks never merge, so each one flushes as
/// its own singleton. Collapsing is idempotent.
pub fn collapse(blocks: Vec<Block>) -> Vec<Block> {
    let mut collapsed = Vec::new();
    let mut blocks = blocks.into_iter();
    let Some(mut accumulator) = blocks.next() else {
        return collapsed;
    };
    for block in blocks {
        if let Err(block) = accumulator.merge_append(block) {
            collapsed.push(std::mem::replace(&mut accumulator, block));
        }
    }
    collapsed.push(accumulator);
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Figure;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_collapses_to_empty() {
        assert_eq!(collapse(vec![]), vec![]);
    }

    #[test]
    fn adjacent_code_blocks_merge() {
        let blocks = vec![
            Block::text("One-line docstring at start"),
            Block::code("def foo():"),
            Block::code("    pass"),
        ];
        assert_eq!(
            collapse(blocks),
            vec![
                Block::Text(vec!["One-line docstring at start".into()]),
                Block::Code(vec!["def foo():".into(), "    pass".into()]),
            ]
        );
    }

    #[test]
    fn mixed_kinds_stay_separate() {
        let blocks = vec![
            Block::Image(Figure::new("pic.png")),
            Block::code("# some code here"),
            Block::text(""),
        ];
        assert_eq!(collapse(blocks.clone()), blocks);
    }

    #[test]
    fn atomic_neighbours_never_merge() {
        let blocks = vec![
            Block::Image(Figure::new("a.png")),
            Block::Image(Figure::new("b.png")),
        ];
        assert_eq!(collapse(blocks.clone()), blocks);
    }

    #[test]
    fn collapse_is_idempotent() {
        let blocks = vec![
            Block::code("a"),
            Block::code("b"),
            Block::text("p"),
            Block::text("q"),
            Block::Video(Figure::new("clip.mp4")),
            Block::Video(Figure::new("clip.mp4")),
            Block::message("m"),
        ];
        let once = collapse(blocks);
        let twice = collapse(once.clone());
        assert_eq!(once, twice);
    }
}
