use std::collections::BTreeMap;

use crate::models::Block;
use crate::parsing::classify::ClassifiedLine;

/// Interleave recorded annotation blocks into the surviving line stream.
///
/// Lines are walked in ascending order; each becomes a single-line
/// `Code` or `Text` block, followed by every annotation keyed in
/// `(previous surviving line, current line]`, in recording order. This
/// attributes annotations recorded against an excluded line to the next
/// surviving line, and never surfaces an annotation before the line that
/// produced it. Annotations keyed past the last surviving line are
/// dropped.
///
/// The annotation map is shared input: blocks are cloned into the
/// output, the map itself is never touched.
pub fn merge(
    lines: BTreeMap<u32, ClassifiedLine>,
    annotations: &BTreeMap<u32, Vec<Block>>,
) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut previous = 0u32;
    for (number, line) in lines {
        blocks.push(line.into_block());
        for recorded in annotations.range(previous + 1..=number).map(|(_, v)| v) {
            blocks.extend(recorded.iter().cloned());
        }
        previous = number;
    }
    blocks
}
