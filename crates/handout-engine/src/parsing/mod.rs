//! # Script-to-report pipeline
//!
//! Four stages run in a straight line over one script:
//!
//! 1. **Classification** (`classify`): every physical line becomes a
//!    `ClassifiedLine`, code or fenced prose, keyed by 1-based number.
//! 2. **Pragma filtering** (`pragma`): lines carrying `# handout:`
//!    directives (and suppressed regions between them) are dropped;
//!    surviving lines keep their original numbers.
//! 3. **Merging** (`merge`): the sparse line stream is interleaved with
//!    the recorded annotation blocks by line number.
//! 4. **Collapsing** (`collapse`): adjacent same-kind text-bearing
//!    blocks coalesce into one block each.
//!
//! Every stage is a pure function; the annotation map is read-only
//! shared input and each invocation builds a fresh block sequence.

pub mod classify;
pub mod collapse;
pub mod merge;
pub mod pragma;


use std::collections::BTreeMap;

use crate::models::Block;

pub use classify::{ClassifiedLine, FENCE, LineKind, classify};
pub use collapse::collapse;
pub use merge::merge;
pub use pragma::{Pragma, filter_pragmas, pragma};

/// Run the whole pipeline: classify, filter, merge, collapse.
pub fn process(source: &str, annotations: &BTreeMap<u32, Vec<Block>>) -> Vec<Block> {
    let lines = classify(source);
    let lines = filter_pragmas(lines);
    let blocks = merge(lines, annotations);
    collapse(blocks)
}
