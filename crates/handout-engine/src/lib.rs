//! # handout-engine
//!
//! Turns an annotated source script into an ordered sequence of typed
//! report blocks: the script's own code/prose structure, interleaved
//! with annotation blocks recorded against specific lines while the
//! script ran, collapsed into one block per run of same-kind content.
//!
//! ```
//! use handout_engine::Handout;
//!
//! let mut handout = Handout::with_source("Demo", "compute()\nplot()");
//! handout.add_text("computation finished");
//! let document = handout.show_at(1).unwrap();
//! assert_eq!(document.blocks().len(), 3);
//! ```

pub mod capture;
pub mod models;
pub mod parsing;

pub use capture::{CallSite, CaptureError, Handout, Recorder};
pub use models::{Block, BlockKind, Document, Figure};
pub use parsing::process;
