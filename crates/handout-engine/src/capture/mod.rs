//! # Call-site capture and annotation recording
//!
//! The report is rendered from the script that drives it, so every
//! recorded annotation must be attributable to a line of that script.
//! Capture uses `#[track_caller]` and [`std::panic::Location`], which
//! resolves to the caller's own frame by construction, never to a frame
//! inside this crate. Snapshotting from a file other than the one that
//! created the [`Handout`] is a contract violation and surfaces as a
//! [`CaptureError`]; callers that want no capture at all can key
//! annotations explicitly through [`Recorder`] and
//! [`Handout::show_at`].

pub mod recorder;

pub use recorder::{Handout, Recorder};

use std::fs;
use std::path::{Path, PathBuf};

/// Capture failures; fatal to the snapshot that triggered them.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error(
        "handout was created in `{created}` but accessed from `{accessed}`; \
         annotations must be recorded from the script that created it"
    )]
    ForeignCallSite { created: PathBuf, accessed: PathBuf },
    #[error("cannot read source script `{path}`: {source}")]
    UnreadableSource {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A resolved caller location: source file and 1-based line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    file: PathBuf,
    line: u32,
}

impl CallSite {
    /// Resolve the immediate caller's file and line.
    #[track_caller]
    pub fn here() -> Self {
        let location = std::panic::Location::caller();
        CallSite {
            file: PathBuf::from(location.file()),
            line: location.line(),
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Read back the source text of the file this site points into.
    pub fn read_source(&self) -> Result<String, CaptureError> {
        fs::read_to_string(&self.file).map_err(|source| CaptureError::UnreadableSource {
            path: self.file.clone(),
            source,
        })
    }
}
