use std::collections::BTreeMap;

use crate::capture::{CallSite, CaptureError};
use crate::models::{Block, Document, Figure};
use crate::parsing::process;

/// Accumulates annotation blocks and keys them to source lines.
///
/// Blocks queue as "pending" until a flush assigns them all to one line
/// number; recording order is preserved both within the pending queue
/// and across flushes to the same line.
#[derive(Debug, Default)]
pub struct Recorder {
    pending: Vec<Block>,
    recorded: BTreeMap<u32, Vec<Block>>,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder::default()
    }

    /// Queue a block for the next flush.
    pub fn record_pending(&mut self, block: Block) {
        self.pending.push(block);
    }

    /// Assign every pending block to `line` and clear the queue.
    pub fn flush(&mut self, line: u32) {
        if self.pending.is_empty() {
            return;
        }
        self.recorded
            .entry(line)
            .or_default()
            .append(&mut self.pending);
    }

    /// The annotation map built so far, keyed by 1-based line number.
    pub fn annotations(&self) -> &BTreeMap<u32, Vec<Block>> {
        &self.recorded
    }
}

/// The user-facing recording front: queues annotations against the
/// calling script and snapshots them into a [`Document`].
///
/// Created where the script runs; all `add_*` calls queue pending
/// blocks, and [`Handout::show`] keys them to the calling line before
/// running the pipeline over the script's own text.
#[derive(Debug)]
pub struct Handout {
    title: String,
    origin: CallSite,
    source_text: Option<String>,
    recorder: Recorder,
}

impl Handout {
    /// Create a handout for the calling script.
    ///
    /// The script's text is read back from the creation site's path at
    /// snapshot time, so the path must stay readable relative to the
    /// process working directory for as long as the handout lives.
    #[track_caller]
    pub fn new(title: impl Into<String>) -> Self {
        Handout {
            title: title.into(),
            origin: CallSite::here(),
            source_text: None,
            recorder: Recorder::new(),
        }
    }

    /// Create a handout over caller-supplied source text, skipping the
    /// read-back. Useful for generated scripts and embedded sources.
    #[track_caller]
    pub fn with_source(title: impl Into<String>, source_text: impl Into<String>) -> Self {
        Handout {
            title: title.into(),
            origin: CallSite::here(),
            source_text: Some(source_text.into()),
            recorder: Recorder::new(),
        }
    }

    /// Queue a prose annotation.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.recorder.record_pending(Block::text(text));
    }

    /// Queue a message annotation.
    pub fn add_message(&mut self, message: impl Into<String>) {
        self.recorder.record_pending(Block::message(message));
    }

    /// Queue a raw markup annotation; rendered without escaping.
    pub fn add_html(&mut self, html: impl Into<String>) {
        self.recorder.record_pending(Block::html(html));
    }

    /// Queue a full-width image annotation.
    pub fn add_image(&mut self, filename: impl Into<String>) {
        self.recorder.record_pending(Block::Image(Figure::new(filename)));
    }

    /// Queue a full-width video annotation.
    pub fn add_video(&mut self, filename: impl Into<String>) {
        self.recorder.record_pending(Block::Video(Figure::new(filename)));
    }

    /// Queue an arbitrary caller-built block (custom figure widths,
    /// pre-assembled multi-line blocks).
    pub fn record(&mut self, block: Block) {
        self.recorder.record_pending(block);
    }

    /// Snapshot the report, keying pending annotations to the calling
    /// line.
    ///
    /// Fails with [`CaptureError::ForeignCallSite`] when called from a
    /// file other than the one that created the handout.
    #[track_caller]
    pub fn show(&mut self) -> Result<Document, CaptureError> {
        let site = CallSite::here();
        if site.file() != self.origin.file() {
            return Err(CaptureError::ForeignCallSite {
                created: self.origin.file().to_path_buf(),
                accessed: site.file().to_path_buf(),
            });
        }
        self.show_at(site.line())
    }

    /// Snapshot the report with an explicit line number.
    ///
    /// Pending annotations keyed past the script's last surviving line
    /// are dropped by the merge stage; callers keep `line` within the
    /// script's range.
    pub fn show_at(&mut self, line: u32) -> Result<Document, CaptureError> {
        self.recorder.flush(line);
        let source = match &self.source_text {
            Some(text) => text.clone(),
            None => self.origin.read_source()?,
        };
        let blocks = process(&source, self.recorder.annotations());
        Ok(Document::new(self.title.clone(), blocks))
    }
}
