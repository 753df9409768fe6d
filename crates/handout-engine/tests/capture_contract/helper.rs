use handout_engine::Handout;

/// Builds a handout whose creation site is this file.
pub fn make_handout() -> Handout {
    Handout::with_source("Contract", "first()\nsecond()")
}
