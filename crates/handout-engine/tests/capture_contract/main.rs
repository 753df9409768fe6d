//! The handout must be snapshotted from the script that created it.

mod helper;

use handout_engine::CaptureError;

#[test]
fn show_from_another_file_is_a_foreign_call_site() {
    let mut handout = helper::make_handout();
    let err = handout.show().unwrap_err();
    match err {
        CaptureError::ForeignCallSite { created, accessed } => {
            assert!(created.ends_with("capture_contract/helper.rs"), "got {created:?}");
            assert!(accessed.ends_with("capture_contract/main.rs"), "got {accessed:?}");
        }
        other => panic!("expected ForeignCallSite, got {other}"),
    }
}

#[test]
fn explicit_line_snapshots_ignore_the_call_site() {
    let mut handout = helper::make_handout();
    handout.add_text("from elsewhere");
    let document = handout.show_at(1).unwrap();
    assert_eq!(document.blocks().len(), 2);
}
