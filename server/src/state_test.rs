use super::*;

#[test]
fn default_state_has_no_mailer() {
    assert!(!AppState::default().mailer_configured());
    assert!(!test_helpers::test_app_state().mailer_configured());
}

#[test]
fn clones_share_the_mailer() {
    let mailer = Arc::new(test_helpers::RecordingMailer::accepting());
    let state = test_helpers::test_app_state_with_mailer(mailer.clone());
    let copy = state.clone();
    assert!(copy.mailer_configured());
    assert_eq!(Arc::strong_count(&mailer), 3);
}
