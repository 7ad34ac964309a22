use super::*;

#[test]
fn ui_status_defaults() {
    let status = UiStatus::default();
    assert!(status.message.is_empty());
    assert!(!status.spinner_on);
    assert!(status.current_article_id.is_none());
}

#[test]
fn begin_flush_clears_message() {
    let mut status = UiStatus { message: "old".into(), ..UiStatus::default() };
    status.begin(true);
    assert!(status.spinner_on);
    assert!(status.message.is_empty());
}

#[test]
fn begin_without_flush_keeps_message() {
    let mut status = UiStatus { message: "Article 1 was deleted".into(), ..UiStatus::default() };
    status.begin(false);
    assert!(status.spinner_on);
    assert_eq!(status.message, "Article 1 was deleted");
}

#[test]
fn finish_turns_spinner_off_and_keeps_selection() {
    let mut status = UiStatus { current_article_id: Some(4), ..UiStatus::default() };
    status.begin(true);
    status.finish();
    assert!(!status.spinner_on);
    assert_eq!(status.current_article_id, Some(4));
}
