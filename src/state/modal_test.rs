use super::*;

fn did_x() -> ActionDetails {
    ActionDetails::new("Did X", "Alice", "5", "2024-01-01")
}

// =============================================================
// open
// =============================================================

#[test]
fn default_modal_is_hidden_and_empty() {
    let modal = ModalState::default();
    assert!(!modal.visible);
    assert!(modal.title.is_empty());
}

#[test]
fn open_populates_all_display_fields() {
    let mut modal = ModalState::default();
    modal.open(did_x());

    assert_eq!(modal.title, "Action by Alice");
    assert_eq!(modal.details, "Did X");
    assert_eq!(modal.user, "Alice");
    assert_eq!(modal.score_label(), "+5 pts");
    assert_eq!(modal.time_label(), "Time: 2024-01-01");
    assert!(modal.visible);
}

#[test]
fn open_overwrites_previous_content() {
    let mut modal = ModalState::default();
    modal.open(did_x());
    modal.open(ActionDetails::new("Shipped Y", "Bob", "12.5", "2024-02-03"));

    assert_eq!(modal.title, "Action by Bob");
    assert_eq!(modal.details, "Shipped Y");
    assert_eq!(modal.score_label(), "+12.5 pts");
    assert_eq!(modal.time_label(), "Time: 2024-02-03");
}

#[test]
fn open_with_empty_fields_renders_empty_text() {
    let mut modal = ModalState::default();
    modal.open(ActionDetails::default());

    assert_eq!(modal.title, "Action by ");
    assert_eq!(modal.score_label(), "+ pts");
    assert_eq!(modal.time_label(), "Time: ");
    assert!(modal.visible);
}

#[test]
fn open_after_close_shows_again() {
    let mut modal = ModalState::default();
    modal.open(did_x());
    modal.close(CloseTrigger::EscapeKey);
    modal.open(did_x());
    assert!(modal.visible);
}

// =============================================================
// close
// =============================================================

#[test]
fn every_trigger_hides_the_modal() {
    for trigger in [CloseTrigger::CloseButton, CloseTrigger::Backdrop, CloseTrigger::EscapeKey] {
        let mut modal = ModalState::default();
        modal.open(did_x());
        modal.close(trigger);
        assert!(!modal.visible, "{trigger:?} left the modal visible");
    }
}

#[test]
fn close_keeps_content_for_reuse() {
    let mut modal = ModalState::default();
    modal.open(did_x());
    modal.close(CloseTrigger::Backdrop);
    assert_eq!(modal.details, "Did X");
}

#[test]
fn close_when_hidden_is_noop() {
    let mut modal = ModalState::default();
    modal.close(CloseTrigger::CloseButton);
    assert_eq!(modal, ModalState::default());
}

// =============================================================
// Escape key
// =============================================================

#[test]
fn escape_is_close_key() {
    assert!(is_close_key("Escape"));
    assert!(is_close_key("Esc"));
}

#[test]
fn other_keys_do_not_close() {
    assert!(!is_close_key("Enter"));
    assert!(!is_close_key("escape"));
    assert!(!is_close_key(""));
}
