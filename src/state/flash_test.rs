use super::*;

#[test]
fn show_then_expire_clears() {
    let mut slot = FlashSlot::default();
    let generation = slot.show("Saved", FlashKind::Success);
    assert_eq!(slot.current().map(|f| f.text.as_str()), Some("Saved"));
    assert!(slot.expire(generation));
    assert!(slot.current().is_none());
}

#[test]
fn newer_message_survives_older_timer() {
    let mut slot = FlashSlot::default();
    let first = slot.show("first", FlashKind::Success);
    let second = slot.show("second", FlashKind::Error);

    assert!(!slot.expire(first));
    assert_eq!(
        slot.current(),
        Some(&Flash { text: "second".to_owned(), kind: FlashKind::Error })
    );
    assert!(slot.expire(second));
}

#[test]
fn expire_after_manual_clear_is_noop() {
    let mut slot = FlashSlot::default();
    let generation = slot.show("x", FlashKind::Success);
    slot.clear();
    assert!(!slot.expire(generation));
}

#[test]
fn error_uses_client_error_display() {
    let mut state = FlashState::default();
    state.error(FlashTarget::EventList, &ClientError::NotLoggedIn);
    let flash = state.slot(FlashTarget::EventList).current().unwrap();
    assert_eq!(flash.text, "Please log in to register for an event.");
    assert_eq!(flash.kind, FlashKind::Error);
}

#[test]
fn targets_are_independent() {
    let mut state = FlashState::default();
    state.success(FlashTarget::Login, "Logged out successfully.");
    state.success(FlashTarget::CreateEvent, "created");
    state.clear_forms();
    assert!(state.slot(FlashTarget::CreateEvent).current().is_none());
    assert!(state.slot(FlashTarget::Login).current().is_some());
    state.clear_auth();
    assert!(state.slot(FlashTarget::Login).current().is_none());
}
