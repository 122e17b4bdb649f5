use super::*;

// =============================================================
// normalize_time
// =============================================================

#[test]
fn bare_hours_minutes_gain_seconds() {
    assert_eq!(normalize_time("09:30"), "09:30:00");
    assert_eq!(normalize_time("23:59"), "23:59:00");
}

#[test]
fn time_with_seconds_passes_through() {
    assert_eq!(normalize_time("09:30:45"), "09:30:45");
}

#[test]
fn empty_time_stays_empty() {
    assert_eq!(normalize_time(""), "");
}

#[test]
fn non_matching_shapes_pass_through() {
    assert_eq!(normalize_time("9:30"), "9:30");
    assert_eq!(normalize_time("ab:cd"), "ab:cd");
    assert_eq!(normalize_time("0930"), "0930");
}

// =============================================================
// EventForm
// =============================================================

fn event() -> Event {
    Event {
        id: 11,
        title: "Picnic".to_owned(),
        description: None,
        date: "2025-07-04".to_owned(),
        time: Some("12:15:00".to_owned()),
        location: Some("Park".to_owned()),
        created_by_user_id: 3,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn from_event_fills_fields_and_trims_seconds() {
    let form = EventForm::from_event(&event());
    assert_eq!(form.event_id, Some(11));
    assert_eq!(form.title, "Picnic");
    assert_eq!(form.description, "");
    assert_eq!(form.time, "12:15");
    assert_eq!(form.location, "Park");
}

#[test]
fn to_payload_normalizes_time_and_attaches_user() {
    let payload = EventForm::from_event(&event()).to_payload(Some(3));
    assert_eq!(payload.time, "12:15:00");
    assert_eq!(payload.user_id, Some(3));
    assert_eq!(payload.date, "2025-07-04");
}

#[test]
fn reset_clears_both_drafts() {
    let mut forms = FormsState { create: EventForm { title: "x".to_owned(), ..EventForm::default() }, edit: EventForm::from_event(&event()) };
    forms.reset();
    assert_eq!(forms, FormsState::default());
}
