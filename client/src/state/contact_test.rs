use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_values_round_trip_through_select() {
    for role in Role::ALL {
        assert_eq!(Role::from_value(role.value()), Some(role));
        assert_eq!(role.label(), role.value());
    }
}

#[test]
fn role_placeholder_and_unknown_values_are_none() {
    assert_eq!(Role::from_value(""), None);
    assert_eq!(Role::from_value("Principal"), None);
    assert_eq!(Role::from_value("student"), None);
}

#[test]
fn school_administrator_uses_spaced_value() {
    assert_eq!(Role::SchoolAdministrator.value(), "School Administrator");
}

// =============================================================
// ContactField
// =============================================================

#[test]
fn only_enquiry_is_optional() {
    for field in ContactField::INPUTS {
        assert!(field.required(), "{field:?} should be required");
    }
    assert!(!ContactField::Message.required());
}

#[test]
fn input_types_match_field_kind() {
    assert_eq!(ContactField::FirstName.input_type(), "text");
    assert_eq!(ContactField::Phone.input_type(), "tel");
    assert_eq!(ContactField::Email.input_type(), "email");
}

// =============================================================
// ContactState
// =============================================================

#[test]
fn set_field_updates_only_that_field() {
    let mut state = ContactState::default();
    state.set_field(ContactField::Email, "jane@example.com".to_owned());
    assert_eq!(state.form.get(ContactField::Email), "jane@example.com");
    assert_eq!(state.form.get(ContactField::FirstName), "");
    assert_eq!(state.form.get(ContactField::Message), "");
}

#[test]
fn set_role_parses_select_value() {
    let mut state = ContactState::default();
    state.set_role("Parent");
    assert_eq!(state.form.role, Some(Role::Parent));
    state.set_role("");
    assert_eq!(state.form.role, None);
}

#[test]
fn submit_acknowledges_exactly_once_per_call() {
    let mut state = ContactState::default();
    assert_eq!(state.submit(), ACKNOWLEDGEMENT);
    assert_eq!(state.submissions, 1);
    assert_eq!(state.submit(), ACKNOWLEDGEMENT);
    assert_eq!(state.submissions, 2);
}

#[test]
fn submit_keeps_entered_values() {
    let mut state = ContactState::default();
    state.set_field(ContactField::FirstName, "Jane".to_owned());
    state.submit();
    assert_eq!(state.form.first_name, "Jane");
}

#[test]
fn form_serializes_with_role_value() {
    let mut state = ContactState::default();
    state.set_field(ContactField::FirstName, "Jane".to_owned());
    state.set_role("School Administrator");
    let json = serde_json::to_value(&state.form).unwrap();
    assert_eq!(json["first_name"], "Jane");
    assert_eq!(json["role"], "School Administrator");
}

#[test]
fn acknowledgement_mentions_demo_form() {
    assert!(ACKNOWLEDGEMENT.starts_with("Thanks!"));
    assert!(ACKNOWLEDGEMENT.contains("demo form"));
}
