use super::*;

fn filled() -> ContactDraft {
    ContactDraft {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Hello there".to_owned(),
    }
}

#[test]
fn complete_draft_is_valid() {
    assert!(filled().validate().is_empty());
}

#[test]
fn empty_draft_reports_every_field() {
    assert_eq!(
        ContactDraft::default().validate(),
        vec![ContactFieldError::MissingName, ContactFieldError::MissingEmail, ContactFieldError::MissingMessage]
    );
}

#[test]
fn whitespace_only_fields_are_missing() {
    let draft = ContactDraft { name: "   ".to_owned(), ..filled() };
    assert_eq!(draft.validate(), vec![ContactFieldError::MissingName]);
}

#[test]
fn malformed_emails_are_rejected() {
    for email in ["ada", "ada@", "@example.com", "ada@example", "ada@@example.com", "a da@example.com", "ada@.com"] {
        let draft = ContactDraft { email: email.to_owned(), ..filled() };
        assert_eq!(draft.validate(), vec![ContactFieldError::InvalidEmail], "{email}");
    }
}

#[test]
fn submit_rejects_invalid_and_keeps_draft() {
    let mut state = ContactState::default();
    state.edit(ContactField::Name, "Ada".to_owned());

    assert!(!state.submit());
    assert_eq!(state.draft.name, "Ada");
    assert!(!state.sent);
    assert_eq!(state.error_for(ContactField::Email), Some(&ContactFieldError::MissingEmail));
    assert_eq!(state.error_for(ContactField::Name), None);
}

#[test]
fn submit_accepts_valid_and_clears_draft() {
    let mut state = ContactState { draft: filled(), ..ContactState::default() };

    assert!(state.submit());
    assert!(state.sent);
    assert_eq!(state.draft, ContactDraft::default());
    assert!(state.errors.is_empty());
}

#[test]
fn editing_a_field_clears_its_error() {
    let mut state = ContactState::default();
    state.submit();
    assert_eq!(state.errors.len(), 3);

    state.edit(ContactField::Message, "hi".to_owned());

    assert_eq!(state.error_for(ContactField::Message), None);
    assert_eq!(state.errors.len(), 2);
}

#[test]
fn draft_serializes_with_plain_field_names() {
    let raw = serde_json::to_string(&filled()).unwrap();
    assert_eq!(raw, r#"{"name":"Ada","email":"ada@example.com","message":"Hello there"}"#);
    assert_eq!(serde_json::from_str::<ContactDraft>(&raw).unwrap(), filled());
}

#[test]
fn corrupt_draft_does_not_parse() {
    assert!(serde_json::from_str::<ContactDraft>("{\"name\":").is_err());
    assert!(serde_json::from_str::<ContactDraft>(r#"["Ada"]"#).is_err());
}

#[test]
fn edits_are_saved() {
    let mut state = ContactState::default();
    assert_eq!(state.draft_sync(), DraftSync::Clear);

    state.edit(ContactField::Email, "ada@".to_owned());

    let expected = ContactDraft { email: "ada@".to_owned(), ..ContactDraft::default() };
    assert_eq!(state.draft_sync(), DraftSync::Save(&expected));
}

#[test]
fn rejected_submit_keeps_stored_draft() {
    let mut state = ContactState::default();
    state.edit(ContactField::Name, "Ada".to_owned());
    state.submit();

    assert!(matches!(state.draft_sync(), DraftSync::Save(d) if d.name == "Ada"));
}

#[test]
fn accepted_submit_clears_stored_draft() {
    let mut state = ContactState::restored(filled());
    assert!(state.submit());
    assert_eq!(state.draft_sync(), DraftSync::Clear);
}

#[test]
fn restored_draft_starts_without_errors() {
    let state = ContactState::restored(filled());
    assert_eq!(state.draft, filled());
    assert!(state.errors.is_empty());
    assert!(!state.sent);
}
