//! Contact form validation and payload

use inmobiliaria::contact::{
  build_payload, submit_alert, value_satisfies, ChoiceOption, Constraints, ContactForm, Field,
  FieldStatus, InputKind, INTERESTS_FIELD, SUBMIT_ERROR_ALERT, SUBMIT_OK_ALERT,
};
use inmobiliaria::SiteError;
use serde_json::json;

fn filled_form() -> ContactForm {
  let mut form = ContactForm::standard();
  form.input("nombre", "Ana Gómez".into());
  form.input("email", "ana@example.com".into());
  form.input("telefono", "+54 11 5555-1234".into());
  form.input("operacion", "compra".into());
  form.set_checked("contacto_preferido", "whatsapp", true);
  form.set_checked(INTERESTS_FIELD, "casa", true);
  form.input("mensaje", "Quisiera coordinar una visita.".into());
  form
}

// =============================================================================
// Constraint checks
// =============================================================================

#[test]
fn test_required_empty_is_invalid() {
  let constraints = Constraints {
    required: true,
    ..Default::default()
  };
  assert!(!value_satisfies(InputKind::Text, &constraints, ""));
  assert!(value_satisfies(InputKind::Text, &constraints, "x"));
}

#[test]
fn test_optional_empty_is_valid() {
  let constraints = Constraints {
    min_len: Some(5),
    pattern: Some("[0-9]+".into()),
    ..Default::default()
  };
  assert!(value_satisfies(InputKind::Tel, &constraints, ""));
}

#[test]
fn test_email_syntax() {
  let c = Constraints::default();
  assert!(value_satisfies(InputKind::Email, &c, "ana@example.com"));
  assert!(value_satisfies(InputKind::Email, &c, "a.b+c@sub.example.com.ar"));
  assert!(value_satisfies(InputKind::Email, &c, "user@localhost"));
  assert!(!value_satisfies(InputKind::Email, &c, "ana"));
  assert!(!value_satisfies(InputKind::Email, &c, "ana@"));
  assert!(!value_satisfies(InputKind::Email, &c, "@example.com"));
  assert!(!value_satisfies(InputKind::Email, &c, "ana@-example.com"));
}

#[test]
fn test_length_counts_characters() {
  let c = Constraints {
    min_len: Some(3),
    max_len: Some(4),
    ..Default::default()
  };
  assert!(!value_satisfies(InputKind::Text, &c, "ñá"));
  assert!(value_satisfies(InputKind::Text, &c, "ñáé"));
  assert!(!value_satisfies(InputKind::Text, &c, "ñáéíó"));
}

#[test]
fn test_pattern_matches_whole_value() {
  let c = Constraints {
    pattern: Some("[0-9]{3}".into()),
    ..Default::default()
  };
  assert!(value_satisfies(InputKind::Text, &c, "123"));
  assert!(!value_satisfies(InputKind::Text, &c, "1234"));
}

#[test]
fn test_invalid_pattern_is_ignored() {
  let c = Constraints {
    pattern: Some("([".into()),
    ..Default::default()
  };
  assert!(value_satisfies(InputKind::Text, &c, "anything"));
}

// =============================================================================
// Groups
// =============================================================================

#[test]
fn test_unchecked_checkbox_group_blocks_submit() {
  let mut form = filled_form();
  form.set_checked(INTERESTS_FIELD, "casa", false);

  assert!(!form.validate_all());
  assert_eq!(
    form.field(INTERESTS_FIELD).unwrap().status(),
    FieldStatus::Invalid
  );
  assert_eq!(FieldStatus::Invalid.css_class(), Some("error"));

  assert!(form.set_checked(INTERESTS_FIELD, "terreno", true));
  assert_eq!(
    form.field(INTERESTS_FIELD).unwrap().status(),
    FieldStatus::Valid
  );
  assert!(form.validate_all());
}

#[test]
fn test_radio_keeps_single_choice() {
  let mut form = ContactForm::standard();
  form.set_checked("contacto_preferido", "email", true);
  form.set_checked("contacto_preferido", "telefono", true);
  let field = form.field("contacto_preferido").unwrap();
  assert!(!field.is_checked("email"));
  assert!(field.is_checked("telefono"));
}

#[test]
fn test_unknown_option_ignored() {
  let mut field = Field::checkbox("x", "X", vec![ChoiceOption::new("a", "A")]);
  field.set_checked("zzz", true);
  assert!(!field.is_valid());
}

#[test]
fn test_validate_all_marks_every_field() {
  let mut form = ContactForm::standard();
  assert!(!form.validate_all());
  for field in form.fields() {
    assert_ne!(field.status(), FieldStatus::Unchecked, "{}", field.name);
  }
  // optional and empty
  assert_eq!(form.field("telefono").unwrap().status(), FieldStatus::Valid);
  assert_eq!(form.field("nombre").unwrap().status(), FieldStatus::Invalid);
}

#[test]
fn test_select_placeholder_fails_required() {
  let mut form = filled_form();
  assert!(!form.input("operacion", String::new()));
  assert!(form.input("operacion", "alquiler".into()));
}

#[test]
fn test_reset_clears_values_and_status() {
  let mut form = filled_form();
  form.validate_all();
  form.reset();
  assert_eq!(form, ContactForm::standard());
}

// =============================================================================
// Payload
// =============================================================================

#[test]
fn test_payload_from_filled_form() {
  let mut form = filled_form();
  form.set_checked(INTERESTS_FIELD, "local", true);
  assert!(form.validate_all());
  assert_eq!(
    form.payload(),
    json!({
      "nombre": "Ana Gómez",
      "email": "ana@example.com",
      "telefono": "+54 11 5555-1234",
      "operacion": "compra",
      "contacto_preferido": "whatsapp",
      "intereses": ["casa", "local"],
      "mensaje": "Quisiera coordinar una visita."
    })
  );
}

#[test]
fn test_interests_follow_document_order() {
  let mut form = filled_form();
  form.set_checked(INTERESTS_FIELD, "terreno", true);
  form.set_checked(INTERESTS_FIELD, "departamento", true);
  assert_eq!(
    form.payload()["intereses"],
    json!(["casa", "departamento", "terreno"])
  );
}

#[test]
fn test_build_payload_last_value_wins() {
  let entries = vec![
    ("a".to_string(), "1".to_string()),
    ("a".to_string(), "2".to_string()),
  ];
  assert_eq!(build_payload(&entries), json!({ "a": "2", "intereses": [] }));
}

#[test]
fn test_submit_alerts() {
  let ok: Result<(), SiteError> = Ok(());
  let failed: Result<(), SiteError> = Err(SiteError::Network("offline".into()));
  assert_eq!(submit_alert(&ok), SUBMIT_OK_ALERT);
  assert_eq!(submit_alert(&failed), SUBMIT_ERROR_ALERT);
}
