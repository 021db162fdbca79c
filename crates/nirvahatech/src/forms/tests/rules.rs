use crate::forms::domain::{FieldValues, FormKind};
use crate::forms::rules::{InputKind, Rule, APPLICATION_SCHEMA, CONTACT_SCHEMA};

#[test]
fn phone_rule_accepts_common_formatting() {
    assert!(Rule::Phone.check("+1 (555) 123-4567"));
    assert!(Rule::Phone.check("44 20 7946 0958"));
    assert!(Rule::Phone.check("+919876543210"));
}

#[test]
fn phone_rule_rejects_short_letters_and_leading_zero() {
    assert!(!Rule::Phone.check("12345"));
    assert!(!Rule::Phone.check("call me maybe"));
    assert!(!Rule::Phone.check("0123456789"));
    assert!(!Rule::Phone.check("+1 555 123 4567 8901 23"));
}

#[test]
fn phone_rule_needs_digits_after_an_optional_plus() {
    assert!(!Rule::Phone.check("++15551234567"));
    assert!(!Rule::Phone.check("+1 555 12x 4567"));
    assert!(Rule::Phone.check("15551234"));
    assert!(!Rule::Phone.check("1555123"));
}

#[test]
fn email_rule_needs_a_dotted_domain() {
    assert!(Rule::Email.check("a@b.com"));
    assert!(Rule::Email.check(" jane.doe@mail.acme.io "));
    assert!(!Rule::Email.check("jane@localhost"));
    assert!(!Rule::Email.check("jane@acme."));
    assert!(!Rule::Email.check("not-an-email"));
}

#[test]
fn min_digits_ignores_formatting() {
    assert!(Rule::MinDigits(10).check("(555) 123-4567"));
    assert!(!Rule::MinDigits(10).check("555-1234"));
}

#[test]
fn char_bounds_count_trimmed_characters() {
    assert!(!Rule::MinChars(2).check("  a  "));
    assert!(Rule::MinChars(2).check(" ab "));
    assert!(Rule::MaxChars(3).check("  äöü  "));
    assert!(!Rule::MaxChars(3).check("äöüß"));
}

#[test]
fn schemas_declare_fields_in_render_order() {
    let contact: Vec<_> = CONTACT_SCHEMA.fields.iter().map(|spec| spec.name).collect();
    assert_eq!(
        contact,
        vec!["name", "email", "company", "job_title", "phone", "project_description"]
    );

    let application: Vec<_> = APPLICATION_SCHEMA
        .fields
        .iter()
        .map(|spec| spec.name)
        .collect();
    assert_eq!(
        application,
        vec!["first_name", "last_name", "email", "phone", "linkedin_url", "resume", "note"]
    );
    assert_eq!(FormKind::Application.schema().kind, FormKind::Application);
}

#[test]
fn first_failing_rule_wins_within_a_field() {
    let spec = CONTACT_SCHEMA.field("name").expect("name field");
    let values = FieldValues::new().with("name", "x");
    assert_eq!(
        spec.first_violation(&values),
        Some("Name must be at least 2 characters")
    );

    let values = FieldValues::new().with("name", "x".repeat(256));
    assert_eq!(
        spec.first_violation(&values),
        Some("Name must be at most 255 characters")
    );
}

#[test]
fn optional_fields_pass_when_blank() {
    let phone = CONTACT_SCHEMA.field("phone").expect("phone field");
    assert_eq!(phone.input, InputKind::Tel);
    assert_eq!(phone.first_violation(&FieldValues::new().with("phone", "   ")), None);
    assert_eq!(
        phone.first_violation(&FieldValues::new().with("phone", "abc")),
        Some("Invalid phone number format")
    );
}
