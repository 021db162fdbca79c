//! Declarative field constraints for both lead-capture forms.
//!
//! Each schema is a table of fields, each field an ordered list of rules
//! with the message shown when that rule fails. Evaluation is exhaustive
//! across fields and stops at the first failing rule within a field.

use std::sync::LazyLock;

use regex::Regex;
use validator::{ValidateEmail, ValidateUrl};

use super::domain::{FieldErrors, FieldValues, FormKind};

/// Predicate applied to a single field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// At least this many characters once surrounding whitespace is trimmed.
    MinChars(usize),
    MaxChars(usize),
    /// At least this many ASCII digits anywhere in the value.
    MinDigits(usize),
    Email,
    Url,
    /// International phone shape once spaces, dashes, and parentheses are removed.
    Phone,
    /// A file was attached.
    FilePresent,
}

/// What the field holds, which also drives how it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Url,
    TextArea,
    File,
}

/// One rule plus the message reported when it fails.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub rule: Rule,
    pub message: &'static str,
}

const fn rule(rule: Rule, message: &'static str) -> FieldRule {
    FieldRule { rule, message }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input: InputKind,
    /// Optional fields pass when empty; when filled their rules apply.
    pub optional: bool,
    pub rules: &'static [FieldRule],
}

#[derive(Debug)]
pub struct FormSchema {
    pub kind: FormKind,
    pub fields: &'static [FieldSpec],
}

pub const CONTACT_SCHEMA: FormSchema = FormSchema {
    kind: FormKind::Contact,
    fields: &[
        FieldSpec {
            name: "name",
            label: "Full Name",
            placeholder: "John Doe",
            input: InputKind::Text,
            optional: false,
            rules: &[
                rule(Rule::MinChars(2), "Name must be at least 2 characters"),
                rule(Rule::MaxChars(255), "Name must be at most 255 characters"),
            ],
        },
        FieldSpec {
            name: "email",
            label: "Work Email",
            placeholder: "john@company.com",
            input: InputKind::Email,
            optional: false,
            rules: &[rule(Rule::Email, "Invalid email address")],
        },
        FieldSpec {
            name: "company",
            label: "Company",
            placeholder: "Acme Inc.",
            input: InputKind::Text,
            optional: false,
            rules: &[
                rule(Rule::MinChars(2), "Company name is required"),
                rule(Rule::MaxChars(255), "Company name must be at most 255 characters"),
            ],
        },
        FieldSpec {
            name: "job_title",
            label: "Job Title",
            placeholder: "CTO",
            input: InputKind::Text,
            optional: false,
            rules: &[
                rule(Rule::MinChars(2), "Job title is required"),
                rule(Rule::MaxChars(255), "Job title must be at most 255 characters"),
            ],
        },
        FieldSpec {
            name: "phone",
            label: "Phone (optional)",
            placeholder: "+1 (555) 123-4567",
            input: InputKind::Tel,
            optional: true,
            rules: &[
                rule(Rule::MaxChars(50), "Invalid phone number format"),
                rule(Rule::Phone, "Invalid phone number format"),
            ],
        },
        FieldSpec {
            name: "project_description",
            label: "What challenge are you facing?",
            placeholder: "Tell us about your infrastructure, team, and goals...",
            input: InputKind::TextArea,
            optional: false,
            rules: &[
                rule(
                    Rule::MinChars(10),
                    "Please provide at least 10 characters describing your challenge",
                ),
                rule(
                    Rule::MaxChars(5000),
                    "Please keep the description under 5000 characters",
                ),
            ],
        },
    ],
};

pub const APPLICATION_SCHEMA: FormSchema = FormSchema {
    kind: FormKind::Application,
    fields: &[
        FieldSpec {
            name: "first_name",
            label: "First Name *",
            placeholder: "John",
            input: InputKind::Text,
            optional: false,
            rules: &[
                rule(Rule::MinChars(2), "First name is required"),
                rule(Rule::MaxChars(100), "First name must be at most 100 characters"),
            ],
        },
        FieldSpec {
            name: "last_name",
            label: "Last Name *",
            placeholder: "Doe",
            input: InputKind::Text,
            optional: false,
            rules: &[
                rule(Rule::MinChars(2), "Last name is required"),
                rule(Rule::MaxChars(100), "Last name must be at most 100 characters"),
            ],
        },
        FieldSpec {
            name: "email",
            label: "Email *",
            placeholder: "john@example.com",
            input: InputKind::Email,
            optional: false,
            rules: &[rule(Rule::Email, "Invalid email address")],
        },
        FieldSpec {
            name: "phone",
            label: "Phone *",
            placeholder: "+1 (555) 123-4567",
            input: InputKind::Tel,
            optional: false,
            rules: &[rule(Rule::MinDigits(10), "Valid phone number is required")],
        },
        FieldSpec {
            name: "linkedin_url",
            label: "LinkedIn URL",
            placeholder: "https://linkedin.com/in/yourprofile",
            input: InputKind::Url,
            optional: true,
            rules: &[rule(Rule::Url, "Valid LinkedIn URL is required")],
        },
        FieldSpec {
            name: "resume",
            label: "Resume/CV *",
            placeholder: "",
            input: InputKind::File,
            optional: false,
            rules: &[rule(Rule::FilePresent, "Resume is required")],
        },
        FieldSpec {
            name: "note",
            label: "Note",
            placeholder: "Tell us why you're interested...",
            input: InputKind::TextArea,
            optional: true,
            rules: &[],
        },
    ],
};

impl Rule {
    pub fn check(&self, value: &str) -> bool {
        match self {
            Rule::MinChars(min) => value.trim().chars().count() >= *min,
            Rule::MaxChars(max) => value.trim().chars().count() <= *max,
            Rule::MinDigits(min) => value.chars().filter(char::is_ascii_digit).count() >= *min,
            Rule::Email => is_email_address(value.trim()),
            Rule::Url => value.trim().validate_url(),
            Rule::Phone => is_phone_number(value),
            Rule::FilePresent => !value.trim().is_empty(),
        }
    }
}

/// Optional `+`, no leading zero, 8 to 15 digits.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{7,14}$").expect("valid hardcoded regex"));

/// Domain part with at least one dot between non-empty labels.
static DOTTED_DOMAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[^@.\s]+(\.[^@.\s]+)+$").expect("valid hardcoded regex"));

fn is_phone_number(value: &str) -> bool {
    let cleaned: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    PHONE_RE.is_match(&cleaned)
}

fn is_email_address(value: &str) -> bool {
    value.validate_email() && DOTTED_DOMAIN_RE.is_match(value)
}

impl FieldSpec {
    fn value<'a>(&self, values: &'a FieldValues) -> &'a str {
        match self.input {
            InputKind::File => values
                .resume()
                .filter(|resume| resume.is_present())
                .map(|resume| resume.file_name.as_str())
                .unwrap_or(""),
            _ => values.text(self.name),
        }
    }

    /// Message of the first rule this field fails, if any.
    pub fn first_violation(&self, values: &FieldValues) -> Option<&'static str> {
        let value = self.value(values);
        if self.optional && value.trim().is_empty() {
            return None;
        }

        self.rules
            .iter()
            .find(|field_rule| !field_rule.rule.check(value))
            .map(|field_rule| field_rule.message)
    }
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub fn evaluate(&self, values: &FieldValues) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for spec in self.fields {
            if let Some(message) = spec.first_violation(values) {
                errors.insert(spec.name, message);
            }
        }
        errors
    }
}
