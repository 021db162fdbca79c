use std::collections::BTreeMap;
use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::rules::{FormSchema, APPLICATION_SCHEMA, CONTACT_SCHEMA};

/// The two lead-capture forms served by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Contact,
    Application,
}

impl FormKind {
    pub fn label(&self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Application => "application",
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        match self {
            FormKind::Contact => &CONTACT_SCHEMA,
            FormKind::Application => &APPLICATION_SCHEMA,
        }
    }

    /// Static banner shown when delivery fails. The cause is only logged.
    pub fn failure_banner(&self) -> &'static str {
        match self {
            FormKind::Contact => {
                "Failed to submit form. Please try again or contact us directly."
            }
            FormKind::Application => {
                "Failed to submit application. Please try again or email us directly."
            }
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "contact" | "lead" => Some(Self::Contact),
            "application" | "apply" => Some(Self::Application),
            _ => None,
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resume file attached to a job application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl ResumeUpload {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    /// A browser posts an empty file part when nothing was chosen.
    pub fn is_present(&self) -> bool {
        !self.file_name.trim().is_empty()
    }

    /// Declared content type, falling back to a guess from the file name.
    pub fn mime(&self) -> mime::Mime {
        self.content_type
            .as_deref()
            .and_then(|raw| raw.parse::<mime::Mime>().ok())
            .unwrap_or_else(|| mime_guess::from_path(&self.file_name).first_or_octet_stream())
    }
}

/// Raw form state as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    text: BTreeMap<String, String>,
    resume: Option<ResumeUpload>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut values = Self::new();
        for (field, value) in pairs {
            values.set(field, value);
        }
        values
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn with_resume(mut self, resume: ResumeUpload) -> Self {
        self.resume = Some(resume);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.text.insert(field.into(), value.into());
    }

    pub fn set_resume(&mut self, resume: ResumeUpload) {
        self.resume = Some(resume);
    }

    /// Missing fields read as the empty string.
    pub fn text(&self, field: &str) -> &str {
        self.text.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn resume(&self) -> Option<&ResumeUpload> {
        self.resume.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.text.values().all(|value| value.is_empty()) && self.resume.is_none()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.resume = None;
    }

    fn trimmed(&self, field: &str) -> String {
        self.text(field).trim().to_string()
    }

    fn optional(&self, field: &str) -> Option<String> {
        let value = self.text(field).trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// Field name to message, one entry per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.insert(field, message);
        errors
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

/// Body of `POST /api/v1/leads`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLead {
    pub name: String,
    pub email: String,
    pub company: String,
    pub job_title: String,
    pub phone: Option<String>,
    pub project_description: String,
}

impl ContactLead {
    pub(crate) fn from_values(values: &FieldValues) -> Self {
        Self {
            name: values.trimmed("name"),
            email: values.trimmed("email"),
            company: values.trimmed("company"),
            job_title: values.trimmed("job_title"),
            phone: values.optional("phone"),
            project_description: values.trimmed("project_description"),
        }
    }
}

/// Body of `POST /api/v1/applications`, sent as multipart form data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobApplication {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: Option<String>,
    pub note: Option<String>,
    pub resume: ResumeUpload,
}

impl JobApplication {
    pub(crate) fn from_values(values: &FieldValues, resume: ResumeUpload) -> Self {
        Self {
            first_name: values.trimmed("first_name"),
            last_name: values.trimmed("last_name"),
            email: values.trimmed("email"),
            phone: values.trimmed("phone"),
            linkedin_url: values.optional("linkedin_url"),
            note: values.optional("note"),
            resume,
        }
    }
}

/// A payload that passed every rule of its schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedPayload {
    Lead(ContactLead),
    Application(JobApplication),
}

impl ValidatedPayload {
    pub fn kind(&self) -> FormKind {
        match self {
            ValidatedPayload::Lead(_) => FormKind::Contact,
            ValidatedPayload::Application(_) => FormKind::Application,
        }
    }
}
