use super::domain::{
    ContactLead, FieldErrors, FieldValues, FormKind, JobApplication, ValidatedPayload,
};

/// Run the form's schema and build the outbound payload when every field passes.
///
/// Invalid input is an expected outcome and comes back as the full set of
/// field errors so the page can show every problem at once.
pub fn validate(kind: FormKind, values: &FieldValues) -> Result<ValidatedPayload, FieldErrors> {
    let errors = kind.schema().evaluate(values);
    if !errors.is_empty() {
        return Err(errors);
    }

    match kind {
        FormKind::Contact => Ok(ValidatedPayload::Lead(ContactLead::from_values(values))),
        FormKind::Application => {
            let Some(resume) = values.resume().filter(|resume| resume.is_present()) else {
                return Err(FieldErrors::single("resume", "Resume is required"));
            };
            Ok(ValidatedPayload::Application(JobApplication::from_values(
                values,
                resume.clone(),
            )))
        }
    }
}
