use bytes::Bytes;
use metrics_exporter_prometheus::PrometheusHandle;
use nirvahatech::error::AppError;
use nirvahatech::forms::{FieldValues, ResumeUpload};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parse a JSON object of field values; `null` entries are treated as blank.
pub(crate) fn parse_field_values(raw: &str) -> Result<FieldValues, AppError> {
    let entries: BTreeMap<String, Option<String>> = serde_json::from_str(raw)?;
    Ok(FieldValues::from_pairs(
        entries
            .into_iter()
            .map(|(field, value)| (field, value.unwrap_or_default())),
    ))
}

pub(crate) fn load_field_values(
    values_path: &Path,
    resume_path: Option<&Path>,
) -> Result<FieldValues, AppError> {
    let raw = std::fs::read_to_string(values_path)?;
    let mut values = parse_field_values(&raw)?;
    if let Some(path) = resume_path {
        values.set_resume(load_resume(path)?);
    }
    Ok(values)
}

pub(crate) fn load_resume(path: &Path) -> Result<ResumeUpload, AppError> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content_type = mime_guess::from_path(path)
        .first()
        .map(|guessed: mime::Mime| guessed.essence_str().to_string());

    Ok(ResumeUpload::new(file_name, content_type, Bytes::from(bytes)))
}
