use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use super::assets::{SITE_CSS, SITE_JS};
use super::careers::{find_job, JobPosting, RESUME_TOO_LARGE};
use super::views::{ApplyOrigin, FormView, SiteViews};
use crate::error::AppError;
use crate::forms::{
    FieldErrors, FieldValues, FormId, FormKind, FormPhase, FormRegistry, FormSnapshot,
    ResumeUpload, SharedController, SubmitOutcome,
};

#[derive(Clone)]
pub(crate) struct SiteState {
    registry: Arc<FormRegistry>,
    views: Arc<SiteViews>,
}

/// Public pages, form posts, and embedded assets.
pub fn site_router(registry: Arc<FormRegistry>) -> Router {
    let upload_limit = registry.config().upload_limit_bytes;
    let state = SiteState {
        registry,
        views: Arc::new(SiteViews::new()),
    };

    Router::new()
        .route("/", get(landing_handler))
        .route("/contact", post(contact_handler))
        .route("/careers", get(careers_handler))
        .route("/careers/:slug", get(job_handler))
        .route(
            "/careers/:slug/apply",
            post(apply_handler).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/forms/:form_id", get(form_status_handler))
        .route("/assets/site.css", get(stylesheet_handler))
        .route("/assets/site.js", get(script_handler))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageQuery {
    form_id: Option<String>,
    apply: Option<String>,
}

#[derive(Debug, Serialize)]
struct FormStatusView {
    form_id: FormId,
    kind: FormKind,
    phase: FormPhase,
    banner: Option<&'static str>,
    errors: FieldErrors,
}

pub(crate) async fn landing_handler(
    State(state): State<SiteState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    let (form_id, controller) = state
        .registry
        .peek(query.form_id.as_deref(), FormKind::Contact);
    let form = contact_view(&state.registry, form_id, snapshot_of(controller, FormKind::Contact));
    Ok(Html(state.views.landing_page(&form)?).into_response())
}

pub(crate) async fn contact_handler(
    State(state): State<SiteState>,
    Form(mut fields): Form<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let posted_id = fields.remove("form_id");
    let (form_id, controller) = state.registry.resolve(posted_id.as_deref(), FormKind::Contact);

    let values = schema_values(FormKind::Contact, fields);
    let outcome = controller.submit(values).await;
    log_outcome(FormKind::Contact, form_id, &outcome);

    let form = contact_view(&state.registry, form_id, controller.snapshot());
    let page = state.views.landing_page(&form)?;
    Ok((outcome_status(&outcome), Html(page)).into_response())
}

pub(crate) async fn careers_handler(
    State(state): State<SiteState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    let Some(job) = query.apply.as_deref().and_then(find_job) else {
        return Ok(Html(state.views.careers_page(None)?).into_response());
    };

    let (form_id, controller) = state
        .registry
        .peek(query.form_id.as_deref(), FormKind::Application);
    let snapshot = snapshot_of(controller, FormKind::Application);
    let form = application_view(&state.registry, form_id, snapshot, job, ApplyOrigin::Listing);
    Ok(Html(state.views.careers_page(Some((job, &form)))?).into_response())
}

pub(crate) async fn job_handler(
    State(state): State<SiteState>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    let Some(job) = find_job(&slug) else {
        return job_not_found(&state.views);
    };

    let (form_id, controller) = state
        .registry
        .peek(query.form_id.as_deref(), FormKind::Application);
    let snapshot = snapshot_of(controller, FormKind::Application);
    let form = application_view(&state.registry, form_id, snapshot, job, ApplyOrigin::Detail);
    Ok(Html(state.views.job_page(job, &form)?).into_response())
}

pub(crate) async fn apply_handler(
    State(state): State<SiteState>,
    Path(slug): Path<String>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let Some(job) = find_job(&slug) else {
        return job_not_found(&state.views);
    };

    let mut posted = read_application(multipart).await?;
    let posted_id = posted.text.remove("form_id");
    let origin = ApplyOrigin::parse(posted.text.remove("return_to").as_deref());
    let mut values = schema_values(FormKind::Application, posted.text);

    if posted.oversized {
        // Nothing is sent; the applicant gets the form back with the resume flagged.
        let (form_id, _) = state.registry.peek(posted_id.as_deref(), FormKind::Application);
        let mut snapshot = FormSnapshot::idle(FormKind::Application);
        snapshot.values = values;
        snapshot.errors = FieldErrors::single("resume", RESUME_TOO_LARGE);
        warn!(job = job.slug, %form_id, "resume exceeded the upload limit");

        let form = application_view(&state.registry, form_id, snapshot, job, origin);
        let page = application_page(&state.views, job, &form, origin)?;
        return Ok((StatusCode::PAYLOAD_TOO_LARGE, Html(page)).into_response());
    }

    let (form_id, controller) = state
        .registry
        .resolve(posted_id.as_deref(), FormKind::Application);
    if let Some(resume) = posted.resume {
        values.set_resume(resume);
    }

    let outcome = controller.submit(values).await;
    log_outcome(FormKind::Application, form_id, &outcome);
    if outcome == SubmitOutcome::Delivered {
        info!(job = job.slug, %form_id, "application received for open position");
    }

    let form = application_view(&state.registry, form_id, controller.snapshot(), job, origin);
    let page = application_page(&state.views, job, &form, origin)?;
    Ok((outcome_status(&outcome), Html(page)).into_response())
}

pub(crate) async fn form_status_handler(
    State(state): State<SiteState>,
    Path(raw_id): Path<String>,
) -> Response {
    let Some((form_id, controller)) = FormId::parse(&raw_id)
        .and_then(|id| state.registry.find(&id).map(|controller| (id, controller)))
    else {
        let payload = json!({
            "error": "form not found",
        });
        return (StatusCode::NOT_FOUND, Json(payload)).into_response();
    };

    let snapshot = controller.snapshot();
    let view = FormStatusView {
        form_id,
        kind: snapshot.kind,
        phase: snapshot.phase,
        banner: snapshot.banner,
        errors: snapshot.errors,
    };
    (StatusCode::OK, Json(view)).into_response()
}

async fn stylesheet_handler() -> Response {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        SITE_CSS,
    )
        .into_response()
}

async fn script_handler() -> Response {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SITE_JS,
    )
        .into_response()
}

/// Status code a form post answers with; the body is always the re-rendered page.
pub fn outcome_status(outcome: &SubmitOutcome) -> StatusCode {
    match outcome {
        SubmitOutcome::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmitOutcome::Busy => StatusCode::CONFLICT,
        SubmitOutcome::Failed { .. } => StatusCode::BAD_GATEWAY,
        SubmitOutcome::Delivered | SubmitOutcome::AlreadySubmitted => StatusCode::OK,
    }
}

fn log_outcome(kind: FormKind, form_id: FormId, outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Delivered => info!(form = %kind, %form_id, "submission delivered"),
        SubmitOutcome::Invalid(errors) => {
            info!(form = %kind, %form_id, invalid_fields = errors.len(), "submission rejected by validation")
        }
        SubmitOutcome::Busy | SubmitOutcome::AlreadySubmitted => {
            warn!(form = %kind, %form_id, "duplicate submission ignored")
        }
        SubmitOutcome::Failed { .. } => {}
    }
}

fn job_not_found(views: &SiteViews) -> Result<Response, AppError> {
    Ok((StatusCode::NOT_FOUND, Html(views.job_not_found_page()?)).into_response())
}

fn application_page(
    views: &SiteViews,
    job: &JobPosting,
    form: &FormView,
    origin: ApplyOrigin,
) -> Result<String, minijinja::Error> {
    match origin {
        ApplyOrigin::Listing => views.careers_page(Some((job, form))),
        ApplyOrigin::Detail => views.job_page(job, form),
    }
}

fn snapshot_of(controller: Option<SharedController>, kind: FormKind) -> FormSnapshot {
    controller
        .map(|controller| controller.snapshot())
        .unwrap_or_else(|| FormSnapshot::idle(kind))
}

/// Keep only the text fields the form's schema declares.
fn schema_values(kind: FormKind, mut posted: HashMap<String, String>) -> FieldValues {
    let mut values = FieldValues::new();
    for spec in kind.schema().fields {
        if let Some(value) = posted.remove(spec.name) {
            values.set(spec.name, value);
        }
    }
    values
}

#[derive(Debug, Default)]
struct PostedApplication {
    text: HashMap<String, String>,
    resume: Option<ResumeUpload>,
    /// The body hit the upload limit; fields after that point are missing.
    oversized: bool,
}

async fn read_application(mut multipart: Multipart) -> Result<PostedApplication, AppError> {
    let mut posted = PostedApplication::default();

    loop {
        match read_part(&mut multipart, &mut posted).await {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) if err.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                posted.oversized = true;
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(posted)
}

/// Read the next part into `posted`, returning false once the body is done.
async fn read_part(
    multipart: &mut Multipart,
    posted: &mut PostedApplication,
) -> Result<bool, MultipartError> {
    let Some(field) = multipart.next_field().await? else {
        return Ok(false);
    };
    let Some(name) = field.name().map(str::to_string) else {
        return Ok(true);
    };

    if name == "resume" {
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        posted.resume = Some(ResumeUpload::new(file_name, content_type, bytes));
    } else {
        let value = field.text().await?;
        posted.text.insert(name, value);
    }
    Ok(true)
}

fn contact_view(registry: &FormRegistry, form_id: FormId, snapshot: FormSnapshot) -> FormView {
    FormView {
        form_id,
        snapshot,
        revert_after: registry.config().success_display,
        revert_href: format!("/?form_id={form_id}#contact-section"),
    }
}

fn application_view(
    registry: &FormRegistry,
    form_id: FormId,
    snapshot: FormSnapshot,
    job: &JobPosting,
    origin: ApplyOrigin,
) -> FormView {
    let revert_href = match origin {
        ApplyOrigin::Listing => {
            format!("/careers?apply={}&form_id={form_id}#apply-dialog", job.slug)
        }
        ApplyOrigin::Detail => format!("/careers/{}?form_id={form_id}#apply", job.slug),
    };

    FormView {
        form_id,
        snapshot,
        revert_after: registry.config().success_display,
        revert_href,
    }
}
