//! View models for the landing and careers pages.
//!
//! Markup lives in the embedded templates; this module decides what each
//! template sees.

use std::time::Duration;

use minijinja::{context, Environment};
use serde::Serialize;

use super::careers::{
    JobPosting, APPLICATION_SUCCESS_BODY, APPLICATION_SUCCESS_TITLE, CAREERS_HEADLINE,
    CAREERS_PITCH, JOBS, OPEN_POSITIONS_PITCH,
};
use super::content::{self, Stat};
use super::templates;
use crate::forms::{FieldSpec, FormId, FormKind, FormPhase, FormSnapshot, InputKind};

/// Which careers surface an application form was rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOrigin {
    /// The in-page dialog on `/careers`.
    Listing,
    /// The per-job page at `/careers/:slug`.
    Detail,
}

impl ApplyOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplyOrigin::Listing => "listing",
            ApplyOrigin::Detail => "detail",
        }
    }

    /// Anything other than `listing` falls back to the detail page.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("listing") => ApplyOrigin::Listing,
            _ => ApplyOrigin::Detail,
        }
    }
}

/// One form instance as it should appear on the page.
#[derive(Debug, Clone)]
pub struct FormView {
    pub form_id: FormId,
    pub snapshot: FormSnapshot,
    pub revert_after: Duration,
    /// Page the success panel navigates back to once it expires.
    pub revert_href: String,
}

/// Renders every page of the site.
pub struct SiteViews {
    env: Environment<'static>,
}

impl Default for SiteViews {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteViews {
    pub fn new() -> Self {
        Self {
            env: templates::environment(),
        }
    }

    pub fn landing_page(&self, contact: &FormView) -> Result<String, minijinja::Error> {
        let stats: Vec<StatContext> = content::STATS.iter().map(StatContext::from).collect();
        self.render(
            "landing.html",
            context! {
                title => "DevOps Consulting",
                home => true,
                hero => content::HERO,
                story => context! {
                    headline => content::STORY_HEADLINE,
                    pitch => content::STORY_PITCH,
                    detail => content::STORY_DETAIL,
                },
                stats => stats,
                partner => context! {
                    headline => content::PARTNER_HEADLINE,
                    pitch => content::PARTNER_PITCH,
                    steps => content::ENGAGEMENT_STEPS,
                },
                symptoms => context! {
                    headline => content::SYMPTOMS_HEADLINE,
                    pitch => content::SYMPTOMS_PITCH,
                    closer => content::SYMPTOMS_CLOSER,
                    cards => content::SYMPTOMS,
                },
                services => context! {
                    headline => content::SERVICES_HEADLINE,
                    pitch => content::SERVICES_PITCH,
                    cards => content::SERVICES,
                },
                certificates => context! {
                    headline => content::CERTIFICATES_HEADLINE,
                    pitch => content::CERTIFICATES_PITCH,
                    items => content::CERTIFICATES,
                },
                testimonials => content::TESTIMONIALS,
                contact => context! {
                    headline => content::CONTACT_HEADLINE,
                    pitch => content::CONTACT_PITCH,
                    offer => content::CONTACT_OFFER,
                },
                form => FormContext::new(contact, None, None),
            },
        )
    }

    /// Job listing, with the application dialog open when a job is given.
    pub fn careers_page(
        &self,
        apply: Option<(&JobPosting, &FormView)>,
    ) -> Result<String, minijinja::Error> {
        let apply_job = apply.map(|(job, _)| job);
        let form =
            apply.map(|(job, view)| FormContext::new(view, Some(job), Some(ApplyOrigin::Listing)));
        self.render(
            "careers.html",
            context! {
                title => "Careers",
                home => false,
                headline => CAREERS_HEADLINE,
                pitch => CAREERS_PITCH,
                positions_pitch => OPEN_POSITIONS_PITCH,
                jobs => &JOBS,
                apply_job => apply_job,
                form => form,
            },
        )
    }

    pub fn job_page(&self, job: &JobPosting, form: &FormView) -> Result<String, minijinja::Error> {
        self.render(
            "job.html",
            context! {
                title => job.title,
                home => false,
                job => job,
                form => FormContext::new(form, Some(job), Some(ApplyOrigin::Detail)),
            },
        )
    }

    pub fn job_not_found_page(&self) -> Result<String, minijinja::Error> {
        self.render(
            "not_found.html",
            context! {
                title => "Job Not Found",
                home => false,
            },
        )
    }

    /// The application form alone, as embedded in either careers surface.
    pub fn application_form(
        &self,
        job: &JobPosting,
        form: &FormView,
        origin: ApplyOrigin,
    ) -> Result<String, minijinja::Error> {
        self.render(
            "form.html",
            context! { form => FormContext::new(form, Some(job), Some(origin)) },
        )
    }

    pub fn contact_form(&self, form: &FormView) -> Result<String, minijinja::Error> {
        self.render("form.html", context! { form => FormContext::new(form, None, None) })
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}

#[derive(Debug, Serialize)]
struct StatContext {
    target: String,
    decimals: u8,
    prefix: &'static str,
    suffix: &'static str,
    display: String,
    label: &'static str,
    description: &'static str,
}

impl From<&Stat> for StatContext {
    fn from(stat: &Stat) -> Self {
        Self {
            target: stat.value.to_string(),
            decimals: stat.decimals,
            prefix: stat.prefix,
            suffix: stat.suffix,
            display: stat.display(),
            label: stat.label,
            description: stat.description,
        }
    }
}

#[derive(Debug, Serialize)]
struct FormContext<'a> {
    form_id: FormId,
    kind: FormKind,
    phase: FormPhase,
    job_slug: Option<&'a str>,
    return_to: Option<&'static str>,
    multipart: bool,
    banner: Option<&'static str>,
    fields: Vec<FieldContext<'a>>,
    submitting: bool,
    submit_label: &'static str,
    privacy: Option<&'static str>,
    success: Option<SuccessContext<'a>>,
}

#[derive(Debug, Serialize)]
struct FieldContext<'a> {
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
    /// Input `type`, or `textarea`.
    control: &'static str,
    value: &'a str,
    error: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct SuccessContext<'a> {
    title: &'static str,
    message: &'static str,
    revert_ms: u64,
    revert_href: &'a str,
}

impl<'a> FormContext<'a> {
    fn new(view: &'a FormView, job: Option<&'a JobPosting>, origin: Option<ApplyOrigin>) -> Self {
        let snapshot = &view.snapshot;
        let kind = snapshot.kind;

        let success = (snapshot.phase == FormPhase::Succeeded).then(|| {
            let (title, message) = match kind {
                FormKind::Contact => (content::CONTACT_SUCCESS_TITLE, content::CONTACT_SUCCESS_BODY),
                FormKind::Application => (APPLICATION_SUCCESS_TITLE, APPLICATION_SUCCESS_BODY),
            };
            SuccessContext {
                title,
                message,
                revert_ms: u64::try_from(view.revert_after.as_millis()).unwrap_or(u64::MAX),
                revert_href: &view.revert_href,
            }
        });

        Self {
            form_id: view.form_id,
            kind,
            phase: snapshot.phase,
            job_slug: job.map(|job| job.slug),
            return_to: origin.map(|origin| origin.as_str()),
            multipart: kind == FormKind::Application,
            banner: snapshot.banner,
            fields: kind
                .schema()
                .fields
                .iter()
                .map(|spec| FieldContext::new(spec, snapshot))
                .collect(),
            submitting: snapshot.phase == FormPhase::Submitting,
            submit_label: match kind {
                FormKind::Contact => content::CONTACT_SUBMIT,
                FormKind::Application => "Submit Application",
            },
            privacy: (kind == FormKind::Contact).then_some(content::CONTACT_PRIVACY),
            success,
        }
    }
}

impl<'a> FieldContext<'a> {
    fn new(spec: &FieldSpec, snapshot: &'a FormSnapshot) -> Self {
        Self {
            name: spec.name,
            label: spec.label,
            placeholder: spec.placeholder,
            control: match spec.input {
                InputKind::Text => "text",
                InputKind::Email => "email",
                InputKind::Tel => "tel",
                InputKind::Url => "url",
                InputKind::TextArea => "textarea",
                InputKind::File => "file",
            },
            value: snapshot.values.text(spec.name),
            error: snapshot.errors.get(spec.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FieldErrors, FieldValues};
    use crate::site::careers::find_job;

    fn views() -> SiteViews {
        SiteViews::new()
    }

    fn view(kind: FormKind) -> FormView {
        FormView {
            form_id: FormId::generate(),
            snapshot: FormSnapshot::idle(kind),
            revert_after: Duration::from_secs(5),
            revert_href: "/#contact-section".to_string(),
        }
    }

    #[test]
    fn echoed_values_are_escaped() {
        let mut form = view(FormKind::Contact);
        form.snapshot.values = FieldValues::new().with("name", "<script>alert(1)</script>");
        form.snapshot.errors = FieldErrors::single("email", "Invalid email address");

        let html = views().contact_form(&form).expect("form renders");

        assert!(html.contains("value=\"&lt;script&gt;alert(1)"));
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("<p class=\"field-error\" id=\"email-error\">Invalid email address</p>"));
        assert!(html.contains("aria-invalid=\"true\""));
    }

    #[test]
    fn succeeded_form_renders_success_panel_with_revert_delay() {
        let mut form = view(FormKind::Contact);
        form.snapshot.phase = FormPhase::Succeeded;

        let html = views().contact_form(&form).expect("form renders");

        assert!(html.contains("Thank You!"));
        assert!(html.contains("data-success-revert=\"5000\""));
        assert!(html.contains("#contact-section\""));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn submitting_form_disables_the_button() {
        let mut form = view(FormKind::Contact);
        form.snapshot.phase = FormPhase::Submitting;

        let html = views().contact_form(&form).expect("form renders");

        assert!(html.contains("disabled>Submitting...</button>"));
    }

    #[test]
    fn application_form_is_multipart_and_tracks_origin() {
        let job = find_job("finops-analyst").expect("job exists");
        let html = views()
            .application_form(job, &view(FormKind::Application), ApplyOrigin::Listing)
            .expect("form renders");

        assert!(html.contains("action=\"/careers/finops-analyst/apply\""));
        assert!(html.contains("enctype=\"multipart/form-data\""));
        assert!(html.contains("name=\"return_to\" value=\"listing\""));
        assert!(html.contains("type=\"file\""));
    }

    #[test]
    fn failure_banner_is_shown_above_fields() {
        let mut form = view(FormKind::Application);
        form.snapshot.phase = FormPhase::Failed;
        form.snapshot.banner = Some(FormKind::Application.failure_banner());
        let job = find_job("devops-intern").expect("job exists");

        let html = views()
            .application_form(job, &form, ApplyOrigin::Detail)
            .expect("form renders");

        assert!(html.contains("role=\"alert\">Failed to submit application."));
    }

    #[test]
    fn careers_listing_only_opens_dialog_when_applying() {
        let views = views();
        assert!(!views.careers_page(None).expect("listing renders").contains("<dialog"));

        let job = find_job("kubernetes-specialist").expect("job exists");
        let html = views
            .careers_page(Some((job, &view(FormKind::Application))))
            .expect("listing renders");
        assert!(html.contains("<dialog id=\"apply-dialog\" open>"));
        assert!(html.contains("Apply for Kubernetes Specialist"));
    }

    #[test]
    fn landing_page_has_every_section() {
        let html = views()
            .landing_page(&view(FormKind::Contact))
            .expect("landing renders");
        for id in [
            "about-section",
            "symptoms-section",
            "services-section",
            "testimonials-section",
            "contact-section",
        ] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing {id}");
        }
        assert!(html.contains("data-target=\"99.99\""));
    }

    #[test]
    fn job_page_lists_sections_and_escapes_headings() {
        let job = find_job("devops-intern").expect("job exists");
        let html = views()
            .job_page(job, &view(FormKind::Application))
            .expect("job page renders");

        assert!(html.contains("<h1>DevOps Intern</h1>"));
        assert!(html.contains("What You&#x27;ll Do"));
        assert!(html.contains("name=\"return_to\" value=\"detail\""));
        assert!(html.contains("<span>Internship</span>"));
    }

    #[test]
    fn nav_links_point_home_from_inner_pages() {
        let html = views().job_not_found_page().expect("page renders");
        assert!(html.contains("Job Not Found"));
        assert!(html.contains("href=\"/#about-section\""));
    }

    #[test]
    fn origin_defaults_to_detail() {
        assert_eq!(ApplyOrigin::parse(Some("listing")), ApplyOrigin::Listing);
        assert_eq!(ApplyOrigin::parse(Some("elsewhere")), ApplyOrigin::Detail);
        assert_eq!(ApplyOrigin::parse(None), ApplyOrigin::Detail);
    }
}
