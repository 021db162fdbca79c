use std::sync::Arc;

use crate::cli::{FormArgs, SubmitArgs};
use crate::infra::load_field_values;
use nirvahatech::config::{AppConfig, IntakeConfig};
use nirvahatech::error::AppError;
use nirvahatech::forms::{
    validate, FieldErrors, HttpIntakeGateway, SubmissionController, SubmitOutcome,
};
use nirvahatech::site::JOBS;
use nirvahatech::telemetry;

pub(crate) fn run_check(args: FormArgs) -> Result<(), AppError> {
    let values = load_field_values(&args.values, args.resume.as_deref())?;
    match validate(args.kind, &values) {
        Ok(_) => println!("{} form is valid", args.kind),
        Err(errors) => print!("{}", describe_errors(&errors)),
    }
    Ok(())
}

pub(crate) async fn run_submit(args: SubmitArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(api_base) = args.api_base.as_deref() {
        config.intake = IntakeConfig::new(api_base)?;
    }
    telemetry::init(&config.telemetry)?;

    let form = args.form;
    let values = load_field_values(&form.values, form.resume.as_deref())?;
    let gateway = Arc::new(HttpIntakeGateway::new(config.intake)?);
    let controller = SubmissionController::new(form.kind, gateway);

    let outcome = controller.submit(values).await;
    println!("{}", describe_outcome(&outcome));
    Ok(())
}

pub(crate) fn run_jobs() {
    for job in JOBS.iter() {
        println!(
            "{:<28} {:<44} {:<22} {}",
            job.slug,
            job.title,
            job.location,
            job.employment.label()
        );
    }
}

fn describe_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}\n"))
        .collect()
}

fn describe_outcome(outcome: &SubmitOutcome) -> String {
    match outcome {
        SubmitOutcome::Delivered => "delivered to the intake API".to_string(),
        SubmitOutcome::Invalid(errors) => {
            format!("not sent, {} invalid field(s):\n{}", errors.len(), describe_errors(errors).trim_end())
        }
        SubmitOutcome::Failed { banner } => format!("delivery failed: {banner}"),
        SubmitOutcome::Busy => "a submission is already in flight".to_string(),
        SubmitOutcome::AlreadySubmitted => "already submitted".to_string(),
    }
}
