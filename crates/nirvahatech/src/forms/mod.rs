//! Lead capture: field rules, the submission state machine, and delivery to
//! the external intake API.
//!
//! Both the contact form and the job application form share one controller.
//! A controller validates the visitor's input against its form's rule table,
//! delivers a valid payload exactly once through an [`IntakeGateway`], and
//! tracks the visible phase (idle, submitting, succeeded, failed).

pub mod domain;
pub mod gateway;
pub mod registry;
pub mod rules;
pub mod submission;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    ContactLead, FieldErrors, FieldValues, FormKind, JobApplication, ResumeUpload,
    ValidatedPayload,
};
pub use gateway::{DeliveryError, HttpIntakeGateway, IntakeGateway};
pub use registry::{FormId, FormRegistry, SharedController};
pub use rules::{FieldSpec, FormSchema, InputKind, Rule, APPLICATION_SCHEMA, CONTACT_SCHEMA};
pub use submission::{FormPhase, FormSnapshot, SubmissionController, SubmitOutcome, SUCCESS_DISPLAY};
pub use validation::validate;
