use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use serde::Serialize;
use tokio::task::AbortHandle;
use tracing::{debug, error, warn};

use super::domain::{FieldErrors, FieldValues, FormKind};
use super::gateway::{DeliveryError, IntakeGateway};
use super::validation::validate;

/// How long the success panel stays up before the form returns to idle.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

/// Lifecycle of one rendered form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl FormPhase {
    pub fn label(&self) -> &'static str {
        match self {
            FormPhase::Idle => "idle",
            FormPhase::Submitting => "submitting",
            FormPhase::Succeeded => "succeeded",
            FormPhase::Failed => "failed",
        }
    }
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// A submission is already in flight; nothing was sent.
    Busy,
    /// The form already succeeded and has not been reset; nothing was sent.
    AlreadySubmitted,
    Delivered,
    Failed { banner: &'static str },
}

/// Point-in-time copy of a form's state for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub kind: FormKind,
    pub phase: FormPhase,
    pub values: FieldValues,
    pub errors: FieldErrors,
    pub banner: Option<&'static str>,
}

impl FormSnapshot {
    pub fn idle(kind: FormKind) -> Self {
        Self {
            kind,
            phase: FormPhase::Idle,
            values: FieldValues::default(),
            errors: FieldErrors::default(),
            banner: None,
        }
    }
}

#[derive(Debug)]
struct ControllerState {
    phase: FormPhase,
    values: FieldValues,
    errors: FieldErrors,
    banner: Option<&'static str>,
    revert: Option<AbortHandle>,
}

impl ControllerState {
    fn cancel_revert(&mut self) {
        if let Some(handle) = self.revert.take() {
            handle.abort();
        }
    }
}

fn lock(state: &Mutex<ControllerState>) -> MutexGuard<'_, ControllerState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns one form instance: validates, delivers once, and tracks the phase.
///
/// The delivery runs on its own task so the phase settles even if the caller
/// stops waiting. The success revert is a task owned by this controller and
/// is aborted on reset or drop.
pub struct SubmissionController<G: ?Sized> {
    kind: FormKind,
    gateway: Arc<G>,
    success_display: Duration,
    state: Arc<Mutex<ControllerState>>,
}

impl<G> SubmissionController<G>
where
    G: IntakeGateway + ?Sized + 'static,
{
    pub fn new(kind: FormKind, gateway: Arc<G>) -> Self {
        Self::with_success_display(kind, gateway, SUCCESS_DISPLAY)
    }

    pub fn with_success_display(kind: FormKind, gateway: Arc<G>, success_display: Duration) -> Self {
        Self {
            kind,
            gateway,
            success_display,
            state: Arc::new(Mutex::new(ControllerState {
                phase: FormPhase::Idle,
                values: FieldValues::default(),
                errors: FieldErrors::default(),
                banner: None,
                revert: None,
            })),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn phase(&self) -> FormPhase {
        lock(&self.state).phase
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let state = lock(&self.state);
        FormSnapshot {
            kind: self.kind,
            phase: state.phase,
            values: state.values.clone(),
            errors: state.errors.clone(),
            banner: state.banner,
        }
    }

    /// Validate `values` and, when accepted, deliver them exactly once.
    pub async fn submit(&self, values: FieldValues) -> SubmitOutcome {
        let payload = {
            let mut state = lock(&self.state);
            match state.phase {
                FormPhase::Submitting => return SubmitOutcome::Busy,
                FormPhase::Succeeded => return SubmitOutcome::AlreadySubmitted,
                FormPhase::Idle | FormPhase::Failed => {}
            }

            state.values = values;
            match validate(self.kind, &state.values) {
                Err(errors) => {
                    state.errors = errors.clone();
                    return SubmitOutcome::Invalid(errors);
                }
                Ok(payload) => {
                    state.errors = FieldErrors::default();
                    state.banner = None;
                    state.cancel_revert();
                    state.phase = FormPhase::Submitting;
                    payload
                }
            }
        };

        let gateway = Arc::clone(&self.gateway);
        let shared = Arc::clone(&self.state);
        let kind = self.kind;
        let success_display = self.success_display;

        let delivery = tokio::spawn(async move {
            let result = gateway.deliver(&payload).await;
            settle(&shared, kind, success_display, result)
        });

        match delivery.await {
            Ok(outcome) => outcome,
            Err(join_error) => {
                error!(form = %self.kind, error = %join_error, "delivery task aborted");
                let banner = self.kind.failure_banner();
                let mut state = lock(&self.state);
                state.phase = FormPhase::Failed;
                state.banner = Some(banner);
                SubmitOutcome::Failed { banner }
            }
        }
    }

    /// Clear the fields and return to idle. Refused while a submission is in flight.
    pub fn reset(&self) -> bool {
        let mut state = lock(&self.state);
        if state.phase == FormPhase::Submitting {
            return false;
        }
        state.cancel_revert();
        state.phase = FormPhase::Idle;
        state.values.clear();
        state.errors = FieldErrors::default();
        state.banner = None;
        true
    }
}

impl<G: ?Sized> Drop for SubmissionController<G> {
    fn drop(&mut self) {
        lock(&self.state).cancel_revert();
    }
}

fn settle(
    shared: &Arc<Mutex<ControllerState>>,
    kind: FormKind,
    success_display: Duration,
    result: Result<(), DeliveryError>,
) -> SubmitOutcome {
    let mut state = lock(shared);
    match result {
        Ok(()) => {
            debug!(form = %kind, "intake API accepted submission");
            state.phase = FormPhase::Succeeded;
            state.values.clear();
            state.cancel_revert();
            state.revert = Some(schedule_revert(Arc::downgrade(shared), success_display));
            SubmitOutcome::Delivered
        }
        Err(err) => {
            match &err {
                DeliveryError::Rejected { status } => {
                    warn!(form = %kind, status, "intake API rejected submission")
                }
                other => error!(form = %kind, error = %other, "submission delivery failed"),
            }
            let banner = kind.failure_banner();
            state.phase = FormPhase::Failed;
            state.banner = Some(banner);
            SubmitOutcome::Failed { banner }
        }
    }
}

fn schedule_revert(state: Weak<Mutex<ControllerState>>, after: Duration) -> AbortHandle {
    let task = tokio::spawn(async move {
        tokio::time::sleep(after).await;
        if let Some(shared) = state.upgrade() {
            let mut state = lock(&shared);
            if state.phase == FormPhase::Succeeded {
                state.phase = FormPhase::Idle;
                state.revert = None;
            }
        }
    });
    task.abort_handle()
}
