use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::Notify;

use crate::forms::domain::{FieldValues, ResumeUpload, ValidatedPayload};
use crate::forms::gateway::{DeliveryError, IntakeGateway};

pub(super) fn contact_values() -> FieldValues {
    FieldValues::from_pairs([
        ("name", "Jane Doe"),
        ("email", "jane@acme.io"),
        ("company", "Acme Inc."),
        ("job_title", "CTO"),
        ("phone", ""),
        (
            "project_description",
            "Our deploys take two hours and break weekly.",
        ),
    ])
}

pub(super) fn resume() -> ResumeUpload {
    ResumeUpload::new(
        "jane-doe.pdf",
        Some("application/pdf".to_string()),
        Bytes::from_static(b"%PDF-1.4 resume"),
    )
}

pub(super) fn application_values() -> FieldValues {
    FieldValues::from_pairs([
        ("first_name", "Jane"),
        ("last_name", "Doe"),
        ("email", "jane@example.com"),
        ("phone", "+1 (555) 123-4567"),
        ("linkedin_url", ""),
        ("note", ""),
    ])
    .with_resume(resume())
}

/// Records every payload and answers from a queue of scripted rejections,
/// accepting once the queue is empty.
#[derive(Default)]
pub(super) struct StubGateway {
    delivered: Mutex<Vec<ValidatedPayload>>,
    rejections: Mutex<VecDeque<u16>>,
    reject_all: Option<u16>,
}

impl StubGateway {
    pub(super) fn rejecting(status: u16) -> Self {
        Self {
            reject_all: Some(status),
            ..Self::default()
        }
    }

    pub(super) fn rejecting_once(status: u16) -> Self {
        Self {
            rejections: Mutex::new(VecDeque::from([status])),
            ..Self::default()
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.delivered.lock().expect("gateway mutex poisoned").len()
    }

    pub(super) fn payloads(&self) -> Vec<ValidatedPayload> {
        self.delivered.lock().expect("gateway mutex poisoned").clone()
    }
}

#[async_trait]
impl IntakeGateway for StubGateway {
    async fn deliver(&self, payload: &ValidatedPayload) -> Result<(), DeliveryError> {
        self.delivered
            .lock()
            .expect("gateway mutex poisoned")
            .push(payload.clone());

        let scripted = self
            .rejections
            .lock()
            .expect("gateway mutex poisoned")
            .pop_front();
        match scripted.or(self.reject_all) {
            Some(status) => Err(DeliveryError::Rejected { status }),
            None => Ok(()),
        }
    }
}

/// Holds every delivery until the test releases it.
#[derive(Default)]
pub(super) struct GatedGateway {
    pub(super) release: Arc<Notify>,
    calls: AtomicUsize,
}

impl GatedGateway {
    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IntakeGateway for GatedGateway {
    async fn deliver(&self, _payload: &ValidatedPayload) -> Result<(), DeliveryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.release.notified().await;
        Ok(())
    }
}
