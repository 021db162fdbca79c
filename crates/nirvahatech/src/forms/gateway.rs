use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::config::IntakeConfig;

use super::domain::{ContactLead, JobApplication, ValidatedPayload};

/// Outbound boundary to the lead and application intake API.
#[async_trait]
pub trait IntakeGateway: Send + Sync {
    /// Send one payload. Any 2xx status is success; nothing else is read.
    async fn deliver(&self, payload: &ValidatedPayload) -> Result<(), DeliveryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("unable to build intake client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("intake API unreachable: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("intake API rejected the submission with status {status}")]
    Rejected { status: u16 },
    #[error("unable to encode submission: {0}")]
    Encoding(String),
}

/// reqwest-backed gateway: JSON for leads, multipart for applications.
#[derive(Debug, Clone)]
pub struct HttpIntakeGateway {
    client: Client,
    intake: IntakeConfig,
}

impl HttpIntakeGateway {
    /// No request timeout is set; a hung request waits on the transport.
    pub fn new(intake: IntakeConfig) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .user_agent(concat!("nirvahatech-site/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(DeliveryError::Client)?;

        Ok(Self { client, intake })
    }

    pub fn intake(&self) -> &IntakeConfig {
        &self.intake
    }

    async fn send_lead(&self, lead: &ContactLead) -> Result<reqwest::Response, DeliveryError> {
        self.client
            .post(self.intake.leads_url())
            .json(lead)
            .send()
            .await
            .map_err(DeliveryError::Transport)
    }

    async fn send_application(
        &self,
        application: &JobApplication,
    ) -> Result<reqwest::Response, DeliveryError> {
        let form = application_form(application)?;
        self.client
            .post(self.intake.applications_url())
            .multipart(form)
            .send()
            .await
            .map_err(DeliveryError::Transport)
    }
}

#[async_trait]
impl IntakeGateway for HttpIntakeGateway {
    async fn deliver(&self, payload: &ValidatedPayload) -> Result<(), DeliveryError> {
        let response = match payload {
            ValidatedPayload::Lead(lead) => self.send_lead(lead).await?,
            ValidatedPayload::Application(application) => {
                self.send_application(application).await?
            }
        };

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(DeliveryError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

fn application_form(application: &JobApplication) -> Result<Form, DeliveryError> {
    let resume = &application.resume;
    let part = Part::bytes(resume.bytes.to_vec())
        .file_name(resume.file_name.clone())
        .mime_str(resume.mime().as_ref())
        .map_err(|err| DeliveryError::Encoding(err.to_string()))?;

    let mut form = Form::new()
        .text("first_name", application.first_name.clone())
        .text("last_name", application.last_name.clone())
        .text("email", application.email.clone())
        .text("phone", application.phone.clone());

    if let Some(linkedin_url) = &application.linkedin_url {
        form = form.text("linkedin_url", linkedin_url.clone());
    }
    if let Some(note) = &application.note {
        form = form.text("note", note.clone());
    }

    Ok(form.part("resume", part))
}
