use async_trait::async_trait;
use std::{error::Error, sync::Arc};
use validator::Validate;

use super::{
  model::{ContactSubmission, ProjectInquiry, SubscriptionRequest, REQUIRED_FIELDS_MESSAGE},
  templates,
};
use crate::email::{EmailMessage, Mailer};

pub const CONTACT_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";
pub const INQUIRY_FAILED_MESSAGE: &str = "Failed to submit inquiry.";
pub const SUBSCRIPTION_FAILED_MESSAGE: &str = "Subscription failed.";

#[derive(Debug)]
pub enum FormServiceError {
  ValidationError(String),
  TransportError(String),
}

impl Error for FormServiceError {}

impl std::fmt::Display for FormServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      FormServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      FormServiceError::TransportError(msg) => write!(f, "Transport Error: {}", msg),
    }
  }
}

#[async_trait]
pub trait FormService: Send + Sync {
  async fn submit_contact(&self, req: ContactSubmission) -> Result<(), FormServiceError>;
  async fn submit_project_inquiry(&self, req: ProjectInquiry) -> Result<(), FormServiceError>;
  async fn subscribe(&self, req: SubscriptionRequest) -> Result<(), FormServiceError>;
}

pub struct FormServiceImpl {
  mailer: Arc<dyn Mailer>,
  from_email: String,
  operator_email: String,
}

impl FormServiceImpl {
  pub fn new(mailer: Arc<dyn Mailer>, from_email: impl Into<String>, operator_email: impl Into<String>) -> Self {
    Self {
      mailer,
      from_email: from_email.into(),
      operator_email: operator_email.into(),
    }
  }

  async fn deliver(&self, message: EmailMessage, failure_message: &str) -> Result<(), FormServiceError> {
    match self.mailer.send(&message).await {
      Ok(()) => {
        tracing::info!(to = %message.to, subject = %message.subject, "Email sent");
        Ok(())
      }
      Err(e) => {
        tracing::error!("Error sending email to {:?}: {:?}", message.to, e);
        Err(FormServiceError::TransportError(failure_message.to_string()))
      }
    }
  }
}

#[async_trait]
impl FormService for FormServiceImpl {
  async fn submit_contact(&self, req: ContactSubmission) -> Result<(), FormServiceError> {
    req
      .validate()
      .map_err(|_| FormServiceError::ValidationError(REQUIRED_FIELDS_MESSAGE.to_string()))?;

    let message = EmailMessage::new(
      &self.from_email,
      &self.operator_email,
      templates::contact_subject(&req),
      templates::contact_body(&req),
    );

    self.deliver(message, CONTACT_FAILED_MESSAGE).await
  }

  async fn submit_project_inquiry(&self, req: ProjectInquiry) -> Result<(), FormServiceError> {
    let message = EmailMessage::new(
      &self.from_email,
      &self.operator_email,
      templates::inquiry_subject(&req),
      templates::inquiry_body(&req),
    );

    self.deliver(message, INQUIRY_FAILED_MESSAGE).await
  }

  async fn subscribe(&self, req: SubscriptionRequest) -> Result<(), FormServiceError> {
    let email = req.email.unwrap_or_default();
    tracing::info!("New subscription: {}", email);

    let message = EmailMessage::new(&self.from_email, email, templates::WELCOME_SUBJECT, templates::welcome_body());

    self.deliver(message, SUBSCRIPTION_FAILED_MESSAGE).await
  }
}
