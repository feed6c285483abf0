use std::sync::Arc;

use crate::{
  config::Config,
  domains::forms::{
    model::{ContactSubmission, ProjectInquiry, SubscriptionRequest},
    service::{FormService, FormServiceError, FormServiceImpl},
  },
  email::Mailer,
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn submit_contact(
    &self,
    req: ContactSubmission,
  ) -> impl std::future::Future<Output = Result<(), FormServiceError>> + Send;
  fn submit_project_inquiry(
    &self,
    req: ProjectInquiry,
  ) -> impl std::future::Future<Output = Result<(), FormServiceError>> + Send;
  fn subscribe(
    &self,
    req: SubscriptionRequest,
  ) -> impl std::future::Future<Output = Result<(), FormServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub form_service: Arc<FormServiceImpl>,
}

impl SharedAppState {
  pub fn new(mailer: Arc<dyn Mailer>, config: &Config) -> Self {
    let form_service = Arc::new(FormServiceImpl::new(
      mailer,
      config.smtp.from_email.clone(),
      config.operator_email.clone(),
    ));

    Self { form_service }
  }
}

impl AppState for SharedAppState {
  async fn submit_contact(&self, req: ContactSubmission) -> Result<(), FormServiceError> {
    self.form_service.submit_contact(req).await
  }

  async fn submit_project_inquiry(&self, req: ProjectInquiry) -> Result<(), FormServiceError> {
    self.form_service.submit_project_inquiry(req).await
  }

  async fn subscribe(&self, req: SubscriptionRequest) -> Result<(), FormServiceError> {
    self.form_service.subscribe(req).await
  }
}
