use axum::{
  extract::rejection::{FormRejection, JsonRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};

use crate::domains::forms::{model::SubmissionResponse, service::FormServiceError};

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(SubmissionResponse::failure(self.message));

    (self.status_code, body).into_response()
  }
}

impl From<JsonRejection> for AppError {
  fn from(rejection: JsonRejection) -> Self {
    tracing::warn!("Rejected JSON body: {}", rejection.body_text());
    AppError::bad_request("Invalid request body")
  }
}

impl From<FormRejection> for AppError {
  fn from(rejection: FormRejection) -> Self {
    tracing::warn!("Rejected form body: {}", rejection.body_text());
    AppError::bad_request("Invalid request body")
  }
}

impl From<serde_json::Error> for AppError {
  fn from(error: serde_json::Error) -> Self {
    tracing::warn!("Rejected JSON body: {:?}", error);
    AppError::bad_request("Invalid request body")
  }
}

impl From<FormServiceError> for AppError {
  fn from(error: FormServiceError) -> Self {
    match error {
      FormServiceError::ValidationError(msg) => AppError::bad_request(msg),
      FormServiceError::TransportError(msg) => AppError::internal_server_error(msg),
    }
  }
}
