use axum::{
  extract::{FromRequest, Request, State},
  http::header::CONTENT_TYPE,
  response::Json as JsonResponse,
  routing::post,
  Form, Json, Router,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::model::{ContactSubmission, ProjectInquiry, SubmissionResponse, SubscriptionRequest};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub const CONTACT_SENT_MESSAGE: &str = "Message sent successfully!";
pub const INQUIRY_SENT_MESSAGE: &str = "Project inquiry submitted successfully!";
pub const SUBSCRIBED_MESSAGE: &str = "Subscribed successfully!";

/// Form body accepted as JSON or as `application/x-www-form-urlencoded`.
///
/// A JSON body that is not an object, or a request with any other content
/// type, carries no usable fields and is read as an empty form.
pub struct FormPayload<T>(pub T);

impl<S, T> FromRequest<S> for FormPayload<T>
where
  S: Send + Sync,
  T: DeserializeOwned + Default + Send,
{
  type Rejection = AppError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let content_type = req
      .headers()
      .get(CONTENT_TYPE)
      .and_then(|value| value.to_str().ok())
      .unwrap_or_default()
      .to_ascii_lowercase();

    if content_type.starts_with("application/x-www-form-urlencoded") {
      let Form(payload) = Form::<T>::from_request(req, state).await?;
      return Ok(Self(payload));
    }

    if content_type.starts_with("application/") && content_type.contains("json") {
      let Json(value) = Json::<Value>::from_request(req, state).await?;
      if !value.is_object() {
        return Ok(Self(T::default()));
      }
      let payload = serde_json::from_value(value)?;
      return Ok(Self(payload));
    }

    Ok(Self(T::default()))
  }
}

pub fn form_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/contact", post(contact_handler))
    .route("/project-inquiry", post(project_inquiry_handler))
    .route("/subscribe", post(subscribe_handler))
}

pub async fn contact_handler(
  State(state): State<SharedAppState>,
  FormPayload(payload): FormPayload<ContactSubmission>,
) -> Result<JsonResponse<SubmissionResponse>, AppError> {
  state
    .submit_contact(payload)
    .await
    .map(|()| JsonResponse(SubmissionResponse::success(CONTACT_SENT_MESSAGE)))
    .map_err(Into::into)
}

pub async fn project_inquiry_handler(
  State(state): State<SharedAppState>,
  FormPayload(payload): FormPayload<ProjectInquiry>,
) -> Result<JsonResponse<SubmissionResponse>, AppError> {
  state
    .submit_project_inquiry(payload)
    .await
    .map(|()| JsonResponse(SubmissionResponse::success(INQUIRY_SENT_MESSAGE)))
    .map_err(Into::into)
}

pub async fn subscribe_handler(
  State(state): State<SharedAppState>,
  FormPayload(payload): FormPayload<SubscriptionRequest>,
) -> Result<JsonResponse<SubmissionResponse>, AppError> {
  state
    .subscribe(payload)
    .await
    .map(|()| JsonResponse(SubmissionResponse::success(SUBSCRIBED_MESSAGE)))
    .map_err(Into::into)
}

#[cfg(test)]
mod tests {
  use super::super::model::SubmissionResponse;
  use crate::email::{EmailMessage, MockMailer};
  use crate::test_support::{app_with_mailer, post_form, post_json, post_raw};
  use axum::http::StatusCode;
  use serde_json::json;

  fn accepting_mailer(times: usize) -> MockMailer {
    let mut mailer = MockMailer::new();
    mailer.expect_send().times(times).returning(|_| Ok(()));
    mailer
  }

  fn failing_mailer() -> MockMailer {
    let mut mailer = MockMailer::new();
    mailer
      .expect_send()
      .times(1)
      .returning(|_| Err(anyhow::anyhow!("smtp unavailable")));
    mailer
  }

  fn parse(body: &[u8]) -> SubmissionResponse {
    serde_json::from_slice(body).expect("deserialize response")
  }

  #[tokio::test]
  async fn contact_endpoint_sends_message() {
    let app = app_with_mailer(accepting_mailer(1));
    let payload = json!({"name": "Jo", "email": "a@b.com", "message": "Hi"});

    let (status, body) = post_json(app, "/api/contact", &payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body), SubmissionResponse::success("Message sent successfully!"));
  }

  #[tokio::test]
  async fn contact_endpoint_rejects_missing_fields() {
    let payloads = [
      json!({"name": "", "email": "a@b.com", "message": "Hi"}),
      json!({"email": "a@b.com", "message": "Hi"}),
      json!({"name": "Jo", "message": "Hi"}),
      json!({"name": "Jo", "email": "a@b.com", "message": null}),
      json!({"name": 0, "email": "a@b.com", "message": "Hi"}),
      json!({"name": "Jo", "email": false, "message": "Hi"}),
      json!({}),
    ];

    for payload in payloads {
      let mut mailer = MockMailer::new();
      mailer.expect_send().never();

      let (status, body) = post_json(app_with_mailer(mailer), "/api/contact", &payload).await;
      assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
      assert_eq!(parse(&body), SubmissionResponse::failure("Please fill all required fields"));
    }
  }

  #[tokio::test]
  async fn contact_endpoint_transport_failure() {
    let app = app_with_mailer(failing_mailer());
    let payload = json!({"name": "Jo", "email": "a@b.com", "message": "Hi", "phone": "555-0100"});

    let (status, body) = post_json(app, "/api/contact", &payload).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
      parse(&body),
      SubmissionResponse::failure("Failed to send message. Please try again later.")
    );
  }

  #[tokio::test]
  async fn contact_endpoint_accepts_urlencoded_form() {
    let mut mailer = MockMailer::new();
    mailer
      .expect_send()
      .withf(|message: &EmailMessage| message.html_body.contains("<p>Hello there</p>"))
      .times(1)
      .returning(|_| Ok(()));

    let (status, _) = post_form(
      app_with_mailer(mailer),
      "/api/contact",
      "name=Jo&email=a%40b.com&message=Hello+there",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
  }

  #[tokio::test]
  async fn contact_endpoint_malformed_json() {
    let mut mailer = MockMailer::new();
    mailer.expect_send().never();

    let (status, body) = post_raw(app_with_mailer(mailer), "/api/contact", "application/json", "{\"name\":").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&body), SubmissionResponse::failure("Invalid request body"));
  }

  #[tokio::test]
  async fn contact_endpoint_treats_array_body_as_empty_form() {
    let mut mailer = MockMailer::new();
    mailer.expect_send().never();

    let (status, body) = post_json(app_with_mailer(mailer), "/api/contact", &json!(["Jo", "a@b.com", "Hi"])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&body), SubmissionResponse::failure("Please fill all required fields"));
  }

  #[tokio::test]
  async fn contact_endpoint_falsy_phone_uses_placeholder() {
    let mut mailer = MockMailer::new();
    mailer
      .expect_send()
      .withf(|message: &EmailMessage| message.html_body.contains("<p><strong>Phone:</strong> Not provided</p>"))
      .times(1)
      .returning(|_| Ok(()));

    let payload = json!({"name": "Jo", "email": "a@b.com", "message": "Hi", "phone": 0});
    let (status, _) = post_json(app_with_mailer(mailer), "/api/contact", &payload).await;
    assert_eq!(status, StatusCode::OK);
  }

  #[tokio::test]
  async fn project_inquiry_endpoint_array_body_still_sends() {
    let (status, body) = post_json(app_with_mailer(accepting_mailer(1)), "/api/project-inquiry", &json!([1, 2])).await;
    assert_eq!(status, StatusCode::OK);
    assert!(parse(&body).success);
  }

  #[tokio::test]
  async fn project_inquiry_endpoint_sends_message() {
    let app = app_with_mailer(accepting_mailer(1));
    let payload = json!({
      "projectType": "E-commerce",
      "budget": "$5k - $10k",
      "timeline": "2 months",
      "name": "Jo",
      "email": "a@b.com",
      "description": "Online store"
    });

    let (status, body) = post_json(app, "/api/project-inquiry", &payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
      parse(&body),
      SubmissionResponse::success("Project inquiry submitted successfully!")
    );
  }

  #[tokio::test]
  async fn project_inquiry_endpoint_never_validates() {
    let payloads = [json!({}), json!({"budget": 5000}), json!({"unexpected": ["a", "b"]})];

    for payload in payloads {
      let (status, body) = post_json(app_with_mailer(accepting_mailer(1)), "/api/project-inquiry", &payload).await;
      assert_eq!(status, StatusCode::OK, "payload: {}", payload);
      assert!(parse(&body).success);
    }
  }

  #[tokio::test]
  async fn project_inquiry_endpoint_transport_failure() {
    let (status, body) = post_json(app_with_mailer(failing_mailer()), "/api/project-inquiry", &json!({})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(parse(&body), SubmissionResponse::failure("Failed to submit inquiry."));
  }

  #[tokio::test]
  async fn subscribe_endpoint_sends_welcome() {
    let mut mailer = MockMailer::new();
    mailer
      .expect_send()
      .withf(|message: &EmailMessage| message.to == "x@y.com")
      .times(1)
      .returning(|_| Ok(()));

    let (status, body) = post_json(app_with_mailer(mailer), "/api/subscribe", &json!({"email": "x@y.com"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body), SubmissionResponse::success("Subscribed successfully!"));
  }

  #[tokio::test]
  async fn subscribe_endpoint_transport_failure() {
    let (status, body) = post_json(
      app_with_mailer(failing_mailer()),
      "/api/subscribe",
      &json!({"email": "x@y.com"}),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(parse(&body), SubmissionResponse::failure("Subscription failed."));
  }

  #[tokio::test]
  async fn subscribe_endpoint_without_email_is_not_a_bad_request() {
    let (status, body) = post_json(app_with_mailer(failing_mailer()), "/api/subscribe", &json!({})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!parse(&body).success);
  }

  #[tokio::test]
  async fn subscribe_endpoint_without_content_type_reads_empty_form() {
    let mut mailer = MockMailer::new();
    mailer
      .expect_send()
      .withf(|message: &EmailMessage| message.to.is_empty())
      .times(1)
      .returning(|_| Err(anyhow::anyhow!("no recipients")));

    let (status, _) = post_raw(app_with_mailer(mailer), "/api/subscribe", "text/plain", "x@y.com").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[tokio::test]
  async fn repeated_contact_submissions_each_send() {
    let app = app_with_mailer(accepting_mailer(2));
    let payload = json!({"name": "Jo", "email": "a@b.com", "message": "Hi"});

    let (first, _) = post_json(app.clone(), "/api/contact", &payload).await;
    let (second, _) = post_json(app, "/api/contact", &payload).await;
    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
  }
}
