use std::sync::Arc;

use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  config::Config,
  email::{MockMailer, SmtpConfig},
  state::SharedAppState,
};

pub fn test_config() -> Config {
  Config {
    port: 5000,
    smtp: SmtpConfig {
      username: "agency@example.com".to_string(),
      password: "secret".to_string(),
      from_email: "agency@example.com".to_string(),
      ..SmtpConfig::default()
    },
    operator_email: "inbox@example.com".to_string(),
  }
}

pub fn app_with_mailer(mailer: MockMailer) -> Router {
  let state = SharedAppState::new(Arc::new(mailer), &test_config());
  create_app(state)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let body = serde_json::to_vec(body).expect("serialize request body");
  send(app, uri, "application/json", Body::from(body)).await
}

pub async fn post_form(app: Router, uri: &str, body: &'static str) -> (StatusCode, Bytes) {
  send(app, uri, "application/x-www-form-urlencoded", Body::from(body)).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &'static str) -> (StatusCode, Bytes) {
  send(app, uri, content_type, Body::from(body)).await
}

async fn send(app: Router, uri: &str, content_type: &str, body: Body) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", content_type)
    .body(body)
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
