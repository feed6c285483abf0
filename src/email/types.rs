use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_email: String,
  pub timeout: Duration,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
      from_email: "".to_string(),
      timeout: Duration::from_secs(30),
    }
  }
}

/// A single outbound HTML email. Built per request and dropped after sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
  pub from: String,
  pub to: String,
  pub subject: String,
  pub html_body: String,
}

impl EmailMessage {
  pub fn new(from: impl Into<String>, to: impl Into<String>, subject: impl Into<String>, html_body: String) -> Self {
    EmailMessage {
      from: from.into(),
      to: to.into(),
      subject: subject.into(),
      html_body,
    }
  }
}
