use std::{env, time::Duration};

use anyhow::{Context, Result};

use crate::email::SmtpConfig;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_SMTP_TIMEOUT_SECS: u64 = 30;

/// Process-wide settings, read once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
  pub port: u16,
  pub smtp: SmtpConfig,
  /// Mailbox that receives contact and project inquiry submissions.
  pub operator_email: String,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    let username = required("EMAIL_USER")?;
    let password = required("EMAIL_PASS")?;

    let smtp = SmtpConfig {
      host: env::var("SMTP_HOST").unwrap_or_else(|_| DEFAULT_SMTP_HOST.to_string()),
      port: parsed_or("SMTP_PORT", DEFAULT_SMTP_PORT)?,
      from_email: username.clone(),
      username,
      password,
      timeout: Duration::from_secs(parsed_or("SMTP_TIMEOUT_SECS", DEFAULT_SMTP_TIMEOUT_SECS)?),
    };

    let operator_email = env::var("OPERATOR_EMAIL")
      .ok()
      .filter(|value| !value.trim().is_empty())
      .unwrap_or_else(|| smtp.from_email.clone());

    Ok(Config {
      port: parsed_or("PORT", DEFAULT_PORT)?,
      smtp,
      operator_email,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("0.0.0.0:{}", self.port)
  }
}

fn required(key: &str) -> Result<String> {
  env::var(key).with_context(|| format!("{} environment variable must be set", key))
}

fn parsed_or<T>(key: &str, default: T) -> Result<T>
where
  T: std::str::FromStr,
  T::Err: std::error::Error + Send + Sync + 'static,
{
  match env::var(key) {
    Ok(raw) => raw
      .trim()
      .parse()
      .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
    Err(_) => Ok(default),
  }
}
