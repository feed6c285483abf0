use crate::email::types::{EmailMessage, SmtpConfig};
use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::header::ContentType, transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport,
  Message, Tokio1Executor,
};

/// Delivers one composed message to the mail provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send(&self, message: &EmailMessage) -> Result<()>;
}

pub struct EmailService {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailService {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .timeout(Some(smtp_config.timeout))
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .timeout(Some(smtp_config.timeout))
        .build()
    };

    Ok(EmailService {
      smtp_config,
      transporter,
    })
  }

  pub fn from_email(&self) -> &str {
    &self.smtp_config.from_email
  }

  fn build_message(message: &EmailMessage) -> Result<Message> {
    let email = Message::builder()
      .from(message.from.parse()?)
      .to(message.to.parse()?)
      .subject(&message.subject)
      .header(ContentType::TEXT_HTML)
      .body(message.html_body.clone())?;

    Ok(email)
  }
}

#[async_trait]
impl Mailer for EmailService {
  async fn send(&self, message: &EmailMessage) -> Result<()> {
    let email = Self::build_message(message)?;
    self.transporter.send(email).await?;

    tracing::debug!(to = %message.to, subject = %message.subject, "Email handed to SMTP relay");
    Ok(())
  }
}
