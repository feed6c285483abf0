//! Email sending functionality module
//!
//! This module provides the mail transport used by the form handlers. The
//! `Mailer` trait is the seam handlers depend on; `EmailService` is the SMTP
//! implementation backed by lettre.

mod service;
mod types;

pub use service::{EmailService, Mailer};
pub use types::{EmailMessage, SmtpConfig};

#[cfg(test)]
pub use service::MockMailer;
