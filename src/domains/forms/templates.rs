//! Subjects and HTML bodies for the outbound emails.
//!
//! Every user supplied value goes through [`escape_html`] before it lands in
//! a body. Subjects are plain header text and are encoded by lettre instead.

use crate::utils::escape_html;

use super::model::{ContactSubmission, ProjectInquiry};

const NOT_PROVIDED: &str = "Not provided";
const FOOTER: &str = "<hr>\n<p>Sent from NEXA Website</p>";

pub const WELCOME_SUBJECT: &str = "Welcome to NEXA Newsletter!";

fn field(value: &Option<String>) -> String {
  escape_html(value.as_deref().unwrap_or(NOT_PROVIDED))
}

pub fn contact_subject(submission: &ContactSubmission) -> String {
  format!(
    "New Contact Form Submission from {}",
    submission.name.as_deref().unwrap_or_default()
  )
}

pub fn contact_body(submission: &ContactSubmission) -> String {
  let phone = submission
    .phone
    .as_deref()
    .filter(|phone| !phone.is_empty())
    .unwrap_or(NOT_PROVIDED);

  format!(
    "<h2>New Contact Form Submission</h2>\n\
     <p><strong>Name:</strong> {}</p>\n\
     <p><strong>Email:</strong> {}</p>\n\
     <p><strong>Phone:</strong> {}</p>\n\
     <p><strong>Message:</strong></p>\n\
     <p>{}</p>\n\
     {}",
    field(&submission.name),
    field(&submission.email),
    escape_html(phone),
    field(&submission.message),
    FOOTER
  )
}

pub fn inquiry_subject(inquiry: &ProjectInquiry) -> String {
  format!(
    "New Project Inquiry: {}",
    inquiry.project_type.as_deref().unwrap_or(NOT_PROVIDED)
  )
}

pub fn inquiry_body(inquiry: &ProjectInquiry) -> String {
  format!(
    "<h2>New Project Inquiry</h2>\n\
     <p><strong>Project Type:</strong> {}</p>\n\
     <p><strong>Budget Range:</strong> {}</p>\n\
     <p><strong>Timeline:</strong> {}</p>\n\
     <p><strong>Client Name:</strong> {}</p>\n\
     <p><strong>Client Email:</strong> {}</p>\n\
     <p><strong>Project Description:</strong></p>\n\
     <p>{}</p>\n\
     {}",
    field(&inquiry.project_type),
    field(&inquiry.budget),
    field(&inquiry.timeline),
    field(&inquiry.name),
    field(&inquiry.email),
    field(&inquiry.description),
    FOOTER
  )
}

pub fn welcome_body() -> String {
  [
    "<h2>Welcome to NEXA Digital Agency!</h2>",
    "<p>Thank you for subscribing to our newsletter.</p>",
    "<p>You'll receive updates about:</p>",
    "<ul>",
    "<li>Latest web design trends</li>",
    "<li>Digital marketing tips</li>",
    "<li>Exclusive offers and promotions</li>",
    "<li>Our latest projects and case studies</li>",
    "</ul>",
    "<p>Best regards,<br>The NEXA Team</p>",
  ]
  .join("\n")
}
