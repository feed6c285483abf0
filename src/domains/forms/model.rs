use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::{lenient_string, truthy_string};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill all required fields";

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct ContactSubmission {
  #[serde(default, deserialize_with = "truthy_string")]
  #[validate(required, length(min = 1))]
  pub name: Option<String>,
  #[serde(default, deserialize_with = "truthy_string")]
  #[validate(required, length(min = 1))]
  pub email: Option<String>,
  #[serde(default, deserialize_with = "truthy_string")]
  #[validate(required, length(min = 1))]
  pub message: Option<String>,
  #[serde(default, deserialize_with = "truthy_string")]
  pub phone: Option<String>,
}

/// Project inquiry form. Nothing here is checked for presence.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInquiry {
  #[serde(default, deserialize_with = "lenient_string")]
  pub project_type: Option<String>,
  #[serde(default, deserialize_with = "lenient_string")]
  pub budget: Option<String>,
  #[serde(default, deserialize_with = "lenient_string")]
  pub timeline: Option<String>,
  #[serde(default, deserialize_with = "lenient_string")]
  pub name: Option<String>,
  #[serde(default, deserialize_with = "lenient_string")]
  pub email: Option<String>,
  #[serde(default, deserialize_with = "lenient_string")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SubscriptionRequest {
  #[serde(default, deserialize_with = "lenient_string")]
  pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmissionResponse {
  pub success: bool,
  pub message: String,
}

impl SubmissionResponse {
  pub fn success(message: impl Into<String>) -> Self {
    Self {
      success: true,
      message: message.into(),
    }
  }

  pub fn failure(message: impl Into<String>) -> Self {
    Self {
      success: false,
      message: message.into(),
    }
  }
}
