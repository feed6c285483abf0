use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

pub mod error;

pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Reads a form field without rejecting the payload over its type.
///
/// Strings pass through, `null` counts as absent, and numbers or booleans are
/// kept in their textual form.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  Ok(match value {
    None | Some(Value::Null) => None,
    Some(Value::String(s)) => Some(s),
    Some(other) => Some(other.to_string()),
  })
}

/// Like [`lenient_string`], but falsy values (`false`, `0` and `""`) count
/// as absent too.
pub fn truthy_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  Ok(match value {
    None | Some(Value::Null) | Some(Value::Bool(false)) => None,
    Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
    Some(Value::String(s)) if s.is_empty() => None,
    Some(Value::String(s)) => Some(s),
    Some(other) => Some(other.to_string()),
  })
}

/// Escapes user input before it is interpolated into an HTML email body.
pub fn escape_html(input: &str) -> String {
  htmlescape::encode_minimal(input)
}
