//! Error type shared by the catalog, contact and footer features

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
  /// The request never produced a response (offline, CORS, DNS...)
  #[error("network error: {0}")]
  Network(String),

  #[error("HTTP {status}")]
  Http { status: u16 },

  #[error("decode error: {0}")]
  Decode(String),

  /// Two records share an id, so a card could not resolve to one record
  #[error("duplicate property id {0}")]
  DuplicateId(i64),

  #[error("DOM error: {0}")]
  Dom(String),

  #[error("config error: {0}")]
  Config(String),
}

impl From<serde_json::Error> for SiteError {
  fn from(err: serde_json::Error) -> Self {
    SiteError::Decode(err.to_string())
  }
}

impl From<serde_yaml::Error> for SiteError {
  fn from(err: serde_yaml::Error) -> Self {
    SiteError::Config(err.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_http_error_display() {
    assert_eq!(SiteError::Http { status: 404 }.to_string(), "HTTP 404");
  }

  #[test]
  fn test_json_error_maps_to_decode() {
    let err: SiteError = serde_json::from_str::<Vec<i32>>("{").unwrap_err().into();
    assert!(matches!(err, SiteError::Decode(_)));
  }
}
