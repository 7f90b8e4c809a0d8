use derive_more::Display;

use crate::models::product::Product;

/// Lifecycle of the latest catalog fetch. Exactly one variant is active at a time.
#[derive(Debug, Clone, Display, Default, PartialEq)]
pub enum LoadStatus {
  #[default]
  #[display("loading")]
  Loading,
  #[display("success ({} products)", _0.len())]
  Success(Vec<Product>),
  #[display("error: {_0}")]
  Error(String),
}

impl LoadStatus {
  pub fn is_loading(&self) -> bool {
    matches!(self, LoadStatus::Loading)
  }

  pub fn is_success(&self) -> bool {
    matches!(self, LoadStatus::Success(_))
  }

  pub fn error_message(&self) -> Option<&str> {
    match self {
      LoadStatus::Error(msg) => Some(msg),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_status_helpers() {
    assert!(LoadStatus::default().is_loading());
    assert!(LoadStatus::Success(vec![]).is_success());
    assert_eq!(LoadStatus::Error("timeout".into()).error_message(), Some("timeout"));
    assert_eq!(LoadStatus::Loading.error_message(), None);
  }

  #[test]
  fn test_status_display() {
    assert_eq!(LoadStatus::Success(vec![]).to_string(), "success (0 products)");
    assert_eq!(LoadStatus::Error("timeout".into()).to_string(), "error: timeout");
  }
}
