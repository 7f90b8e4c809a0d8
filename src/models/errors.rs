use std::{error::Error, fmt, time::Duration};

use derive_more::Display;

pub type BoxedErr = Box<dyn Error + Send + Sync>;

const MAX_ERROR_LENGTH: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
  ConfigRead,
  ConfigParse,
  InvalidUrl,
  HttpClient,
  Internal,
}

impl fmt::Display for ErrorType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ErrorType::ConfigRead => write!(f, "config_read"),
      ErrorType::ConfigParse => write!(f, "config_parse"),
      ErrorType::InvalidUrl => write!(f, "invalid_url"),
      ErrorType::HttpClient => write!(f, "http_client"),
      ErrorType::Internal => write!(f, "internal_error"),
    }
  }
}

/// Startup and wiring failures: configuration, client construction.
#[derive(Debug, Display)]
#[display("InternalError: {} {} {} {}", err_type, msg, path, err)]
pub struct InternalError {
  pub err_type: ErrorType,
  pub err: BoxedErr,
  pub msg: String,
  pub path: String,
}

impl Error for InternalError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    Some(&*self.err)
  }
}

impl InternalError {
  pub fn new(
    err_type: ErrorType,
    err: BoxedErr,
    msg: impl Into<String>,
    path: impl Into<String>,
  ) -> Self {
    Self { err_type, err, msg: msg.into(), path: path.into() }
  }
}

/// A failed catalog fetch. Callers of the store only ever see [`FetchError::message`];
/// the variants exist for logging.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
  #[error("network error: {0}")]
  Transport(String),
  #[error("request timed out after {}ms", .0.as_millis())]
  Timeout(Duration),
  #[error("server responded with status {status}")]
  Status { status: u16 },
  #[error("failed to decode catalog: {0}")]
  Decode(#[from] serde_json::Error),
  #[error("{0}")]
  Other(String),
}

impl FetchError {
  /// Human readable description, bounded in length.
  pub fn message(&self) -> String {
    let mut s = self.to_string();
    if s.len() > MAX_ERROR_LENGTH {
      let mut end = MAX_ERROR_LENGTH;
      while !s.is_char_boundary(end) {
        end -= 1;
      }
      s.truncate(end);
      s.push_str("...");
    }
    s
  }
}

impl From<reqwest::Error> for FetchError {
  fn from(err: reqwest::Error) -> Self {
    if let Some(status) = err.status() {
      return FetchError::Status { status: status.as_u16() };
    }
    FetchError::Transport(err.to_string())
  }
}
