use std::str::FromStr;

use derive_more::Display;

/// The three destinations of the viewer.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq)]
pub enum Route {
  #[display("overview")]
  Overview,
  #[display("detail/{_0}")]
  Detail(i64),
  #[display("legal")]
  Legal,
}

#[derive(Debug, Display, PartialEq, Eq)]
#[display("unknown route: {_0}")]
pub struct RouteParseError(pub String);

impl std::error::Error for RouteParseError {}

impl FromStr for Route {
  type Err = RouteParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim().trim_matches('/');
    match s {
      "overview" | "" => Ok(Route::Overview),
      "legal" => Ok(Route::Legal),
      _ => s
        .strip_prefix("detail/")
        .and_then(|id| id.parse::<i64>().ok())
        .map(Route::Detail)
        .ok_or_else(|| RouteParseError(s.to_string())),
    }
  }
}
