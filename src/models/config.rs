use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://app.check24.de/";
pub const DEFAULT_RESOURCE: &str = "products-test.json";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_LEGAL_NOTICE_URL: &str =
  "http://m.check24.de/rechtliche-hinweise?deviceoutput=app";

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Config {
  #[serde(default)]
  pub catalog: CatalogConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
  pub base_url: String,
  pub resource: String,
  pub timeout_ms: u64,
  pub legal_notice_url: String,
}

impl Default for CatalogConfig {
  fn default() -> Self {
    CatalogConfig {
      base_url: DEFAULT_BASE_URL.to_string(),
      resource: DEFAULT_RESOURCE.to_string(),
      timeout_ms: DEFAULT_TIMEOUT_MS,
      legal_notice_url: DEFAULT_LEGAL_NOTICE_URL.to_string(),
    }
  }
}

impl CatalogConfig {
  pub fn timeout(&self) -> Duration {
    Duration::from_millis(self.timeout_ms)
  }
}
