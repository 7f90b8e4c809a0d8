use std::time::Duration;

use reqwest::Client;
use tokio::time::timeout;
use tracing::debug;

use crate::{
  client::{ProductSource, decode_catalog},
  models::{
    config::CatalogConfig,
    errors::{ErrorType, FetchError, InternalError},
    product::CatalogResponse,
  },
  utils::net::catalog_url,
};

#[derive(Debug, Clone)]
pub struct HttpProductSource {
  client: Client,
  url: String,
  timeout: Duration,
}

#[derive(Debug)]
pub struct HttpProductSourceArgs {
  pub config: CatalogConfig,
}

impl HttpProductSource {
  pub fn new(args: HttpProductSourceArgs) -> Result<Self, InternalError> {
    let path = "catalog.client.http.new";
    let cfg = args.config;

    let url = catalog_url(&cfg.base_url, &cfg.resource).map_err(|e| {
      InternalError::new(ErrorType::InvalidUrl, Box::new(e), "invalid catalog url", path)
    })?;

    let client = Client::builder()
      .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| {
        InternalError::new(ErrorType::HttpClient, Box::new(e), "failed to build http client", path)
      })?;

    Ok(Self { client, url, timeout: cfg.timeout() })
  }

  pub fn url(&self) -> &str {
    &self.url
  }

  async fn request(&self) -> Result<CatalogResponse, FetchError> {
    let res = self.client.get(&self.url).send().await?.error_for_status()?;
    let body = res.bytes().await?;
    decode_catalog(&body)
  }
}

impl ProductSource for HttpProductSource {
  async fn fetch_catalog(&self) -> Result<CatalogResponse, FetchError> {
    debug!(url = %self.url, "fetching catalog");

    let res = match timeout(self.timeout, self.request()).await {
      Ok(res) => res,
      Err(_) => Err(FetchError::Timeout(self.timeout)),
    };

    if let Err(err) = &res {
      debug!(url = %self.url, error = %err, "catalog request failed");
    }
    res
  }
}
