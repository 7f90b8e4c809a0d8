use http::Uri;
use std::io::{Error, ErrorKind};

pub fn validate_url_target(url: &str) -> Result<Uri, Error> {
  let uri = url
    .parse::<Uri>()
    .map_err(|e| Error::new(ErrorKind::InvalidInput, format!("invalid URL: {}", e)))?;

  match uri.scheme_str() {
    Some("http") | Some("https") => {}
    _ => {
      return Err(Error::new(
        ErrorKind::InvalidInput,
        format!("invalid URL: expected an http(s) scheme in {}", url),
      ));
    }
  }

  if uri.host().is_none() {
    return Err(Error::new(ErrorKind::InvalidInput, format!("invalid URL: missing host in {}", url)));
  }

  Ok(uri)
}

/// Joins the configured base URL and resource with exactly one slash and validates the result.
pub fn catalog_url(base_url: &str, resource: &str) -> Result<String, Error> {
  let url = format!("{}/{}", base_url.trim_end_matches('/'), resource.trim_start_matches('/'));
  validate_url_target(&url)?;
  Ok(url)
}
