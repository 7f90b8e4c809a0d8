use std::{io::ErrorKind, path::Path};

use tracing::{info, warn};

use crate::models::{
  config::Config,
  errors::{ErrorType, InternalError},
};

/// Reads the yaml config. A missing file means defaults; an unreadable or malformed one is an error.
pub async fn load_config(path: &Path) -> Result<Config, InternalError> {
  let where_ = "catalog.app.load_config";

  let yaml_string = match tokio::fs::read_to_string(path).await {
    Ok(s) => s,
    Err(err) if err.kind() == ErrorKind::NotFound => {
      warn!(path = %path.display(), "config file not found, using defaults");
      return Ok(Config::default());
    }
    Err(err) => {
      return Err(InternalError::new(
        ErrorType::ConfigRead,
        Box::new(err),
        "failed to load service config file",
        where_,
      ));
    }
  };

  let parsed_config: Config = serde_yaml::from_str(&yaml_string).map_err(|e| {
    InternalError::new(ErrorType::ConfigParse, Box::new(e), "failed to parse config data", where_)
  })?;

  info!(path = %path.display(), base_url = %parsed_config.catalog.base_url, "config loaded");
  Ok(parsed_config)
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  #[tokio::test]
  async fn test_missing_file_is_default() {
    let dir = tempfile::TempDir::new().unwrap();
    let cfg = load_config(&dir.path().join("config.yaml")).await.unwrap();
    assert_eq!(cfg, Config::default());
  }

  #[tokio::test]
  async fn test_reads_yaml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "catalog:\n  base_url: http://127.0.0.1:9000\n  resource: p.json").unwrap();

    let cfg = load_config(file.path()).await.unwrap();
    assert_eq!(cfg.catalog.base_url, "http://127.0.0.1:9000");
    assert_eq!(cfg.catalog.resource, "p.json");
  }

  #[tokio::test]
  async fn test_malformed_yaml_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "catalog: [not, a, map").unwrap();

    let err = load_config(file.path()).await.unwrap_err();
    assert_eq!(err.err_type, ErrorType::ConfigParse);
  }
}
