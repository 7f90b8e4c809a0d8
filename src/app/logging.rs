use tracing_subscriber::{EnvFilter, layer::SubscriberExt};

use crate::models::errors::{ErrorType, InternalError};

/// Installs the global subscriber: `RUST_LOG` filtering (default `info`), fmt output on stderr.
pub fn init_logging() -> Result<(), InternalError> {
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

  let subscriber = tracing_subscriber::registry()
    .with(env_filter)
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

  tracing::subscriber::set_global_default(subscriber).map_err(|e| {
    InternalError::new(ErrorType::Internal, Box::new(e), "failed to set logger", "catalog.app.logging")
  })
}
