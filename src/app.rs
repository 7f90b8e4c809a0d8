mod config;
pub mod logging;

use std::path::PathBuf;

use tracing::{error, info};

pub use config::load_config;

use crate::{
  client::{HttpProductSource, HttpProductSourceArgs},
  models::{config::Config, errors::InternalError},
  store::{CatalogStore, CatalogStoreArgs},
  view::{Route, render, resolve},
};

pub struct App {
  pub(crate) config: Config,
  pub(crate) store: CatalogStore<HttpProductSource>,
}

#[derive(Debug)]
pub struct AppArgs {
  pub config_path: PathBuf,
}

impl App {
  pub async fn new(args: AppArgs) -> Result<Self, InternalError> {
    let config = load_config(&args.config_path).await?;

    let source = HttpProductSource::new(HttpProductSourceArgs { config: config.catalog.clone() })?;
    info!(url = %source.url(), "catalog source ready");

    let store = CatalogStore::new(CatalogStoreArgs { source });
    Ok(Self { config, store })
  }

  pub fn store(&self) -> &CatalogStore<HttpProductSource> {
    &self.store
  }

  /// Renders a route against the store's current state.
  pub fn screen(&self, route: Route) -> String {
    let state = self.store.snapshot();
    render(&resolve(route, &state, &self.config.catalog.legal_notice_url))
  }

  /// One session: load the catalog on a worker task, then print the overview and legal page.
  pub async fn run(&self) -> Result<(), InternalError> {
    match self.store.spawn_load().await {
      Ok(Ok(())) => {}
      // already published as Error status, the overview shows it
      Ok(Err(_)) => {}
      Err(e) => error!(error = %e, "catalog load task failed"),
    }

    println!("{}", self.screen(Route::Overview));
    println!("{}", self.screen(Route::Legal));
    Ok(())
  }
}
