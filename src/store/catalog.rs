use std::sync::{
  Arc,
  atomic::{AtomicU64, Ordering},
};

use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::{
  client::ProductSource,
  models::{errors::FetchError, filter::ProductFilter, product::Product, status::LoadStatus},
  store::{projection::merge_favorites, state::ViewState},
};

/// Holds the catalog for one screen session and publishes every change through a
/// `watch` channel. Cloning is cheap and every clone shares the same state.
#[derive(Debug)]
pub struct CatalogStore<S> {
  source: Arc<S>,
  state: Arc<watch::Sender<ViewState>>,
  generation: Arc<AtomicU64>,
}

impl<S> Clone for CatalogStore<S> {
  fn clone(&self) -> Self {
    Self {
      source: self.source.clone(),
      state: self.state.clone(),
      generation: self.generation.clone(),
    }
  }
}

#[derive(Debug)]
pub struct CatalogStoreArgs<S> {
  pub source: S,
}

impl<S: ProductSource> CatalogStore<S> {
  pub fn new(args: CatalogStoreArgs<S>) -> Self {
    let (tx, _) = watch::channel(ViewState::default());
    Self {
      source: Arc::new(args.source),
      state: Arc::new(tx),
      generation: Arc::new(AtomicU64::new(0)),
    }
  }

  pub fn subscribe(&self) -> watch::Receiver<ViewState> {
    self.state.subscribe()
  }

  pub fn snapshot(&self) -> ViewState {
    self.state.borrow().clone()
  }

  pub fn status(&self) -> LoadStatus {
    self.state.borrow().status.clone()
  }

  /// The raw list, including stale data kept after a failed reload.
  pub fn products(&self) -> Vec<Product> {
    self.state.borrow().products.clone()
  }

  pub fn filter(&self) -> ProductFilter {
    self.state.borrow().filter
  }

  pub fn filtered_products(&self) -> Vec<Product> {
    self.state.borrow().filtered_products()
  }

  pub fn product_by_id(&self, id: i64) -> Option<Product> {
    self.state.borrow().product_by_id(id).cloned()
  }

  /// Publishes `Loading`, fetches, then publishes the merged list or the failure message.
  /// Concurrent loads are not cancelled; whichever completes last decides the final state.
  pub async fn load(&self) -> Result<(), FetchError> {
    let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
    self.state.send_modify(|s| s.status = LoadStatus::Loading);
    debug!(generation, "catalog load started");

    match self.source.fetch_catalog().await {
      Ok(catalog) => {
        let count = catalog.products.len();
        self.state.send_modify(|s| {
          let merged = merge_favorites(&s.products, catalog.products);
          s.products = merged.clone();
          s.status = LoadStatus::Success(merged);
          s.header = Some(catalog.header);
          s.filter_labels = catalog.filters;
        });
        info!(generation, count, "catalog loaded");
        Ok(())
      }
      Err(err) => {
        let msg = err.message();
        self.state.send_modify(|s| s.status = LoadStatus::Error(msg.clone()));
        warn!(generation, error = %msg, "catalog load failed");
        Err(err)
      }
    }
  }

  /// Runs [`CatalogStore::load`] on a worker task. The result lands in the shared state.
  pub fn spawn_load(&self) -> JoinHandle<Result<(), FetchError>> {
    let store = self.clone();
    tokio::spawn(async move { store.load().await })
  }

  pub fn set_filter(&self, filter: ProductFilter) {
    self.state.send_if_modified(|s| {
      if s.filter == filter {
        return false;
      }
      s.filter = filter;
      true
    });
    debug!(%filter, "filter selected");
  }

  /// Flips the favorite flag of the product with `id`. Returns `false` when no such
  /// product is loaded, leaving the state untouched.
  pub fn toggle_favorite(&self, id: i64) -> bool {
    let found = self.state.send_if_modified(|s| {
      let Some(idx) = s.products.iter().position(|p| p.id == id) else {
        return false;
      };

      let updated = s.products[idx].with_favorite(!s.products[idx].is_favorite);
      if let LoadStatus::Success(list) = &mut s.status {
        if let Some(p) = list.iter_mut().find(|p| p.id == id) {
          *p = updated.clone();
        }
      }
      s.products[idx] = updated;
      true
    });

    if found {
      debug!(id, "favorite toggled");
    } else {
      debug!(id, "favorite toggle ignored, product not loaded");
    }
    found
  }
}
