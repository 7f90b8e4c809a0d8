use std::collections::HashSet;

use crate::models::{filter::ProductFilter, product::Product, status::LoadStatus};

/// Derives the list to display. Empty unless the latest load succeeded; otherwise
/// the filter predicate is applied over `products` in their existing order.
pub fn project(status: &LoadStatus, products: &[Product], filter: ProductFilter) -> Vec<Product> {
  if !status.is_success() {
    return vec![];
  }

  products.iter().filter(|p| filter.matches(p)).cloned().collect()
}

/// Carries favorite flags from the previous list onto a freshly fetched one, matching by id.
/// Products without a previous favorite keep whatever the payload said.
pub fn merge_favorites(previous: &[Product], fetched: Vec<Product>) -> Vec<Product> {
  let favorites: HashSet<i64> = previous.iter().filter(|p| p.is_favorite).map(|p| p.id).collect();

  fetched
    .into_iter()
    .map(|p| if favorites.contains(&p.id) && !p.is_favorite { p.with_favorite(true) } else { p })
    .collect()
}
