use crate::{
  models::{filter::ProductFilter, product::Header, product::Product, status::LoadStatus},
  store::projection::project,
};

/// Everything a screen needs to render the catalog, published as one value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
  pub status: LoadStatus,
  /// Authoritative list carrying favorite flags. Survives a failed reload untouched.
  pub products: Vec<Product>,
  pub filter: ProductFilter,
  pub header: Option<Header>,
  pub filter_labels: Vec<String>,
}

impl ViewState {
  pub fn filtered_products(&self) -> Vec<Product> {
    project(&self.status, &self.products, self.filter)
  }

  pub fn product_by_id(&self, id: i64) -> Option<&Product> {
    self.products.iter().find(|p| p.id == id)
  }
}
