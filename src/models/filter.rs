use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::models::product::Product;

/// The selection driving which products the overview shows.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Display, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProductFilter {
  #[default]
  #[display("Alle")]
  All,
  #[display("Verfügbar")]
  Available,
  #[display("Vorgemerkt")]
  Favorites,
}

impl ProductFilter {
  pub const ALL: [ProductFilter; 3] =
    [ProductFilter::All, ProductFilter::Available, ProductFilter::Favorites];

  pub fn label(&self) -> String {
    self.to_string()
  }

  pub fn matches(&self, product: &Product) -> bool {
    match self {
      ProductFilter::All => true,
      ProductFilter::Available => product.available,
      ProductFilter::Favorites => product.is_favorite,
    }
  }
}
