use crate::{
  models::{filter::ProductFilter, product::Header, product::Product, status::LoadStatus},
  store::ViewState,
  view::route::Route,
};

/// What a route shows for a given state.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
  Loading,
  Error(String),
  Overview { header: Option<Header>, filter: ProductFilter, products: Vec<Product> },
  Detail(Product),
  NotFound(i64),
  Legal { url: String },
}

/// Maps a route onto the current state. Detail lookups go against the raw product list,
/// so they reflect the latest favorite toggle.
pub fn resolve(route: Route, state: &ViewState, legal_notice_url: &str) -> Screen {
  match route {
    Route::Legal => Screen::Legal { url: legal_notice_url.to_string() },
    Route::Detail(id) => match state.product_by_id(id) {
      Some(p) => Screen::Detail(p.clone()),
      None => Screen::NotFound(id),
    },
    Route::Overview => match &state.status {
      LoadStatus::Loading => Screen::Loading,
      LoadStatus::Error(msg) => Screen::Error(msg.clone()),
      LoadStatus::Success(_) => Screen::Overview {
        header: state.header.clone(),
        filter: state.filter,
        products: state.filtered_products(),
      },
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::product::tests::product;

  fn loaded() -> ViewState {
    let products = vec![product(1, true), product(2, false)];
    ViewState {
      status: LoadStatus::Success(products.clone()),
      products,
      filter: ProductFilter::Available,
      header: Some(Header::default()),
      filter_labels: vec![],
    }
  }

  #[test]
  fn test_overview_uses_projection() {
    match resolve(Route::Overview, &loaded(), "") {
      Screen::Overview { filter, products, .. } => {
        assert_eq!(filter, ProductFilter::Available);
        assert_eq!(products.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
      }
      other => panic!("unexpected screen {:?}", other),
    }
  }

  #[test]
  fn test_overview_loading_and_error() {
    let mut state = loaded();
    state.status = LoadStatus::Loading;
    assert_eq!(resolve(Route::Overview, &state, ""), Screen::Loading);

    state.status = LoadStatus::Error("timeout".into());
    assert_eq!(resolve(Route::Overview, &state, ""), Screen::Error("timeout".into()));
  }

  #[test]
  fn test_detail_and_not_found() {
    let state = loaded();
    assert_eq!(resolve(Route::Detail(2), &state, ""), Screen::Detail(product(2, false)));
    assert_eq!(resolve(Route::Detail(99), &state, ""), Screen::NotFound(99));
  }

  #[test]
  fn test_legal() {
    let screen = resolve(Route::Legal, &ViewState::default(), "http://legal.example.com");
    assert_eq!(screen, Screen::Legal { url: "http://legal.example.com".into() });
  }
}
