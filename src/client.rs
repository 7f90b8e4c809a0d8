mod http_source;

pub use http_source::{HttpProductSource, HttpProductSourceArgs};

use crate::models::{errors::FetchError, product::CatalogResponse};

/// Anything able to produce a fresh catalog. The store only depends on this seam.
pub trait ProductSource: Send + Sync + 'static {
  fn fetch_catalog(&self) -> impl Future<Output = Result<CatalogResponse, FetchError>> + Send;
}

/// Decodes a catalog document as served by the remote endpoint.
pub fn decode_catalog(body: &[u8]) -> Result<CatalogResponse, FetchError> {
  Ok(serde_json::from_slice::<CatalogResponse>(body)?)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_decode_catalog() {
    let body = r#"{
      "header": { "headerTitle": "CHECK24", "headerDescription": "Produkte" },
      "filters": ["Alle", "Verfügbar", "Vorgemerkt"],
      "products": [
        {
          "id": 1, "name": "A", "imageURL": "https://img.example.com/a.png",
          "available": true, "description": "a", "longDescription": "aa", "rating": 4.5
        },
        {
          "id": 2, "name": "B", "imageURL": "https://img.example.com/b.png",
          "available": false, "description": "b", "longDescription": "bb", "rating": 1.0
        }
      ]
    }"#;

    let catalog = decode_catalog(body.as_bytes()).unwrap();
    assert_eq!(catalog.header.header_title, "CHECK24");
    assert_eq!(catalog.filters, vec!["Alle", "Verfügbar", "Vorgemerkt"]);
    assert_eq!(catalog.products.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
    assert!(catalog.products.iter().all(|p| !p.is_favorite));
  }

  #[test]
  fn test_decode_catalog_missing_products() {
    let body = br#"{ "header": { "headerTitle": "t", "headerDescription": "d" } }"#;
    let err = decode_catalog(body).unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
    assert!(err.message().contains("products"));
  }
}
