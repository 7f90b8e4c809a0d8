use chrono::{DateTime, Utc, serde::ts_seconds_option};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog header shown above the product list.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Header {
  pub header_title: String,
  pub header_description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Price {
  pub value: Decimal,
  pub currency: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: i64,
  pub name: String,
  #[serde(rename = "imageURL")]
  pub image_url: String,
  pub available: bool,
  pub description: String,
  pub long_description: String,
  pub rating: f64,
  #[serde(default)]
  pub is_favorite: bool,

  // extended catalog variant, descriptive only
  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub kind: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub color: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub color_code: Option<String>,
  #[serde(default, with = "ts_seconds_option", skip_serializing_if = "Option::is_none")]
  pub release_date: Option<DateTime<Utc>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price: Option<Price>,
}

impl Product {
  /// Returns a copy carrying the given favorite flag; every other field is kept as is.
  pub fn with_favorite(&self, is_favorite: bool) -> Product {
    Product { is_favorite, ..self.clone() }
  }
}

/// The full document served by the catalog endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CatalogResponse {
  pub header: Header,
  #[serde(default)]
  pub filters: Vec<String>,
  pub products: Vec<Product>,
}

#[cfg(test)]
pub(crate) mod tests {
  use super::*;

  pub(crate) fn product(id: i64, available: bool) -> Product {
    Product {
      id,
      name: format!("Product {}", id),
      image_url: format!("https://img.example.com/{}.png", id),
      available,
      description: "short".into(),
      long_description: "long".into(),
      rating: 4.0,
      is_favorite: false,
      kind: None,
      color: None,
      color_code: None,
      release_date: None,
      price: None,
    }
  }

  #[test]
  fn test_decode_minimal_product() {
    let json = r#"{
      "id": 7,
      "name": "Tablet",
      "imageURL": "https://img.example.com/7.png",
      "available": true,
      "description": "A tablet",
      "longDescription": "A very long tablet description",
      "rating": 3.5
    }"#;

    let p: Product = serde_json::from_str(json).unwrap();
    assert_eq!(p.id, 7);
    assert_eq!(p.image_url, "https://img.example.com/7.png");
    assert_eq!(p.long_description, "A very long tablet description");
    assert!(!p.is_favorite);
    assert!(p.price.is_none());
    assert!(p.release_date.is_none());
  }

  #[test]
  fn test_decode_extended_product() {
    let json = r#"{
      "id": 1,
      "name": "Phone",
      "type": "Smartphone",
      "color": "Black",
      "colorCode": "000000",
      "releaseDate": 1463097600,
      "imageURL": "https://img.example.com/1.png",
      "available": false,
      "description": "d",
      "longDescription": "ld",
      "rating": 5,
      "price": { "value": 200, "currency": "EUR" }
    }"#;

    let p: Product = serde_json::from_str(json).unwrap();
    assert_eq!(p.kind.as_deref(), Some("Smartphone"));
    assert_eq!(p.color_code.as_deref(), Some("000000"));
    assert_eq!(p.release_date.map(|d| d.timestamp()), Some(1463097600));
    let price = p.price.unwrap();
    assert_eq!(price.value, Decimal::from(200));
    assert_eq!(price.currency, "EUR");
    assert_eq!(p.rating, 5.0);
  }

  #[test]
  fn test_with_favorite_keeps_other_fields() {
    let p = product(3, false);
    let fav = p.with_favorite(true);
    assert!(fav.is_favorite);
    assert_eq!(fav.with_favorite(false), p);
  }
}
