//! Product records returned by a search.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A product in a result set.
///
/// Decodes the search API's snake_case records. The backend stores prices and
/// ratings as decimal columns and serializes them as strings, and ids as
/// integers, so both representations are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(deserialize_with = "number_or_string")]
    pub price: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub rating: f64,
    #[serde(alias = "isPrime")]
    pub is_prime: bool,
    #[serde(default, alias = "imageUrl")]
    pub image_url: String,
    #[serde(default, alias = "productUrl", alias = "url")]
    pub product_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Format the price as a dollar string.
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Rating with one decimal place.
    pub fn rating_display(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrStr {
    Num(serde_json::Number),
    Str(String),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumOrStr::deserialize(deserializer)? {
        NumOrStr::Num(n) => n.to_string(),
        NumOrStr::Str(s) => s,
    })
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumOrStr::deserialize(deserializer)? {
        NumOrStr::Num(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom(format!("number out of range: {}", n))),
        NumOrStr::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid decimal: {:?}", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_backend_record() {
        let json = r#"{
            "id": 7,
            "title": "Premium Wireless Mouse",
            "price": "29.99",
            "rating": "4.5",
            "is_prime": true,
            "product_url": "https://example.com/p/7",
            "image_url": "https://example.com/i/7.jpg",
            "created_at": "2024-03-01T12:00:00Z"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "7");
        assert_eq!(product.price, 29.99);
        assert_eq!(product.rating, 4.5);
        assert!(product.is_prime);
        assert_eq!(product.product_url, "https://example.com/p/7");
        assert!(product.created_at.is_some());
    }

    #[test]
    fn test_decode_client_shape() {
        let json = r##"{
            "id": "2",
            "title": "Ergonomic Gaming Mouse",
            "price": 59.99,
            "rating": 4.8,
            "isPrime": true,
            "imageUrl": "https://example.com/2.jpg",
            "url": "#"
        }"##;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "2");
        assert_eq!(product.product_url, "#");
        assert!(product.created_at.is_none());
    }

    #[test]
    fn test_bad_decimal_rejected() {
        let json = r#"{"id": 1, "title": "x", "price": "abc", "rating": 1, "is_prime": false}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn test_display_formats() {
        let product: Product = serde_json::from_str(
            r#"{"id": 1, "title": "x", "price": 15.9, "rating": 4, "is_prime": false}"#,
        )
        .unwrap();
        assert_eq!(product.price_display(), "$15.90");
        assert_eq!(product.rating_display(), "4.0");
    }
}
