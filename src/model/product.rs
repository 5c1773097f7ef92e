//! Represents a product record owned by the remote product service.
//!
//! The console only ever holds transient copies: every render starts from a
//! freshly fetched page, and nothing is mutated locally.
//!
//! See [`ProductClient`](crate::clients::ProductClient) for the operations that
//! produce these values, and [`NewProduct`] for the creation payload.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Categories accepted by the product service.
pub const CATEGORIES: &[&str] = &["finished", "semi-finished", "raw"];

/// Units of measure accepted by the product service.
pub const UNITS_OF_MEASURE: &[&str] = &["mtr", "mm", "ltr", "ml", "cm", "mg", "gm", "unit", "pack"];

/// Server-assigned identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub product_image: Option<String>,
    pub sku: String,
    pub unit_of_measure: String,
    pub lead_time: i64,
    // Kept as the raw server text; see `created_at` / `updated_at`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<String>,
}

impl Product {
    /// Description as shown in the table: `N/A` when absent or empty.
    pub fn display_description(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => "N/A",
        }
    }

    /// Creation timestamp, if the server sent one in a recognised format.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_date.as_deref().and_then(parse_timestamp)
    }

    /// Last update timestamp, if the server sent one in a recognised format.
    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        self.updated_date.as_deref().and_then(parse_timestamp)
    }
}

/// Accepts naive ISO-8601 (`2024-05-01T10:00:00[.ffffff]`) and RFC 3339 with an offset.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| chrono::DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc()))
}

/// Payload for creating a new product (`POST /product/add`).
///
/// `lead_time` is `None` when the form input had no leading digits; it is sent
/// as `null` and left for the server to reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub description: String,
    pub product_image: String,
    pub sku: String,
    pub unit_of_measure: String,
    pub lead_time: Option<i64>,
}

/// Error body returned by the product service on client errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Human readable detail.
    ///
    /// Strings are used verbatim. Structured details (validation error lists)
    /// are rendered as compact JSON. A body without `detail` falls back to the
    /// HTTP status.
    pub fn message(&self, status: u16) -> String {
        match &self.detail {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Null) | None => format!("HTTP {}", status),
            Some(other) => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget() -> Product {
        Product {
            product_id: ProductId(1),
            name: "Widget".to_string(),
            category: "raw".to_string(),
            description: None,
            product_image: None,
            sku: "W-1".to_string(),
            unit_of_measure: "unit".to_string(),
            lead_time: 3,
            created_date: None,
            updated_date: None,
        }
    }

    #[test]
    fn test_description_placeholder() {
        let mut p = widget();
        assert_eq!(p.display_description(), "N/A");
        p.description = Some(String::new());
        assert_eq!(p.display_description(), "N/A");
        p.description = Some("Blue".to_string());
        assert_eq!(p.display_description(), "Blue");
    }

    #[test]
    fn test_decodes_server_response() {
        let raw = json!({
            "name": "Widget",
            "category": "finished",
            "description": null,
            "product_image": null,
            "sku": "W-1",
            "unit_of_measure": "pack",
            "lead_time": 7,
            "product_id": 42,
            "created_date": "2024-05-01T10:00:00",
            "updated_date": "2024-05-02T11:30:00.123456"
        });
        let p: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(p.product_id, ProductId(42));
        assert_eq!(p.description, None);
        assert_eq!(p.lead_time, 7);
        assert_eq!(
            p.created_at().unwrap().format("%Y-%m-%d %H:%M").to_string(),
            "2024-05-01 10:00"
        );
        assert!(p.updated_at().is_some());
    }

    #[test]
    fn test_decodes_without_timestamps() {
        let raw = json!({
            "product_id": 3, "name": "Bolt", "category": "raw",
            "sku": "B-3", "unit_of_measure": "unit", "lead_time": 0
        });
        let p: Product = serde_json::from_value(raw).unwrap();
        assert!(p.created_at().is_none());
        assert!(p.product_image.is_none());
    }

    #[test]
    fn test_rfc3339_timestamp() {
        let mut p = widget();
        p.created_date = Some("2024-05-01T10:00:00Z".to_string());
        assert!(p.created_at().is_some());
        p.created_date = Some("yesterday".to_string());
        assert!(p.created_at().is_none());
    }

    #[test]
    fn test_new_product_serializes_missing_lead_time_as_null() {
        let payload = NewProduct {
            name: "Widget".to_string(),
            category: "raw".to_string(),
            description: String::new(),
            product_image: String::new(),
            sku: "W-1".to_string(),
            unit_of_measure: "unit".to_string(),
            lead_time: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["lead_time"], serde_json::Value::Null);
        assert_eq!(value["description"], "");
    }

    #[test]
    fn test_error_body_message() {
        let body: ErrorBody = serde_json::from_value(json!({"detail": "sku already exists"})).unwrap();
        assert_eq!(body.message(400), "sku already exists");

        let body: ErrorBody = serde_json::from_value(json!({"detail": [{"loc": ["body", "lead_time"]}]})).unwrap();
        assert_eq!(body.message(422), r#"[{"loc":["body","lead_time"]}]"#);

        let body: ErrorBody = serde_json::from_value(json!({})).unwrap();
        assert_eq!(body.message(500), "HTTP 500");
    }
}
