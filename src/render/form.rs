//! Reading the "add product" form.

use super::FormSource;
use crate::model::NewProduct;
use std::collections::HashMap;

/// Form values held in a map, keyed by field id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    values: HashMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field_id, value);
        self
    }

    pub fn set(&mut self, field_id: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field_id.into(), value.into());
    }
}

impl FormSource for FormValues {
    fn value(&self, field_id: &str) -> String {
        self.values.get(field_id).cloned().unwrap_or_default()
    }
}

/// Snapshot the form into a creation payload.
///
/// Nothing is validated here; the product service does that.
pub fn read_new_product(form: &dyn FormSource) -> NewProduct {
    NewProduct {
        name: form.value("name"),
        category: form.value("category"),
        description: form.value("description"),
        product_image: form.value("product_image"),
        sku: form.value("sku"),
        unit_of_measure: form.value("unit_of_measure"),
        lead_time: parse_lead_time(&form.value("lead_time")),
    }
}

/// Base-10 integer prefix parse, as a browser's `parseInt(value, 10)` does it.
///
/// Leading whitespace is skipped, one optional sign is accepted, and the
/// longest run of ASCII digits is used; anything after it is ignored. Returns
/// `None` when there are no digits.
///
/// A digit run too long for an `i64` also gives `None`, so the payload carries
/// `null`. `parseInt` would produce an imprecise float there instead; either
/// way the service rejects the value.
pub fn parse_lead_time(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lead_time_prefix_semantics() {
        assert_eq!(parse_lead_time("12"), Some(12));
        assert_eq!(parse_lead_time("  7 days"), Some(7));
        assert_eq!(parse_lead_time("-3"), Some(-3));
        assert_eq!(parse_lead_time("+5"), Some(5));
        assert_eq!(parse_lead_time("012"), Some(12));
        assert_eq!(parse_lead_time("3.9"), Some(3));
    }

    #[test]
    fn test_parse_lead_time_without_digits() {
        assert_eq!(parse_lead_time(""), None);
        assert_eq!(parse_lead_time("abc"), None);
        assert_eq!(parse_lead_time("-"), None);
        assert_eq!(parse_lead_time("+-1"), None);
    }

    #[test]
    fn test_parse_lead_time_out_of_range() {
        assert_eq!(parse_lead_time("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_lead_time("99999999999999999999"), None);
        assert_eq!(parse_lead_time("-99999999999999999999 days"), None);
    }

    #[test]
    fn test_read_new_product_from_form() {
        let form = FormValues::new()
            .with("name", "Widget")
            .with("category", "raw")
            .with("sku", "W-1")
            .with("unit_of_measure", "unit")
            .with("lead_time", "x");

        let payload = read_new_product(&form);
        assert_eq!(payload.name, "Widget");
        assert_eq!(payload.description, "");
        assert_eq!(payload.product_image, "");
        assert_eq!(payload.lead_time, None);
    }
}
