//! HTML rendering of product rows.
//!
//! Every field value is escaped before it is placed in markup; server data is
//! never trusted as HTML.

use super::{RenderTarget, PRODUCT_TABLE_ID};
use crate::model::Product;

/// An in-memory `<tbody>` that collects rendered `<tr>` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlTable {
    id: String,
    rows: Vec<String>,
}

impl Default for HtmlTable {
    fn default() -> Self {
        Self::new(PRODUCT_TABLE_ID)
    }
}

impl HtmlTable {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rows: Vec::new(),
        }
    }

    /// Rendered `<tr>` markup, one entry per row.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The whole table body.
    pub fn to_html(&self) -> String {
        let mut out = format!("<tbody id=\"{}\">\n", html_escape(&self.id));
        for row in &self.rows {
            out.push_str(row);
            out.push('\n');
        }
        out.push_str("</tbody>");
        out
    }
}

impl RenderTarget for HtmlTable {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, product: &Product) {
        self.rows.push(render_row(product));
    }
}

/// Render one product as a table row.
///
/// Cells: id, name, category, description (`N/A` when empty), sku,
/// unit_of_measure, lead_time, and a "View" button bound to the id.
pub fn render_row(product: &Product) -> String {
    let id = product.product_id;
    let cells = [
        id.to_string(),
        html_escape(&product.name),
        html_escape(&product.category),
        html_escape(product.display_description()),
        html_escape(&product.sku),
        html_escape(&product.unit_of_measure),
        product.lead_time.to_string(),
    ];

    let mut row = String::from("<tr>");
    for cell in &cells {
        row.push_str("<td>");
        row.push_str(cell);
        row.push_str("</td>");
    }
    row.push_str(&format!(
        "<td><button data-product-id=\"{id}\" onclick=\"viewProduct({id})\">View</button></td>"
    ));
    row.push_str("</tr>");
    row
}

/// Escape text for use in HTML element content and quoted attributes.
///
/// - `&` -> `&amp;`
/// - `<` -> `&lt;`
/// - `>` -> `&gt;`
/// - `"` -> `&quot;`
/// - `'` -> `&#x27;`
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
