//! Page-side seams: where rows are drawn, how the user is told things, and
//! where form values come from.
//!
//! - [`RenderTarget`] - the `product-table` element; [`HtmlTable`] is the
//!   markup-producing implementation.
//! - [`Notifier`] - a blocking modal (`alert`); [`ConsoleNotifier`] prints it.
//! - [`FormSource`] - named input fields; [`FormValues`] is a plain map.

pub mod form;
pub mod html;
pub mod notify;

pub use form::*;
pub use html::*;
pub use notify::*;

use crate::model::Product;

/// Identifier of the table element rows are rendered into.
pub const PRODUCT_TABLE_ID: &str = "product-table";

/// A table that product rows are drawn into.
///
/// Only [`ProductPage::display_products`](crate::lifecycle::ProductPage::display_products)
/// writes to it, and always as `clear` followed by one `append_row` per record.
pub trait RenderTarget: Send {
    /// Remove every existing row.
    fn clear(&mut self);

    /// Append one row for `product` after the existing ones.
    fn append_row(&mut self, product: &Product);
}

/// Shows a message to the user and blocks until it is dismissed.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Reads the current value of a named input field.
///
/// A missing field reads as the empty string, like an empty input.
pub trait FormSource: Send + Sync {
    fn value(&self, field_id: &str) -> String;
}
