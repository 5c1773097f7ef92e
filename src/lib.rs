//! # Product Console
//!
//! > **List, view, and create product records through the product service's REST API.**
//!
//! This crate is the client half of a small product catalogue: it fetches
//! pages of products, renders them as HTML table rows, shows a single product
//! on demand, and submits new products from a form.
//!
//! ## 🏗️ Design Philosophy
//!
//! The page logic never touches a socket, a DOM, or a dialog directly. Each of
//! those is a trait injected at construction:
//!
//! - **[`HttpTransport`](clients::HttpTransport)**: moves bytes. Production uses `reqwest`.
//! - **[`RenderTarget`](render::RenderTarget)**: the `product-table` element.
//! - **[`Notifier`](render::Notifier)**: the blocking modal.
//! - **[`FormSource`](render::FormSource)**: the "add product" input fields.
//!
//! Request construction, response interpretation, and error branching are
//! therefore testable with [`mock::MockTransport`] and no network at all.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! [`ProductClient`](clients::ProductClient) returns
//! [`ProductError`](clients::ProductError), distinguishing transport failures,
//! undecodable bodies, unexpected statuses, and rejections the service
//! explained. [`ProductPage`](lifecycle::ProductPage) decides which of those the
//! user sees: only create rejections are surfaced; everything else is logged.
//!
//! ### 2. No Hidden Machinery
//! One request per operation. No retry, no timeout, no cancellation, no cache.
//! Overlapping list fetches are not serialized; the last one to complete
//! determines what the table shows.
//!
//! ### 3. Escaped Rendering
//! Every server-supplied value is HTML-escaped before it is placed in a row.
//!
//! ### 4. Observability
//! `tracing` spans wrap every client and page operation. See
//! [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: [`Product`](model::Product), [`NewProduct`](model::NewProduct), and the service's error body.
//! - [`config`]: [`ClientConfig`](config::ClientConfig), the injected base URL.
//! - [`clients`]: the transport seam and the typed [`ProductClient`](clients::ProductClient).
//! - [`render`]: table rendering, alerts, and form reading.
//! - [`lifecycle`]: the [`ProductPage`](lifecycle::ProductPage) controller and tracing setup.
//! - [`mock`]: test doubles.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Render page 1 from a local service
//! product-console list
//!
//! # Another host, page 3, with logs
//! RUST_LOG=info product-console --base-url http://catalogue:8000 list --page 3
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod render;
