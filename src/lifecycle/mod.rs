//! Page lifecycle and observability.
//!
//! # Main Components
//!
//! - [`ProductPage`] - owns the client, the table and the notifier, and runs
//!   the page operations (load, list, view, add)
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod page;
pub mod tracing;

pub use self::tracing::*;
pub use page::*;
