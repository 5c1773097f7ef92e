//! Typed access to the product service.

pub mod error;
pub mod product_client;
pub mod transport;

pub use error::*;
pub use product_client::*;
pub use transport::*;
