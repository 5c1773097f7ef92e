//! Plain data carried over the wire between the console and the product service.

pub mod product;

pub use product::*;
