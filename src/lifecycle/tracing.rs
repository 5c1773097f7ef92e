//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//! Failures the page swallows (list and view errors, transport errors on
//! create) end up here at `error` level, so this is where to look when the
//! table silently stays the same.
//!
//! Logs go to stderr; stdout is reserved for rendered output.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Errors and warnings only (default)
//! product-console list
//!
//! # Outcomes: rows rendered, products created
//! RUST_LOG=info product-console list --page 2
//!
//! # Full payloads and response sizes
//! RUST_LOG=debug product-console add --name Widget ...
//!
//! # Filter to the transport
//! RUST_LOG=product_console::clients=debug product-console view 42
//! ```
//!
//! ## Debug Flag for Full Payload
//!
//! With `RUST_LOG=debug`, the create payload is logged once at the start of
//! the request:
//!
//! ```text
//! DEBUG add_product:create: create called product=NewProduct { name: "Widget", ... } sku=W-1
//! DEBUG add_product:create:execute: Response received status=200 size=187 method=POST url=...
//!  INFO add_product:create: Product created product_id=9 sku=W-1
//!  INFO add_product:fetch_products: Table rendered rows=10 page=1
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the filter is `debug` when `verbose`
/// and `warn` when not.
pub fn setup_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
