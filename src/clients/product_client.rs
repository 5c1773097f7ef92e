//! # Product Client
//!
//! Provides a typed API over the product service's REST endpoints.
//! It builds request URLs from the injected [`ClientConfig`], sends them through
//! an [`HttpTransport`], and turns responses into [`Product`] values or a
//! [`ProductError`].
use crate::clients::error::ProductError;
use crate::clients::transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport};
use crate::config::ClientConfig;
use crate::model::{ErrorBody, NewProduct, Product, ProductId};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Client for the product service.
///
/// Cheap to clone: clones share the same transport.
#[derive(Clone)]
pub struct ProductClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
}

impl ProductClient {
    pub fn new(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Client over a fresh `reqwest` connection pool.
    pub fn with_reqwest(config: ClientConfig) -> Self {
        Self::new(config, Arc::new(ReqwestTransport::new()))
    }

    pub fn list_url(&self, page: u32) -> String {
        format!("{}/product/list?page={}", self.config.base_url(), page)
    }

    pub fn info_url(&self, id: ProductId) -> String {
        format!("{}/product/{}/info", self.config.base_url(), id)
    }

    pub fn add_url(&self) -> String {
        format!("{}/product/add", self.config.base_url())
    }

    /// Fetch one page of products, in server order.
    ///
    /// The meaning of `page` is defined by the service; it is passed through as is.
    #[instrument(skip(self))]
    pub async fn list(&self, page: u32) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        let response = self.transport.execute(ApiRequest::get(self.list_url(page))).await?;
        let products: Vec<Product> = expect_success(&response)?.json()?;
        info!(count = products.len(), "Products listed");
        Ok(products)
    }

    /// Fetch one product exactly as the service sent it.
    ///
    /// Key order is preserved, so pretty-printing the result reproduces the
    /// server's object.
    #[instrument(skip(self))]
    pub async fn info_json(&self, id: ProductId) -> Result<serde_json::Value, ProductError> {
        debug!("Sending request");
        let response = self.transport.execute(ApiRequest::get(self.info_url(id))).await?;
        Ok(expect_success(&response)?.json()?)
    }

    /// Fetch one product as a typed record.
    pub async fn info(&self, id: ProductId) -> Result<Product, ProductError> {
        let raw = self.info_json(id).await?;
        Ok(serde_json::from_value(raw)?)
    }

    /// Submit a new product.
    ///
    /// Any 2xx counts as success. The created record is returned when the body
    /// decodes as a [`Product`]; a 2xx with some other body yields `Ok(None)`.
    /// A non-2xx answer becomes [`ProductError::Rejected`] carrying the
    /// service's `detail`; if that body is not JSON the error is
    /// [`ProductError::Decode`].
    #[instrument(skip(self, product), fields(sku = %product.sku))]
    pub async fn create(&self, product: &NewProduct) -> Result<Option<Product>, ProductError> {
        debug!(?product, "create called");
        let request = ApiRequest::post_json(self.add_url(), product)?;
        let response = self.transport.execute(request).await?;

        if response.is_success() {
            let created = response.json::<Product>().ok();
            match &created {
                Some(p) => info!(product_id = %p.product_id, "Product created"),
                None => debug!(status = response.status, "Created, body is not a product"),
            }
            return Ok(created);
        }

        let body: ErrorBody = response.json()?;
        Err(ProductError::Rejected {
            status: response.status,
            detail: body.message(response.status),
        })
    }
}

fn expect_success(response: &ApiResponse) -> Result<&ApiResponse, ProductError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ProductError::UnexpectedStatus {
            status: response.status,
        })
    }
}
