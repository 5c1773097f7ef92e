use crate::clients::ProductClient;
use crate::model::{Product, ProductId};
use crate::render::{read_new_product, FormSource, Notifier, RenderTarget};
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info, instrument};

/// Alert shown after a successful create.
pub const ADDED_MESSAGE: &str = "Product added successfully!";

/// The product page: a table of products, a "View" action per row, and an
/// "add product" form.
///
/// `ProductPage` is responsible for:
/// - **Loading**: fetching page 1 when the page opens ([`on_page_load`](Self::on_page_load))
/// - **Rendering**: replacing the table rows after every successful list fetch
/// - **User feedback**: modal alerts for viewed products and create results
///
/// # Error policy
///
/// No operation returns an error. List and view failures are logged and
/// otherwise silent. Create failures the service explains (non-2xx with a
/// JSON body) are shown to the user; transport and decode failures are only
/// logged.
///
/// # Concurrency
///
/// Operations take `&self` and may overlap. The table is only written by
/// [`display_products`](Self::display_products), which holds the table lock
/// for the whole clear-and-append, so the last list fetch to complete wins
/// and rows from different fetches never interleave.
///
/// # Example
///
/// ```ignore
/// let page = ProductPage::new(client, HtmlTable::default(), ConsoleNotifier::new());
/// page.on_page_load().await;
/// println!("{}", page.table().await.to_html());
/// ```
pub struct ProductPage<R: RenderTarget, N: Notifier> {
    client: ProductClient,
    table: Mutex<R>,
    notifier: N,
}

impl<R: RenderTarget, N: Notifier> ProductPage<R, N> {
    pub fn new(client: ProductClient, table: R, notifier: N) -> Self {
        Self {
            client,
            table: Mutex::new(table),
            notifier,
        }
    }

    pub fn client(&self) -> &ProductClient {
        &self.client
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Lock the render target for inspection.
    pub async fn table(&self) -> MutexGuard<'_, R> {
        self.table.lock().await
    }

    /// Consume the page and hand back the render target.
    pub fn into_table(self) -> R {
        self.table.into_inner()
    }

    /// Initial fetch when the page opens.
    pub async fn on_page_load(&self) {
        debug!("Page loaded");
        self.fetch_products(1).await;
    }

    /// Fetch `page` and render it. On failure the table is left as it was.
    ///
    /// Decoding is all-or-nothing: a single record missing a required field
    /// fails the whole page, and nothing is rendered.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self, page: u32) {
        match self.client.list(page).await {
            Ok(products) => self.display_products(&products).await,
            Err(e) => error!(error = %e, "Error fetching products"),
        }
    }

    /// Replace every row of the table with `products`, in order.
    pub async fn display_products(&self, products: &[Product]) {
        let mut table = self.table.lock().await;
        table.clear();
        for product in products {
            table.append_row(product);
        }
        info!(rows = products.len(), "Table rendered");
    }

    /// Fetch one product and show its pretty-printed JSON in a modal.
    #[instrument(skip(self))]
    pub async fn view_product(&self, id: ProductId) {
        let raw = match self.client.info_json(id).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, "Error fetching product info");
                return;
            }
        };
        match serde_json::to_string_pretty(&raw) {
            Ok(pretty) => self.notifier.alert(&pretty),
            Err(e) => error!(error = %e, "Error fetching product info"),
        }
    }

    /// Submit the form as a new product.
    ///
    /// On success the user is told and page 1 is fetched again, whatever page
    /// was showing before.
    #[instrument(skip(self, form))]
    pub async fn add_product(&self, form: &dyn FormSource) {
        let payload = read_new_product(form);
        match self.client.create(&payload).await {
            Ok(_) => {
                self.notifier.alert(ADDED_MESSAGE);
                self.fetch_products(1).await;
            }
            Err(e) if e.is_user_facing() => self.notifier.alert(&e.user_message()),
            Err(e) => error!(error = %e, "Error adding product"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::mock::{MockTransport, RecordingNotifier};
    use crate::render::HtmlTable;
    use serde_json::json;

    fn page(mock: &MockTransport) -> ProductPage<HtmlTable, RecordingNotifier> {
        let client = ProductClient::new(ClientConfig::default(), mock.transport());
        ProductPage::new(client, HtmlTable::default(), RecordingNotifier::new())
    }

    #[tokio::test]
    async fn test_page_load_fetches_first_page() {
        let mock = MockTransport::new();
        mock.expect_get("http://127.0.0.1:8000/product/list?page=1").return_json(
            200,
            json!([{"product_id": 1, "name": "Bolt", "category": "raw", "sku": "B",
                    "unit_of_measure": "unit", "lead_time": 2}]),
        );

        let page = page(&mock);
        page.on_page_load().await;

        assert_eq!(page.table().await.rows().len(), 1);
        mock.verify();
    }

    #[tokio::test]
    async fn test_view_failure_shows_nothing() {
        let mock = MockTransport::new();
        mock.expect_get("http://127.0.0.1:8000/product/3/info")
            .return_json(404, json!({"detail": "Product not found"}));

        let page = page(&mock);
        page.view_product(ProductId(3)).await;

        assert!(page.notifier().alerts().is_empty());
    }
}
