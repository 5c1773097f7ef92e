//! # product-console
//!
//! Terminal front end for the product page. Each subcommand runs one page
//! operation against the product service and prints what the page would show:
//! the rendered `<tbody>` for listings, the modal text for views and creates.
//!
//! Running without a subcommand behaves like opening the page (page 1).

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use product_console::clients::ProductClient;
use product_console::config::ClientConfig;
use product_console::lifecycle::{setup_tracing, ProductPage};
use product_console::model::ProductId;
use product_console::render::{ConsoleNotifier, FormValues, HtmlTable};
use tracing::info;

/// Browse and add products in the product catalogue
#[derive(Parser, Debug)]
#[command(name = "product-console", version, about = "Browse and add products in the product catalogue")]
struct Cli {
    /// Product service base URL (overrides PRODUCT_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Enable verbose logging (debug level) when RUST_LOG is unset
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Wait for Enter after each alert
    #[arg(long, global = true)]
    confirm: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Fetch a page of products and print the table rows
    List {
        /// 1-indexed page number
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// Show one product as pretty-printed JSON
    View {
        /// Product id
        id: i64,
    },

    /// Create a product, then print page 1
    Add(AddArgs),
}

#[derive(Args, Debug, PartialEq)]
struct AddArgs {
    #[arg(long)]
    name: String,

    /// finished, semi-finished or raw
    #[arg(long)]
    category: String,

    #[arg(long, default_value = "")]
    description: String,

    #[arg(long, default_value = "")]
    product_image: String,

    #[arg(long)]
    sku: String,

    /// mtr, mm, ltr, ml, cm, mg, gm, unit or pack
    #[arg(long)]
    unit_of_measure: String,

    /// Days; parsed like an HTML number input, left for the service to validate
    #[arg(long, allow_hyphen_values = true)]
    lead_time: String,
}

impl AddArgs {
    fn into_form(self) -> FormValues {
        FormValues::new()
            .with("name", self.name)
            .with("category", self.category)
            .with("description", self.description)
            .with("product_image", self.product_image)
            .with("sku", self.sku)
            .with("unit_of_measure", self.unit_of_measure)
            .with("lead_time", self.lead_time)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let config = match cli.base_url {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    info!(base_url = %config.base_url(), "Starting product console");

    let notifier = if cli.confirm {
        ConsoleNotifier::confirming()
    } else {
        ConsoleNotifier::new()
    };
    let page = ProductPage::new(ProductClient::with_reqwest(config), HtmlTable::default(), notifier);

    match cli.command {
        None => {
            page.on_page_load().await;
            println!("{}", page.table().await.to_html());
        }
        Some(Command::List { page: n }) => {
            page.fetch_products(n).await;
            println!("{}", page.table().await.to_html());
        }
        Some(Command::View { id }) => page.view_product(ProductId(id)).await,
        Some(Command::Add(args)) => {
            page.add_product(&args.into_form()).await;
            let table = page.table().await;
            if !table.is_empty() {
                println!("{}", table.to_html());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use product_console::render::FormSource;

    #[test]
    fn test_no_subcommand_is_page_load() {
        let cli = Cli::try_parse_from(["product-console"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_list_page_defaults_to_one() {
        let cli = Cli::try_parse_from(["product-console", "list"]).unwrap();
        assert_eq!(cli.command, Some(Command::List { page: 1 }));
    }

    #[test]
    fn test_list_rejects_page_zero() {
        assert!(Cli::try_parse_from(["product-console", "list", "--page", "0"]).is_err());
    }

    #[test]
    fn test_global_base_url_after_subcommand() {
        let cli = Cli::try_parse_from(["product-console", "view", "42", "--base-url", "http://h:1"]).unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://h:1"));
        assert_eq!(cli.command, Some(Command::View { id: 42 }));
    }

    #[test]
    fn test_add_args_become_form_values() {
        let cli = Cli::try_parse_from([
            "product-console", "add",
            "--name", "Widget",
            "--category", "raw",
            "--sku", "W-1",
            "--unit-of-measure", "unit",
            "--lead-time", "-2",
        ])
        .unwrap();

        let Some(Command::Add(args)) = cli.command else {
            panic!("Expected add command");
        };
        let form = args.into_form();
        assert_eq!(form.value("name"), "Widget");
        assert_eq!(form.value("description"), "");
        assert_eq!(form.value("lead_time"), "-2");
    }
}
