// Product listing CLI
//
// Drives the search/filter controller against a running product API and
// prints the resulting grid:
// - Category, sort, keyword and page come from flags
// - API location and timings come from LISTING_* env vars (or .env)
// - Output is the category selector, product grid and pagination line

use std::sync::Arc;

use clap::Parser;
use product_listing::listing::model::{CategoryFilter, SortKey, ALL_CATEGORIES};
use product_listing::listing::view::{category_options, render_listing};
use product_listing::listing::{HttpProductApi, ListingConfig, SearchFilterController};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "product_listing", about = "Browse the product catalog from the terminal")]
struct Args {
    /// Base URL of the product API
    #[arg(long, env = "LISTING_API_URL")]
    api_url: Option<String>,

    /// Category id, -1 for all categories
    #[arg(long, default_value_t = ALL_CATEGORIES, allow_hyphen_values = true)]
    category: i32,

    /// Sort order: latest, expensive or cheap
    #[arg(long, default_value = "latest")]
    sort: String,

    /// Search keyword
    #[arg(long, short, default_value = "")]
    keyword: String,

    /// Page to show (1-based)
    #[arg(long, short, default_value_t = 1)]
    page: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load environment variables before clap reads its env fallbacks
    dotenv::dotenv().ok();
    let args = Args::parse();

    let mut config = ListingConfig::from_env()?;
    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
    }
    let sort: SortKey = args.sort.parse()?;

    tracing::info!("Fetching products from {}", config.api_url);

    let api = Arc::new(HttpProductApi::new(&config)?);
    let mut controller = SearchFilterController::start(api, &config);

    controller.set_category(CategoryFilter::from(args.category));
    controller.set_sort_key(sort);
    if !args.keyword.is_empty() {
        controller.set_keyword(args.keyword);
    }
    controller.run_until_idle().await;

    if args.page > 1 {
        controller.set_page(args.page)?;
        controller.run_until_idle().await;
    }

    let selected = controller.state().category;
    let options: Vec<String> = category_options(controller.categories())
        .into_iter()
        .map(|(label, filter)| {
            if filter == selected {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect();

    println!(
        "{}    sort: {}    {} per page",
        options.join(" | "),
        controller.state().sort,
        controller.page_size()
    );
    println!();
    print!(
        "{}",
        render_listing(
            controller.current_result_set(),
            controller.categories(),
            controller.state().page,
        )
    );

    Ok(())
}
