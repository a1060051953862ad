//! # Blogspace
//!
//! Composition root: loads configuration, wires storage and repositories,
//! and prints one page as JSON: a single post when `BLOGSPACE_POST` names a
//! slug, the search page when `BLOGSPACE_SEARCH` or `BLOGSPACE_SEARCH_TAG` is
//! set, otherwise the home page.

mod config;
mod error;
mod state;
mod telemetry;

use anyhow::Context;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    tracing::info!(
        storage = %config.storage,
        seed_samples = config.seed_samples,
        "Starting Blogspace"
    );

    let state = match AppState::new(&config).await {
        Ok(state) => state,
        Err(e) => {
            let notice = e.notice();
            tracing::error!(message = %notice.message, "Failed to initialize storage");
            return Err(e).context("initializing application state");
        }
    };

    let output = if let Some(slug) = config.post_slug.as_deref() {
        match state.post_detail(slug, None).await {
            Ok(detail) => serde_json::to_string_pretty(&detail),
            Err(e) => serde_json::to_string_pretty(&e.notice()),
        }
    } else if let Some(params) = &config.search {
        let results = state.search(params).await;
        tracing::info!(matches = results.results.len(), "Search page ready");
        serde_json::to_string_pretty(&results)
    } else {
        let home = state.home_page(None, config.home_page).await;
        tracing::info!(
            page = home.listing.page,
            total_pages = home.listing.total_pages,
            total_items = home.listing.total_items,
            "Home feed ready"
        );
        serde_json::to_string_pretty(&home)
    }
    .context("encoding page")?;

    println!("{output}");

    Ok(())
}
