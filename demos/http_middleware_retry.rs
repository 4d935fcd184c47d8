//! HTTP middleware with retry support using reqwest-middleware.
//!
//! The client never retries on its own. This demo plugs `reqwest-retry` into the
//! HTTP stack so transient failures (network errors, timeouts, 5xx) are retried
//! with exponential backoff before the dataset client sees them.
//!
//! Run with: `cargo run --example http_middleware_retry`

use anyhow::Context;
use kb_dataset_client::DatasetClient;
use reqwest_middleware::ClientBuilder as MiddlewareClientBuilder;
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== HTTP Middleware with Retry Example ===\n");

    let retry_policy = ExponentialBackoff::builder()
        .retry_bounds(Duration::from_millis(100), Duration::from_secs(30))
        .build_with_max_retries(5);

    let inner = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
        .context("failed to build reqwest client")?;

    let http_client = MiddlewareClientBuilder::new(inner)
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build();

    let base_url = std::env::var("DATASET_API_BASE_URL")
        .unwrap_or_else(|_| kb_dataset_client::client::DEFAULT_BASE_URL.to_string());

    let client = DatasetClient::builder()
        .base_url(base_url)
        .maybe_token(std::env::var("DATASET_API_TOKEN").ok())
        .http_client(http_client)
        .build()
        .context("failed to configure dataset client")?;

    println!("Listing datasets (retries are automatic)...");

    match client.list_all_datasets().call().await {
        Ok(datasets) => println!("\nSuccess! {} datasets", datasets.len()),
        Err(e) => eprintln!("\nError after retries: {e}"),
    }

    Ok(())
}
