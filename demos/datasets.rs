//! Example demonstrating dataset management functionality

use anyhow::Context;
use kb_dataset_client::{
    DatasetClient, Document, LoadingFlag, PageRequest, Paragraph, Problem, SyncType,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    let client = DatasetClient::from_env().context("failed to configure dataset client")?;
    let loading = LoadingFlag::new();

    println!("  Dataset Management Example");
    println!("=============================");

    // Create a dataset
    println!("\n1. Creating a dataset...");
    let dataset = client
        .create_dataset()
        .name("example-dataset")
        .desc("An example dataset for testing")
        .documents(vec![Document::builder()
            .name("getting-started.md")
            .paragraphs(vec![Paragraph::builder()
                .title("Installation")
                .content("Run the installer and follow the prompts.")
                .problem_list(vec![Problem::builder().content("How do I install it?").build()])
                .build()])
            .build()])
        .loading(loading.clone())
        .call()
        .await?;

    println!(" Created dataset: {}", serde_json::to_string_pretty(&dataset)?);

    // List datasets
    println!("\n2. Listing datasets...");
    let page = client
        .list_datasets(PageRequest::new(1, 10))
        .name("example")
        .call()
        .await?;
    println!(" {} of {} datasets", page.records.len(), page.total);

    // Hit test
    println!("\n3. Running a hit test...");
    let hits = client
        .hit_test(dataset.id.as_str())
        .query_text("install")
        .top_number(5)
        .similarity(0.6)
        .call()
        .await?;
    for hit in &hits {
        println!(" {:.3}  {}", hit.similarity, hit.content);
    }

    // Import and sync a web dataset
    println!("\n4. Importing a web dataset...");
    match client
        .create_web_dataset()
        .name("example-web-dataset")
        .desc("Scraped documentation")
        .source_url("https://docs.example.com")
        .selector(".article")
        .call()
        .await
    {
        Ok(web) => {
            let synced = client
                .sync_web_dataset(web.id.as_str(), SyncType::Complete)
                .call()
                .await?;
            println!(" Synced web dataset {}: {}", web.id, synced);
            client.delete_dataset(web.id.as_str()).call().await?;
        }
        Err(e) => {
            println!("  Could not import web dataset: {}", e);
        }
    }

    // Clean up
    println!("\n5. Deleting dataset...");
    let deleted = client.delete_dataset(dataset.id.as_str()).call().await?;
    println!(" Deleted: {}", deleted);

    println!("\n Dataset management example completed!");
    Ok(())
}
