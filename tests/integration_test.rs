//! Integration tests for kb-dataset-client against a live backend

use kb_dataset_client::{DatasetClient, PageRequest};

/// Helper to create a client from environment variables
fn create_test_client() -> DatasetClient {
    let _ = dotenvy::dotenv();
    DatasetClient::from_env().expect("Failed to create client from environment")
}

#[tokio::test]
#[ignore = "requires a running dataset API and DATASET_API_TOKEN"]
async fn test_dataset_lifecycle() {
    let client = create_test_client();

    let dataset = client
        .create_dataset()
        .name("integration-test-dataset")
        .desc("created by the integration tests")
        .call()
        .await
        .expect("Failed to create dataset");
    assert!(!dataset.id.is_empty(), "Dataset ID should not be empty");

    let fetched = client
        .get_dataset(dataset.id.as_str())
        .call()
        .await
        .expect("Failed to fetch dataset");
    assert_eq!(fetched.name, "integration-test-dataset");

    let updated = client
        .update_dataset(dataset.id.as_str())
        .desc("updated by the integration tests")
        .call()
        .await
        .expect("Failed to update dataset");
    assert_eq!(
        updated.desc.as_deref(),
        Some("updated by the integration tests")
    );

    let page = client
        .list_datasets(PageRequest::new(1, 10))
        .name("integration-test")
        .call()
        .await
        .expect("Failed to list datasets");
    assert!(page.records.iter().any(|d| d.id == dataset.id));

    let deleted = client
        .delete_dataset(dataset.id.as_str())
        .call()
        .await
        .expect("Failed to delete dataset");
    assert!(deleted);
}

#[tokio::test]
#[ignore = "requires a running dataset API and DATASET_API_TOKEN"]
async fn test_list_all_and_applications() {
    let client = create_test_client();

    let datasets = client
        .list_all_datasets()
        .call()
        .await
        .expect("Failed to list all datasets");

    if let Some(dataset) = datasets.first() {
        let result = client
            .list_usable_applications(dataset.id.as_str())
            .call()
            .await;
        assert!(
            result.is_ok(),
            "Failed to list applications: {:?}",
            result.err()
        );
    }
}
