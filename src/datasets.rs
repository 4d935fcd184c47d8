//! Dataset (knowledge-base) operations
//!
//! Every method is a thin request constructor: it maps its arguments onto a
//! path, query string or JSON body and hands the request to the transport.
//! Optional arguments are set through `bon` builders finished with `.call()`.
//!
//! ```no_run
//! use kb_dataset_client::{DatasetClient, LoadingFlag, PageRequest, SyncType};
//!
//! # async fn example() -> kb_dataset_client::Result<()> {
//! let client = DatasetClient::from_env()?;
//! let loading = LoadingFlag::new();
//!
//! let page = client
//!     .list_datasets(PageRequest::new(1, 20))
//!     .name("faq")
//!     .loading(loading.clone())
//!     .call()
//!     .await?;
//!
//! for dataset in &page.records {
//!     if dataset.is_web() {
//!         client.sync_web_dataset(&dataset.id, SyncType::Complete).call().await?;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use bon::bon;
use serde_json::Value;

use crate::client::DatasetClient;
use crate::error::Result;
use crate::loading::LoadingFlag;
use crate::models::{
    Application, CreateDatasetRequest, CreateWebDatasetRequest, Dataset, DatasetFilter, Document,
    HitTestQuery, HitTestRecord, Page, PageRequest, SyncType, UpdateDatasetRequest,
};

const PREFIX: &str = "dataset";

#[bon]
impl DatasetClient {
    /// List datasets one page at a time, optionally filtered by name
    #[builder]
    pub async fn list_datasets(
        &self,
        #[builder(start_fn)] page: PageRequest,
        #[builder(into)] name: Option<String>,
        loading: Option<LoadingFlag>,
    ) -> Result<Page<Dataset>> {
        let current_page = page.current_page.to_string();
        let page_size = page.page_size.to_string();
        let filter = DatasetFilter { name };

        let request = self
            .get(&[PREFIX, current_page.as_str(), page_size.as_str()])?
            .query(&filter);
        self.send(request, loading.as_ref()).await
    }

    /// List every dataset visible to the caller
    #[builder]
    pub async fn list_all_datasets(&self, loading: Option<LoadingFlag>) -> Result<Vec<Dataset>> {
        let request = self.get(&[PREFIX])?;
        self.send(request, loading.as_ref()).await
    }

    /// Get a dataset's details
    #[builder]
    pub async fn get_dataset(
        &self,
        #[builder(start_fn, into)] dataset_id: String,
        loading: Option<LoadingFlag>,
    ) -> Result<Dataset> {
        let request = self.get(&[PREFIX, dataset_id.as_str()])?;
        self.send(request, loading.as_ref()).await
    }

    /// Create a dataset from uploaded documents
    #[builder]
    pub async fn create_dataset(
        &self,
        #[builder(into)] name: String,
        #[builder(into)] desc: String,
        #[builder(default)] documents: Vec<Document>,
        loading: Option<LoadingFlag>,
    ) -> Result<Dataset> {
        let body = CreateDatasetRequest {
            name,
            desc,
            documents,
        };

        let request = self.post(&[PREFIX])?.json(&body);
        self.send(request, loading.as_ref()).await
    }

    /// Create a dataset by scraping a web source
    ///
    /// `selector` restricts scraping to the matching CSS elements.
    #[builder]
    pub async fn create_web_dataset(
        &self,
        #[builder(into)] name: String,
        #[builder(into)] desc: String,
        #[builder(into)] source_url: String,
        #[builder(into)] selector: Option<String>,
        loading: Option<LoadingFlag>,
    ) -> Result<Dataset> {
        let body = CreateWebDatasetRequest {
            name,
            desc,
            source_url,
            selector,
        };

        let request = self.post(&[PREFIX, "web"])?.json(&body);
        self.send(request, loading.as_ref()).await
    }

    /// Update a dataset; only the fields that are set are sent
    #[builder]
    pub async fn update_dataset(
        &self,
        #[builder(start_fn, into)] dataset_id: String,
        #[builder(into)] name: Option<String>,
        #[builder(into)] desc: Option<String>,
        meta: Option<Value>,
        application_id_list: Option<Vec<String>>,
        loading: Option<LoadingFlag>,
    ) -> Result<Dataset> {
        let body = UpdateDatasetRequest {
            name,
            desc,
            meta,
            application_id_list,
        };

        let request = self.put(&[PREFIX, dataset_id.as_str()])?.json(&body);
        self.send(request, loading.as_ref()).await
    }

    /// Delete a dataset
    #[builder]
    pub async fn delete_dataset(
        &self,
        #[builder(start_fn, into)] dataset_id: String,
        loading: Option<LoadingFlag>,
    ) -> Result<bool> {
        let request = self.del(&[PREFIX, dataset_id.as_str()])?;
        self.send_acknowledged(request, loading.as_ref()).await
    }

    /// List the applications this dataset can be bound to
    #[builder]
    pub async fn list_usable_applications(
        &self,
        #[builder(start_fn, into)] dataset_id: String,
        loading: Option<LoadingFlag>,
    ) -> Result<Vec<Application>> {
        let request = self.get(&[PREFIX, dataset_id.as_str(), "application"])?;
        self.send(request, loading.as_ref()).await
    }

    /// Run a retrieval query against the dataset's indexed paragraphs
    #[builder]
    pub async fn hit_test(
        &self,
        #[builder(start_fn, into)] dataset_id: String,
        #[builder(into)] query_text: String,
        top_number: u32,
        similarity: f64,
        loading: Option<LoadingFlag>,
    ) -> Result<Vec<HitTestRecord>> {
        let query = HitTestQuery {
            query_text,
            top_number,
            similarity,
        };

        let request = self
            .get(&[PREFIX, dataset_id.as_str(), "hit_test"])?
            .query(&query);
        self.send(request, loading.as_ref()).await
    }

    /// Re-ingest a web dataset from its source
    #[builder]
    pub async fn sync_web_dataset(
        &self,
        #[builder(start_fn, into)] dataset_id: String,
        #[builder(start_fn)] sync_type: SyncType,
        loading: Option<LoadingFlag>,
    ) -> Result<bool> {
        let request = self
            .put(&[PREFIX, dataset_id.as_str(), "sync_web"])?
            .query(&[("sync_type", sync_type.as_str())]);
        self.send_acknowledged(request, loading.as_ref()).await
    }
}
