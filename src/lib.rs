//! Ergonomic Rust client for the knowledge-base dataset API
//!
//! This crate exposes one async method per dataset endpoint (list, detail,
//! create, web import, update, delete, bindable applications, hit test and web
//! sync) on [`DatasetClient`], using builder patterns powered by the `bon` crate.

pub mod client;
pub mod datasets;
pub mod error;
pub mod loading;
pub mod models;
pub mod transport;

pub use client::DatasetClient;
pub use error::{Error, Result};
pub use loading::LoadingFlag;
pub use models::{
    Application, Dataset, Document, HitTestRecord, Page, PageRequest, Paragraph, Problem,
    SyncType,
};
pub use transport::ApiResponse;
