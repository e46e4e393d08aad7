//! # Services Layer
//!
//! Access to resources outside the process: the remote catalog over HTTP and
//! image files on disk.

pub mod catalog;
pub mod poster;

// Re-export service types
pub use catalog::{CatalogApi, HttpCatalogService};
pub use poster::{read_as_data_url, PosterError};
