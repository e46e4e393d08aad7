//! # Movie Catalog Application
//!
//! MVC layout: models hold form and listing state, controllers apply user
//! events and talk to the catalog service, views render screens and raise
//! dialogs.

pub mod controllers;
pub mod error;
pub mod events;
pub mod models;
pub mod router;
pub mod services;
#[cfg(any(test, feature = "tests"))]
pub mod testing;
pub mod validation;
pub mod views;

pub use controllers::AppController;
pub use error::ApiError;
pub use events::{EventSource, TerminalEventSource, TestEventSource, UserEvent};
pub use models::{MovieForm, MovieListing, MovieRecord};
pub use router::Route;
pub use services::{CatalogApi, HttpCatalogService};
pub use views::{Dialog, RenderStream, TerminalDialog, TerminalRenderStream};
