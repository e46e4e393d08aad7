//! # Marquee - Terminal Client for a Movie Catalog
//!
//! Create, list, edit and delete movies stored behind a REST catalog API.
//!
//! ## Architecture
//!
//! This application follows the Model-View-Controller pattern:
//!
//! ```text
//! ┌─────────────┐   UserEvent   ┌──────────────┐   CatalogApi   ┌──────────┐
//! │    View     │──────────────►│  Controller  │───────────────►│ Service  │
//! │             │               │              │                │          │
//! │ - Prompts   │◄──────────────│ - Routing    │◄───────────────│ - HTTP   │
//! │ - Rendering │    Screen     │ - Validation │  MovieRecord   │ - JSON   │
//! └─────────────┘               └──────────────┘                └──────────┘
//!                                      │
//!                                      ▼
//!                               ┌──────────────┐
//!                               │    Models    │
//!                               │ - Form state │
//!                               │ - Listing    │
//!                               └──────────────┘
//! ```

pub mod app;
pub mod cmd_args;
pub mod config;

// Re-export main types for easy access
pub use app::*;
