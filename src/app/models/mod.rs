//! # Models Module
//!
//! Data held by the screens: the movie record exchanged with the backend, the
//! form state behind the create/edit screens and the listing behind the list
//! screen.

pub mod form;
pub mod listing;
pub mod movie;

pub use form::{FormErrors, FormField, MovieForm, MIN_GENRES};
pub use listing::MovieListing;
pub use movie::{is_known_genre, MovieRecord, GENRES};
