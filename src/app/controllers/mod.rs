//! # Controllers Module
//!
//! One controller per screen plus the application controller that routes
//! between them. Screen controllers never navigate themselves; they report
//! the next route in their outcome and the application controller applies it.

pub mod app_controller;
pub mod create_movie;
pub mod edit_movie;
pub mod list_movies;

use std::path::Path;

use crate::app::error::ApiError;
use crate::app::models::{MovieForm, MovieRecord};
use crate::app::router::Route;
use crate::app::services::read_as_data_url;
use crate::app::validation::FieldError;
use crate::app::views::Dialog;

// Re-export main types for convenience
pub use app_controller::AppController;
pub use create_movie::CreateMovieController;
pub use edit_movie::EditMovieController;
pub use list_movies::{embed_link, DeleteOutcome, ListMoviesController};

pub const CREATE_FAILED: &str = "Error al agregar la película. Por favor, intenta de nuevo.";
pub const UPDATE_FAILED: &str = "Error al actualizar la película. Por favor, intenta de nuevo.";
pub const DELETE_FAILED: &str = "Error al eliminar la película. Por favor, intenta de nuevo.";
pub const LOAD_FAILED: &str = "No se pudo cargar la película. Redirigiendo a la lista.";
pub const LIST_FAILED: &str = "No se pudieron obtener las películas.";
pub const MISSING_ID: &str = "Error: No se proporcionó un ID válido.";
pub const UNKNOWN_GENRE: &str = "Género desconocido.";
pub const UPDATE_CONFIRM: &str = "¿Estás seguro de que deseas modificar?";
pub const DELETE_CONFIRM: &str = "¿Estas seguro de eliminar?";

/// Result of submitting a movie form
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; every field is now marked touched
    Invalid,
    /// The user declined the confirmation prompt
    Declined,
    /// The backend call failed and the user was alerted
    Failed(ApiError),
    /// The backend stored the record; navigate to `next`
    Saved { record: MovieRecord, next: Route },
}

/// Result of activating a screen that needs data before it can show up
#[derive(Debug)]
pub enum Activation<C> {
    Ready(C),
    Redirect(Route),
}

/// Encode the chosen image into the form's poster field.
///
/// An unreadable file leaves the poster as it was.
pub(crate) async fn load_poster(form: &mut MovieForm, path: &Path, dialog: &impl Dialog) -> bool {
    match read_as_data_url(path).await {
        Ok(poster) => {
            form.set_poster(poster);
            true
        }
        Err(e) => {
            tracing::warn!("Failed to load poster: {}", e);
            dialog.alert(&e.to_string());
            false
        }
    }
}

/// Check or uncheck a genre, alerting on labels outside the vocabulary
pub(crate) fn apply_genre(
    form: &mut MovieForm,
    genre: &str,
    checked: bool,
    dialog: &impl Dialog,
) -> Result<(), FieldError> {
    form.toggle_genre(genre, checked).inspect_err(|_| {
        tracing::warn!("Refusing unknown genre '{}'", genre);
        dialog.alert(UNKNOWN_GENRE);
    })
}

/// Validity gate shared by both forms: an invalid form gets every field marked
/// touched and no request goes out
pub(crate) fn gate_submission(form: &mut MovieForm) -> bool {
    if form.is_valid() {
        return true;
    }
    tracing::debug!("Form rejected: {:?}", form.errors());
    form.mark_all_touched();
    false
}
