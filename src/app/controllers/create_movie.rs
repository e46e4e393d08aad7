//! # Create Movie Controller
//!
//! Drives the empty movie form and posts it to the catalog once it validates.

use std::path::Path;
use std::sync::Arc;

use super::{apply_genre, gate_submission, load_poster, SubmitOutcome, CREATE_FAILED};
use crate::app::models::MovieForm;
use crate::app::router::Route;
use crate::app::services::CatalogApi;
use crate::app::validation::FieldError;
use crate::app::views::Dialog;

pub struct CreateMovieController<A: CatalogApi> {
    api: Arc<A>,
    form: MovieForm,
}

impl<A: CatalogApi> CreateMovieController<A> {
    /// Create a controller with an empty form
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            form: MovieForm::new(),
        }
    }

    pub fn form(&self) -> &MovieForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut MovieForm {
        &mut self.form
    }

    /// Read an image file into the poster field
    pub async fn select_poster(&mut self, path: &Path, dialog: &impl Dialog) -> bool {
        load_poster(&mut self.form, path, dialog).await
    }

    pub fn toggle_genre(
        &mut self,
        genre: &str,
        checked: bool,
        dialog: &impl Dialog,
    ) -> Result<(), FieldError> {
        apply_genre(&mut self.form, genre, checked, dialog)
    }

    /// Validate and create the movie
    pub async fn submit(&mut self, dialog: &impl Dialog) -> SubmitOutcome {
        if !gate_submission(&mut self.form) {
            return SubmitOutcome::Invalid;
        }

        match self.api.create(&self.form.to_record()).await {
            Ok(record) => {
                tracing::info!("Movie created with id {:?}", record.id());
                SubmitOutcome::Saved {
                    record,
                    next: Route::List,
                }
            }
            Err(e) => {
                tracing::error!("Failed to create movie: {}", e);
                dialog.alert(CREATE_FAILED);
                SubmitOutcome::Failed(e)
            }
        }
    }
}
