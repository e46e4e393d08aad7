//! # Edit Movie Controller
//!
//! Loads an existing movie into the form, then sends the edited values back
//! after the user confirms.

use std::path::Path;
use std::sync::Arc;

use super::{
    apply_genre, gate_submission, load_poster, Activation, SubmitOutcome, LOAD_FAILED, MISSING_ID,
    UPDATE_CONFIRM, UPDATE_FAILED,
};
use crate::app::models::MovieForm;
use crate::app::router::Route;
use crate::app::services::CatalogApi;
use crate::app::validation::FieldError;
use crate::app::views::Dialog;

pub struct EditMovieController<A: CatalogApi> {
    api: Arc<A>,
    id: String,
    form: MovieForm,
}

impl<A: CatalogApi> EditMovieController<A> {
    /// Fetch the movie behind `id` and prefill the form with it.
    ///
    /// Without an id, or when the movie cannot be fetched, the user is alerted
    /// and sent back to the listing.
    pub async fn activate(api: Arc<A>, id: Option<&str>, dialog: &impl Dialog) -> Activation<Self> {
        let Some(id) = id.filter(|id| !id.is_empty()) else {
            tracing::error!("Edit screen opened without a movie id");
            dialog.alert(MISSING_ID);
            return Activation::Redirect(Route::List);
        };

        match api.get_by_id(id).await {
            Ok(record) => {
                tracing::debug!("Loaded movie {} for editing", id);
                let mut form = MovieForm::new();
                form.populate(&record);
                Activation::Ready(Self {
                    api,
                    id: id.to_string(),
                    form,
                })
            }
            Err(e) => {
                tracing::error!("Failed to load movie {}: {}", id, e);
                dialog.alert(LOAD_FAILED);
                Activation::Redirect(Route::List)
            }
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn form(&self) -> &MovieForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut MovieForm {
        &mut self.form
    }

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

    /// Validate, confirm and update the movie
    pub async fn submit(&mut self, dialog: &impl Dialog) -> SubmitOutcome {
        if !gate_submission(&mut self.form) {
            return SubmitOutcome::Invalid;
        }

        if !dialog.confirm(UPDATE_CONFIRM) {
            tracing::debug!("Update of {} declined", self.id);
            return SubmitOutcome::Declined;
        }

        match self.api.update(&self.id, &self.form.to_record()).await {
            Ok(record) => {
                tracing::info!("Movie {} updated", self.id);
                SubmitOutcome::Saved {
                    record,
                    next: Route::List,
                }
            }
            Err(e) => {
                tracing::error!("Failed to update movie {}: {}", self.id, e);
                dialog.alert(UPDATE_FAILED);
                SubmitOutcome::Failed(e)
            }
        }
    }
}

impl<A: CatalogApi> std::fmt::Debug for EditMovieController<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditMovieController")
            .field("id", &self.id)
            .field("form", &self.form)
            .finish()
    }
}
