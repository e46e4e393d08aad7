//! # List Movies Controller
//!
//! Shows every movie in the catalog and deletes entries on request.

use std::sync::Arc;

use super::{DELETE_CONFIRM, DELETE_FAILED, LIST_FAILED};
use crate::app::error::ApiError;
use crate::app::models::{MovieListing, MovieRecord};
use crate::app::services::CatalogApi;
use crate::app::views::Dialog;

/// Turn a YouTube watch link into its embeddable form
///
/// Only the first `watch?v=` is rewritten; any other link comes back as is.
pub fn embed_link(trailer_link: &str) -> String {
    trailer_link.replacen("watch?v=", "embed/", 1)
}

/// Result of a delete request
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Declined,
    Deleted(MovieRecord),
    Failed(ApiError),
    /// Nothing to delete at the requested position
    NoSuchEntry,
}

pub struct ListMoviesController<A: CatalogApi> {
    api: Arc<A>,
    listing: MovieListing,
}

impl<A: CatalogApi> ListMoviesController<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            listing: MovieListing::new(),
        }
    }

    pub fn listing(&self) -> &MovieListing {
        &self.listing
    }

    /// Fetch the whole collection; a failure leaves the listing empty
    pub async fn activate(&mut self, dialog: &impl Dialog) {
        match self.api.list_all().await {
            Ok(movies) => {
                tracing::debug!("Fetched {} movies", movies.len());
                self.listing.replace(movies);
            }
            Err(e) => {
                tracing::error!("Failed to fetch movies: {}", e);
                dialog.alert(LIST_FAILED);
                self.listing.replace(Vec::new());
            }
        }
    }

    /// Delete the movie at `index` once the user confirms.
    ///
    /// The entry leaves the listing only after the backend accepted the delete.
    pub async fn delete(&mut self, index: usize, dialog: &impl Dialog) -> DeleteOutcome {
        let Some(id) = self.listing.get(index).map(|m| m.id.clone()) else {
            tracing::warn!("No movie at position {}", index);
            return DeleteOutcome::NoSuchEntry;
        };

        if !dialog.confirm(DELETE_CONFIRM) {
            return DeleteOutcome::Declined;
        }

        let Some(id) = id else {
            tracing::error!("Movie at position {} has no id", index);
            dialog.alert(DELETE_FAILED);
            return DeleteOutcome::Failed(ApiError::transport("movie has no id"));
        };

        match self.api.delete(&id).await {
            Ok(_) => match self.listing.remove_at(index) {
                Some(removed) => {
                    tracing::info!("Movie {} deleted", id);
                    DeleteOutcome::Deleted(removed)
                }
                None => DeleteOutcome::NoSuchEntry,
            },
            Err(e) => {
                tracing::error!("Failed to delete movie {}: {}", id, e);
                dialog.alert(DELETE_FAILED);
                DeleteOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{valid_record, ApiCall, InMemoryCatalog, ScriptedDialog};

    fn five_movies() -> Arc<InMemoryCatalog> {
        Arc::new(InMemoryCatalog::with_records(
            ["A", "B", "C", "D", "E"].into_iter().map(valid_record).collect(),
        ))
    }

    fn names(listing: &MovieListing) -> Vec<String> {
        listing.iter().map(|m| m.name.clone()).collect()
    }

    #[test]
    fn embed_link_should_rewrite_watch_links() {
        assert_eq!(
            embed_link("https://www.youtube.com/watch?v=abc123"),
            "https://www.youtube.com/embed/abc123"
        );
        assert_eq!(embed_link("https://youtu.be/abc123"), "https://youtu.be/abc123");
        assert_eq!(embed_link("watch?v=awatch?v=b"), "embed/awatch?v=b");
    }

    #[tokio::test]
    async fn activate_should_load_all_movies() {
        let api = five_movies();
        let mut controller = ListMoviesController::new(api.clone());

        controller.activate(&ScriptedDialog::new()).await;

        assert_eq!(names(controller.listing()), vec!["A", "B", "C", "D", "E"]);
        assert_eq!(api.calls(), vec![ApiCall::ListAll]);
    }

    #[tokio::test]
    async fn failed_fetch_should_alert_and_leave_listing_empty() {
        let api = five_movies();
        api.fail_with(ApiError::server(503, "Service Unavailable"));
        let dialog = ScriptedDialog::new();
        let mut controller = ListMoviesController::new(api);

        controller.activate(&dialog).await;

        assert!(controller.listing().is_empty());
        assert_eq!(dialog.alerts(), vec![LIST_FAILED.to_string()]);
    }

    #[tokio::test]
    async fn delete_should_remove_exactly_the_entry_at_index() {
        let api = five_movies();
        let mut controller = ListMoviesController::new(api.clone());
        controller.activate(&ScriptedDialog::new()).await;
        let target = controller.listing().get(2).and_then(|m| m.id.clone()).unwrap();
        let dialog = ScriptedDialog::with_answers(vec![true]);

        let outcome = controller.delete(2, &dialog).await;

        assert!(matches!(outcome, DeleteOutcome::Deleted(ref m) if m.name == "C"));
        assert_eq!(names(controller.listing()), vec!["A", "B", "D", "E"]);
        assert!(api.calls().contains(&ApiCall::Delete(target)));
        assert_eq!(api.records().len(), 4);
    }

    #[tokio::test]
    async fn declined_delete_should_keep_listing() {
        let api = five_movies();
        let mut controller = ListMoviesController::new(api.clone());
        controller.activate(&ScriptedDialog::new()).await;
        let dialog = ScriptedDialog::with_answers(vec![false]);

        let outcome = controller.delete(0, &dialog).await;

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(controller.listing().len(), 5);
        assert_eq!(dialog.confirmations(), vec![DELETE_CONFIRM.to_string()]);
        assert!(!api.calls().iter().any(|c| matches!(c, ApiCall::Delete(_))));
    }

    #[tokio::test]
    async fn failed_delete_should_alert_and_keep_entry() {
        let api = five_movies();
        let mut controller = ListMoviesController::new(api.clone());
        controller.activate(&ScriptedDialog::new()).await;
        api.fail_with(ApiError::server(500, "Internal Server Error"));
        let dialog = ScriptedDialog::with_answers(vec![true]);

        let outcome = controller.delete(1, &dialog).await;

        assert!(matches!(outcome, DeleteOutcome::Failed(_)));
        assert_eq!(dialog.alerts(), vec![DELETE_FAILED.to_string()]);
        assert_eq!(controller.listing().len(), 5);
    }

    #[tokio::test]
    async fn delete_out_of_range_should_not_prompt() {
        let api = five_movies();
        let mut controller = ListMoviesController::new(api);
        controller.activate(&ScriptedDialog::new()).await;
        let dialog = ScriptedDialog::with_answers(vec![true]);

        assert_eq!(controller.delete(9, &dialog).await, DeleteOutcome::NoSuchEntry);
        assert!(dialog.confirmations().is_empty());
    }
}
