//! # Events Module
//!
//! User events consumed by the application controller, the read-only view of
//! the active screen handed to event sources, and the [`EventSource`] trait
//! that lets tests replace the interactive terminal with a scripted queue.

pub mod terminal_event_source;
pub mod test_event_source;

use anyhow::Result;
use std::path::PathBuf;

use crate::app::models::{MovieForm, MovieListing};

pub use terminal_event_source::TerminalEventSource;
pub use test_event_source::TestEventSource;

/// Something the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {
    SetName(String),
    SetDescription(String),
    SetTrailerLink(String),
    /// Image file to encode as the poster
    SelectPoster(PathBuf),
    ToggleGenre { genre: String, checked: bool },
    Submit,
    /// Delete the entry at this position of the listing
    Delete { index: usize },
    /// Go to a path; redirects apply
    Navigate(String),
    Quit,
}

/// Read-only view of the active screen
#[derive(Debug, Clone, Copy)]
pub enum Screen<'a> {
    CreateForm(&'a MovieForm),
    EditForm { id: &'a str, form: &'a MovieForm },
    List(&'a MovieListing),
}

/// Source of user events
///
/// Production reads them interactively from the terminal; tests pop them from
/// a pre-programmed queue.
pub trait EventSource {
    /// Next event for the given screen
    fn next_event(&mut self, screen: &Screen<'_>) -> Result<UserEvent>;
}
