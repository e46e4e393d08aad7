//! Terminal Event Source Implementation
//!
//! Reads user events interactively with `inquire` menus and prompts. Escape
//! inside a sub-prompt goes back to the screen menu; escape or Ctrl+C on the
//! menu itself quits.

use super::{EventSource, Screen, UserEvent};
use crate::app::models::{MovieForm, MovieListing, GENRES};
use crate::app::router::{Route, CREATE_PATH, LIST_PATH};
use anyhow::Result;
use inquire::{InquireError, Select, Text};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormAction {
    Name,
    Description,
    TrailerLink,
    Poster,
    Genres,
    Submit,
    ShowList,
    Quit,
}

impl FormAction {
    const ALL: [FormAction; 8] = [
        FormAction::Name,
        FormAction::Description,
        FormAction::TrailerLink,
        FormAction::Poster,
        FormAction::Genres,
        FormAction::Submit,
        FormAction::ShowList,
        FormAction::Quit,
    ];
}

impl fmt::Display for FormAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormAction::Name => "Editar nombre",
            FormAction::Description => "Editar descripción",
            FormAction::TrailerLink => "Editar enlace del trailer",
            FormAction::Poster => "Elegir imagen del póster",
            FormAction::Genres => "Marcar/desmarcar género",
            FormAction::Submit => "Guardar",
            FormAction::ShowList => "Ver lista de películas",
            FormAction::Quit => "Salir",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListAction {
    Add,
    Edit,
    Delete,
    Refresh,
    Quit,
}

impl fmt::Display for ListAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ListAction::Add => "Agregar película",
            ListAction::Edit => "Editar película",
            ListAction::Delete => "Eliminar película",
            ListAction::Refresh => "Recargar",
            ListAction::Quit => "Salir",
        };
        f.write_str(label)
    }
}

struct GenreChoice {
    label: &'static str,
    checked: bool,
}

impl fmt::Display for GenreChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.checked { "x" } else { " " };
        write!(f, "[{mark}] {}", self.label)
    }
}

struct MovieChoice {
    index: usize,
    id: Option<String>,
    name: String,
}

impl fmt::Display for MovieChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.index, self.name)
    }
}

/// What a prompt produced
enum Flow<T> {
    Answer(T),
    Back,
    Quit,
}

fn flow<T>(result: Result<T, InquireError>) -> Result<Flow<T>> {
    match result {
        Ok(value) => Ok(Flow::Answer(value)),
        Err(InquireError::OperationCanceled) => Ok(Flow::Back),
        Err(InquireError::OperationInterrupted) => Ok(Flow::Quit),
        Err(e) => Err(e.into()),
    }
}

fn into_event<T>(flow: Flow<T>, to_event: impl FnOnce(T) -> UserEvent) -> Option<UserEvent> {
    match flow {
        Flow::Answer(value) => Some(to_event(value)),
        Flow::Back => None,
        Flow::Quit => Some(UserEvent::Quit),
    }
}

/// [`EventSource`] backed by interactive terminal prompts
#[derive(Debug, Default)]
pub struct TerminalEventSource;

impl TerminalEventSource {
    pub fn new() -> Self {
        Self
    }

    fn text(message: &str, initial: &str) -> Result<Flow<String>> {
        flow(Text::new(message).with_initial_value(initial).prompt())
    }

    fn form_event(&self, form: &MovieForm) -> Result<Option<UserEvent>> {
        let action = match flow(Select::new("¿Qué deseas hacer?", FormAction::ALL.to_vec()).prompt())? {
            Flow::Answer(action) => action,
            Flow::Back | Flow::Quit => return Ok(Some(UserEvent::Quit)),
        };

        let event = match action {
            FormAction::Name => into_event(Self::text("Nombre:", form.name())?, UserEvent::SetName),
            FormAction::Description => into_event(
                Self::text("Descripción:", form.description())?,
                UserEvent::SetDescription,
            ),
            FormAction::TrailerLink => into_event(
                Self::text("Enlace de YouTube:", form.trailer_link())?,
                UserEvent::SetTrailerLink,
            ),
            FormAction::Poster => into_event(
                Self::text("Ruta de la imagen (png, jpg, gif):", "")?,
                |path| UserEvent::SelectPoster(PathBuf::from(shellexpand::tilde(path.trim()).into_owned())),
            ),
            FormAction::Genres => {
                let choices: Vec<GenreChoice> = GENRES
                    .iter()
                    .map(|&label| GenreChoice {
                        label,
                        checked: form.genres().iter().any(|g| g == label),
                    })
                    .collect();
                into_event(
                    flow(Select::new("Género:", choices).prompt())?,
                    |choice| UserEvent::ToggleGenre {
                        genre: choice.label.to_string(),
                        checked: !choice.checked,
                    },
                )
            }
            FormAction::Submit => Some(UserEvent::Submit),
            FormAction::ShowList => Some(UserEvent::Navigate(LIST_PATH.to_string())),
            FormAction::Quit => Some(UserEvent::Quit),
        };
        Ok(event)
    }

    fn pick_movie(listing: &MovieListing) -> Result<Flow<MovieChoice>> {
        let choices: Vec<MovieChoice> = listing
            .iter()
            .enumerate()
            .map(|(index, movie)| MovieChoice {
                index,
                id: movie.id.clone(),
                name: movie.name.clone(),
            })
            .collect();
        flow(Select::new("Película:", choices).prompt())
    }

    fn list_event(&self, listing: &MovieListing) -> Result<Option<UserEvent>> {
        let mut actions = vec![ListAction::Add];
        if !listing.is_empty() {
            actions.extend([ListAction::Edit, ListAction::Delete]);
        }
        actions.extend([ListAction::Refresh, ListAction::Quit]);

        let action = match flow(Select::new("¿Qué deseas hacer?", actions).prompt())? {
            Flow::Answer(action) => action,
            Flow::Back | Flow::Quit => return Ok(Some(UserEvent::Quit)),
        };

        let event = match action {
            ListAction::Add => Some(UserEvent::Navigate(CREATE_PATH.to_string())),
            ListAction::Edit => into_event(Self::pick_movie(listing)?, |choice| {
                UserEvent::Navigate(Route::Edit { id: choice.id }.path())
            }),
            ListAction::Delete => into_event(Self::pick_movie(listing)?, |choice| {
                UserEvent::Delete {
                    index: choice.index,
                }
            }),
            ListAction::Refresh => Some(UserEvent::Navigate(LIST_PATH.to_string())),
            ListAction::Quit => Some(UserEvent::Quit),
        };
        Ok(event)
    }
}

impl EventSource for TerminalEventSource {
    fn next_event(&mut self, screen: &Screen<'_>) -> Result<UserEvent> {
        loop {
            let event = match screen {
                Screen::CreateForm(form) | Screen::EditForm { form, .. } => self.form_event(form)?,
                Screen::List(listing) => self.list_event(listing)?,
            };
            if let Some(event) = event {
                tracing::debug!("User event: {:?}", event);
                return Ok(event);
            }
        }
    }
}
