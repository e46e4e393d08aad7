//! # Application Controller
//!
//! Owns the active screen, turns paths into screens (following redirects),
//! and runs the event loop: render, wait for a user event, apply it.

use std::sync::Arc;

use anyhow::Result;

use super::{Activation, CreateMovieController, EditMovieController, ListMoviesController, SubmitOutcome};
use crate::app::events::{EventSource, Screen, UserEvent};
use crate::app::models::MovieForm;
use crate::app::router::Route;
use crate::app::services::CatalogApi;
use crate::app::views::{render_screen, Dialog, RenderStream};

/// Screen currently shown, with its controller
pub enum ActiveScreen<A: CatalogApi> {
    Create(CreateMovieController<A>),
    Edit(EditMovieController<A>),
    List(ListMoviesController<A>),
}

impl<A: CatalogApi> ActiveScreen<A> {
    pub fn view(&self) -> Screen<'_> {
        match self {
            ActiveScreen::Create(c) => Screen::CreateForm(c.form()),
            ActiveScreen::Edit(c) => Screen::EditForm {
                id: c.id(),
                form: c.form(),
            },
            ActiveScreen::List(c) => Screen::List(c.listing()),
        }
    }

    fn form_mut(&mut self) -> Option<&mut MovieForm> {
        match self {
            ActiveScreen::Create(c) => Some(c.form_mut()),
            ActiveScreen::Edit(c) => Some(c.form_mut()),
            ActiveScreen::List(_) => None,
        }
    }
}

/// The main application controller
pub struct AppController<A, D, ES, RS>
where
    A: CatalogApi,
    D: Dialog,
    ES: EventSource,
    RS: RenderStream,
{
    api: Arc<A>,
    dialog: D,
    event_source: ES,
    render_stream: RS,
    screen: ActiveScreen<A>,
    route: Route,
    should_quit: bool,
}

impl<A, D, ES, RS> AppController<A, D, ES, RS>
where
    A: CatalogApi,
    D: Dialog,
    ES: EventSource,
    RS: RenderStream,
{
    /// Create new application controller with injected I/O
    pub fn with_io(api: Arc<A>, dialog: D, event_source: ES, render_stream: RS) -> Self {
        let screen = ActiveScreen::Create(CreateMovieController::new(api.clone()));
        Self {
            api,
            dialog,
            event_source,
            render_stream,
            screen,
            route: Route::Create,
            should_quit: false,
        }
    }

    /// Open `start_path` and process events until the user quits
    pub async fn run(&mut self, start_path: &str) -> Result<()> {
        self.navigate(Route::parse(start_path)).await;
        self.render()?;

        while !self.should_quit {
            let event = self.event_source.next_event(&self.screen.view())?;
            self.apply_event(event).await;
            if !self.should_quit {
                self.render()?;
            }
        }

        tracing::info!("Leaving application");
        Ok(())
    }

    /// Apply a single user event to the active screen
    pub async fn apply_event(&mut self, event: UserEvent) {
        tracing::debug!("Applying {:?} on {}", event, self.route);

        match event {
            UserEvent::Quit => self.should_quit = true,
            UserEvent::Navigate(path) => self.navigate(Route::parse(&path)).await,
            UserEvent::SetName(value) => self.edit_form(|form| form.set_name(value)),
            UserEvent::SetDescription(value) => self.edit_form(|form| form.set_description(value)),
            UserEvent::SetTrailerLink(value) => self.edit_form(|form| form.set_trailer_link(value)),
            UserEvent::SelectPoster(path) => match &mut self.screen {
                ActiveScreen::Create(c) => {
                    c.select_poster(&path, &self.dialog).await;
                }
                ActiveScreen::Edit(c) => {
                    c.select_poster(&path, &self.dialog).await;
                }
                ActiveScreen::List(_) => Self::ignored("SelectPoster"),
            },
            UserEvent::ToggleGenre { genre, checked } => {
                let result = match &mut self.screen {
                    ActiveScreen::Create(c) => c.toggle_genre(&genre, checked, &self.dialog),
                    ActiveScreen::Edit(c) => c.toggle_genre(&genre, checked, &self.dialog),
                    ActiveScreen::List(_) => return Self::ignored("ToggleGenre"),
                };
                if let Err(e) = result {
                    tracing::debug!("Genre '{}' left unchanged: {}", genre, e);
                }
            }
            UserEvent::Submit => {
                let outcome = match &mut self.screen {
                    ActiveScreen::Create(c) => c.submit(&self.dialog).await,
                    ActiveScreen::Edit(c) => c.submit(&self.dialog).await,
                    ActiveScreen::List(_) => return Self::ignored("Submit"),
                };
                if let SubmitOutcome::Saved { next, .. } = outcome {
                    self.navigate(next).await;
                }
            }
            UserEvent::Delete { index } => match &mut self.screen {
                ActiveScreen::List(c) => {
                    c.delete(index, &self.dialog).await;
                }
                _ => Self::ignored("Delete"),
            },
        }
    }

    /// Activate the screen for `route`, following redirects until one is ready
    pub async fn navigate(&mut self, mut route: Route) {
        loop {
            tracing::debug!("Activating {}", route);
            let screen = match route.clone() {
                Route::Create => ActiveScreen::Create(CreateMovieController::new(self.api.clone())),
                Route::Edit { id } => {
                    match EditMovieController::activate(self.api.clone(), id.as_deref(), &self.dialog)
                        .await
                    {
                        Activation::Ready(c) => ActiveScreen::Edit(c),
                        Activation::Redirect(next) => {
                            tracing::info!("Redirecting from {} to {}", route, next);
                            route = next;
                            continue;
                        }
                    }
                }
                Route::List => {
                    let mut c = ListMoviesController::new(self.api.clone());
                    c.activate(&self.dialog).await;
                    ActiveScreen::List(c)
                }
            };
            self.screen = screen;
            self.route = route;
            return;
        }
    }

    fn edit_form(&mut self, apply: impl FnOnce(&mut MovieForm)) {
        match self.screen.form_mut() {
            Some(form) => apply(form),
            None => Self::ignored("form edit"),
        }
    }

    fn ignored(what: &str) {
        tracing::debug!("{} does not apply to the current screen", what);
    }

    fn render(&mut self) -> Result<()> {
        let text = render_screen(&self.screen.view());
        self.render_stream.show(&text)
    }

    pub fn current_route(&self) -> &Route {
        &self.route
    }

    pub fn screen(&self) -> &ActiveScreen<A> {
        &self.screen
    }

    pub fn dialog(&self) -> &D {
        &self.dialog
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
