//! # Screen Renderer
//!
//! Turns the active screen into plain text and hands it to a [`RenderStream`].

use anyhow::Result;
use std::io::Write;

use crate::app::controllers::list_movies::embed_link;
use crate::app::events::Screen;
use crate::app::models::{FormField, MovieForm, MovieListing};

/// Number of poster characters shown before abbreviating
const POSTER_PREVIEW_CHARS: usize = 40;

/// Output sink for rendered screens
pub trait RenderStream {
    fn show(&mut self, text: &str) -> Result<()>;
}

/// [`RenderStream`] writing to stdout
#[derive(Debug, Default)]
pub struct TerminalRenderStream;

impl TerminalRenderStream {
    pub fn new() -> Self {
        Self
    }
}

impl RenderStream for TerminalRenderStream {
    fn show(&mut self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}")?;
        stdout.flush()?;
        Ok(())
    }
}

/// Render whichever screen is active
pub fn render_screen(screen: &Screen<'_>) -> String {
    match screen {
        Screen::CreateForm(form) => render_form("Agregar película", form),
        Screen::EditForm { id, form } => render_form(&format!("Editar película {id}"), form),
        Screen::List(listing) => render_listing(listing),
    }
}

/// Form values followed by the messages of every interacted field that fails
pub fn render_form(title: &str, form: &MovieForm) -> String {
    let errors = form.visible_errors();
    let mut out = format!("== {title} ==\n");

    for field in FormField::ALL {
        let value = match field {
            FormField::Name => form.name().to_string(),
            FormField::Description => form.description().to_string(),
            FormField::TrailerLink => form.trailer_link().to_string(),
            FormField::Poster => abbreviate_poster(form.poster()),
            FormField::Genres => form.genres().join(", "),
        };
        out.push_str(&format!("{:<13}{}\n", format!("{}:", field.label()), value));

        if let Some(field_errors) = errors.get(&field) {
            for error in field_errors {
                out.push_str(&format!("  ! {error}\n"));
            }
        }
    }

    out
}

/// Numbered listing with embeddable trailer links
pub fn render_listing(listing: &MovieListing) -> String {
    if listing.is_empty() {
        return "== Películas ==\nNo hay películas registradas.\n".to_string();
    }

    let mut out = format!("== Películas ({}) ==\n", listing.len());
    for (index, movie) in listing.iter().enumerate() {
        out.push_str(&format!("[{index}] {}\n", movie.name));
        out.push_str(&format!("    {}\n", movie.description));
        out.push_str(&format!("    Trailer: {}\n", embed_link(&movie.trailer_link)));
        out.push_str(&format!("    Géneros: {}\n", movie.genres.join(", ")));
    }
    out
}

fn abbreviate_poster(poster: &str) -> String {
    let total = poster.chars().count();
    if total <= POSTER_PREVIEW_CHARS {
        return poster.to_string();
    }
    let preview: String = poster.chars().take(POSTER_PREVIEW_CHARS).collect();
    format!("{preview}… ({total} caracteres)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::MovieRecord;

    fn movie(name: &str, link: &str) -> MovieRecord {
        MovieRecord {
            id: Some(format!("id-{name}")),
            name: name.to_string(),
            description: format!("{name} description"),
            trailer_link: link.to_string(),
            poster: String::new(),
            genres: vec!["Drama".to_string(), "Romance".to_string()],
        }
    }

    #[test]
    fn render_form_should_hide_errors_of_untouched_fields() {
        let form = MovieForm::new();
        let text = render_form("Agregar película", &form);

        assert!(text.starts_with("== Agregar película =="));
        assert!(!text.contains('!'));
    }

    #[test]
    fn render_form_should_show_errors_after_all_fields_touched() {
        let mut form = MovieForm::new();
        form.set_name("Heat".to_string());
        form.mark_all_touched();
        let text = render_form("Agregar película", &form);

        assert!(text.contains("Heat"));
        assert!(text.contains("! Este campo es obligatorio"));
        assert!(text.contains("! Selecciona al menos 1 género(s)"));
    }

    #[test]
    fn render_form_should_abbreviate_long_posters() {
        let mut form = MovieForm::new();
        let poster = format!("data:image/png;base64,{}", "A".repeat(200));
        form.set_poster(poster.clone());
        let text = render_form("Editar", &form);

        assert!(!text.contains(&poster));
        assert!(text.contains(&format!("({} caracteres)", poster.len())));
    }

    #[test]
    fn render_listing_should_number_movies_and_embed_trailers() {
        let mut listing = MovieListing::new();
        listing.replace(vec![
            movie("Titanic", "https://www.youtube.com/watch?v=kVrqfYjkTdQ"),
            movie("Amelie", "https://youtu.be/HUECWi5pX7o"),
        ]);
        let text = render_listing(&listing);

        assert!(text.contains("== Películas (2) =="));
        assert!(text.contains("[0] Titanic"));
        assert!(text.contains("[1] Amelie"));
        assert!(text.contains("Trailer: https://www.youtube.com/embed/kVrqfYjkTdQ"));
        assert!(text.contains("Trailer: https://youtu.be/HUECWi5pX7o"));
        assert!(text.contains("Géneros: Drama, Romance"));
    }

    #[test]
    fn render_listing_should_explain_empty_catalog() {
        let text = render_listing(&MovieListing::new());
        assert!(text.contains("No hay películas registradas."));
    }
}
