//! # Router
//!
//! Maps user-visible paths to screens and applies the redirect rules: the root
//! path opens the create form and anything unknown falls back to the listing.

use std::fmt;

pub const CREATE_PATH: &str = "/agregar-peliculas";
pub const EDIT_PATH: &str = "/editar-pelicula";
pub const LIST_PATH: &str = "/listar-peliculas";

/// A screen the application can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Create,
    /// Edit screen; the identifier comes from the path and may be missing
    Edit { id: Option<String> },
    List,
}

impl Route {
    /// Resolve a path, applying redirects
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_matches('/');
        let mut segments = trimmed.split('/').filter(|s| !s.is_empty());

        let route = match (segments.next(), segments.next(), segments.next()) {
            (None, _, _) => Route::Create,
            (Some("agregar-peliculas"), None, _) => Route::Create,
            (Some("listar-peliculas"), None, _) => Route::List,
            (Some("editar-pelicula"), None, _) => Route::Edit { id: None },
            (Some("editar-pelicula"), Some(id), None) => Route::Edit {
                id: Some(id.to_string()),
            },
            _ => Route::List,
        };

        tracing::debug!("Resolved path '{}' to {:?}", path, route);
        route
    }

    pub fn edit(id: impl Into<String>) -> Self {
        Route::Edit {
            id: Some(id.into()),
        }
    }

    /// Canonical path of this route
    pub fn path(&self) -> String {
        match self {
            Route::Create => CREATE_PATH.to_string(),
            Route::Edit { id: Some(id) } => format!("{EDIT_PATH}/{id}"),
            Route::Edit { id: None } => EDIT_PATH.to_string(),
            Route::List => LIST_PATH.to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
