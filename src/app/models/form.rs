//! # Movie Form Model
//!
//! Form state shared by the create and edit screens: the field values, which
//! fields the user has interacted with, and the validation rules per field.

use std::collections::{BTreeMap, BTreeSet};

use super::movie::{is_known_genre, MovieRecord};
use crate::app::validation::{
    base64_image, min_genres, required, required_genres, youtube_link, FieldError,
};

/// Minimum number of genres a movie needs
pub const MIN_GENRES: usize = 1;

/// Fields of the movie form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Description,
    TrailerLink,
    Poster,
    Genres,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Description,
        FormField::TrailerLink,
        FormField::Poster,
        FormField::Genres,
    ];

    /// Label shown next to the field
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Nombre",
            FormField::Description => "Descripción",
            FormField::TrailerLink => "Trailer",
            FormField::Poster => "Póster",
            FormField::Genres => "Géneros",
        }
    }
}

/// Validation failures grouped by field
pub type FormErrors = BTreeMap<FormField, Vec<FieldError>>;

/// Movie form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieForm {
    values: MovieRecord,
    touched: BTreeSet<FormField>,
}

impl MovieForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.values.name
    }

    pub fn description(&self) -> &str {
        &self.values.description
    }

    pub fn trailer_link(&self) -> &str {
        &self.values.trailer_link
    }

    pub fn poster(&self) -> &str {
        &self.values.poster
    }

    pub fn genres(&self) -> &[String] {
        &self.values.genres
    }

    pub fn set_name(&mut self, name: String) {
        self.values.name = name;
        self.touch(FormField::Name);
    }

    pub fn set_description(&mut self, description: String) {
        self.values.description = description;
        self.touch(FormField::Description);
    }

    pub fn set_trailer_link(&mut self, link: String) {
        self.values.trailer_link = link;
        self.touch(FormField::TrailerLink);
    }

    pub fn set_poster(&mut self, poster: String) {
        self.values.poster = poster;
        self.touch(FormField::Poster);
    }

    /// Check or uncheck a genre.
    ///
    /// Checked genres are appended, so the list keeps the order in which they
    /// were picked. Labels outside the vocabulary are refused and leave the
    /// selection as it was.
    pub fn toggle_genre(&mut self, genre: &str, checked: bool) -> Result<(), FieldError> {
        if !is_known_genre(genre) {
            return Err(FieldError::InvalidGenres);
        }

        let genres = &mut self.values.genres;
        if checked {
            if !genres.iter().any(|g| g == genre) {
                genres.push(genre.to_string());
            }
        } else {
            genres.retain(|g| g != genre);
        }
        self.touch(FormField::Genres);
        Ok(())
    }

    /// Replace every field with the values of a stored record
    pub fn populate(&mut self, record: &MovieRecord) {
        self.values = record.without_id();
    }

    /// Current values as a record without identifier
    pub fn to_record(&self) -> MovieRecord {
        self.values.without_id()
    }

    fn touch(&mut self, field: FormField) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched.contains(&field)
    }

    /// Mark every field as interacted so all validation messages show up
    pub fn mark_all_touched(&mut self) {
        self.touched.extend(FormField::ALL);
    }

    /// Run every rule configured for a single field
    pub fn field_errors(&self, field: FormField) -> Vec<FieldError> {
        let v = &self.values;
        let outcomes = match field {
            FormField::Name => vec![required(&v.name)],
            FormField::Description => vec![required(&v.description)],
            FormField::TrailerLink => {
                vec![required(&v.trailer_link), youtube_link(&v.trailer_link)]
            }
            FormField::Poster => vec![required(&v.poster), base64_image(&v.poster)],
            FormField::Genres => vec![
                required_genres(&v.genres),
                min_genres(&v.genres, MIN_GENRES),
            ],
        };
        outcomes.into_iter().filter_map(Result::err).collect()
    }

    /// Every failing field with its errors
    pub fn errors(&self) -> FormErrors {
        FormField::ALL
            .into_iter()
            .map(|field| (field, self.field_errors(field)))
            .filter(|(_, errors)| !errors.is_empty())
            .collect()
    }

    /// Errors of the fields the user has interacted with
    pub fn visible_errors(&self) -> FormErrors {
        self.errors()
            .into_iter()
            .filter(|(field, _)| self.is_touched(*field))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}
