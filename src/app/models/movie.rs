//! # Movie Record Model
//!
//! The shape of a catalog entry as exchanged with the backend.

use serde::{Deserialize, Deserializer, Serialize};

/// Genre labels offered by the forms, in display order
pub const GENRES: [&str; 10] = [
    "Acción",
    "Aventura",
    "Comedia",
    "Drama",
    "Terror",
    "Ciencia Ficción",
    "Fantasía",
    "Romance",
    "Documental",
    "Animación",
];

/// One movie in the catalog.
///
/// Missing and `null` fields decode as empty values, so an empty JSON object
/// is an empty record. The identifier is only present once the backend assigned it
/// and is never sent back in a request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "nombre", deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "descripcion", deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(rename = "trailerLink", deserialize_with = "null_as_default")]
    pub trailer_link: String,

    /// `data:` URL of the poster image
    #[serde(deserialize_with = "null_as_default")]
    pub poster: String,

    #[serde(rename = "genero", deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
}

impl MovieRecord {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Copy of this record without its identifier, as sent in request bodies
    pub fn without_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Check if a label belongs to the genre vocabulary
pub fn is_known_genre(label: &str) -> bool {
    GENRES.contains(&label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> MovieRecord {
        MovieRecord {
            id: Some("65f1c0ffee".to_string()),
            name: "Alien".to_string(),
            description: "In space no one can hear you scream".to_string(),
            trailer_link: "https://www.youtube.com/watch?v=LjLamj-b0I8".to_string(),
            poster: "data:image/png;base64,iVBORw0KGgo=".to_string(),
            genres: vec!["Terror".to_string(), "Ciencia Ficción".to_string()],
        }
    }

    #[test]
    fn movie_record_should_use_backend_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["_id"], "65f1c0ffee");
        assert_eq!(value["nombre"], "Alien");
        assert_eq!(value["descripcion"], "In space no one can hear you scream");
        assert_eq!(value["trailerLink"], "https://www.youtube.com/watch?v=LjLamj-b0I8");
        assert_eq!(value["genero"], json!(["Terror", "Ciencia Ficción"]));
    }

    #[test]
    fn movie_record_should_omit_missing_id() {
        let value = serde_json::to_value(sample().without_id()).unwrap();
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn movie_record_should_decode_empty_object_as_empty_record() {
        let record: MovieRecord = serde_json::from_value(json!({})).unwrap();
        assert_eq!(record, MovieRecord::default());
    }

    #[test]
    fn movie_record_should_ignore_unknown_fields() {
        let record: MovieRecord = serde_json::from_value(json!({
            "_id": "abc",
            "nombre": "Up",
            "genero": ["Animación"],
            "__v": 0
        }))
        .unwrap();
        assert_eq!(record.id(), Some("abc"));
        assert_eq!(record.name, "Up");
        assert_eq!(record.genres, vec!["Animación".to_string()]);
        assert!(record.poster.is_empty());
    }

    #[test]
    fn movie_record_should_decode_null_fields_as_empty() {
        let record: MovieRecord = serde_json::from_value(json!({
            "_id": "65f1",
            "nombre": "Up",
            "descripcion": null,
            "trailerLink": null,
            "poster": null,
            "genero": null
        }))
        .unwrap();
        assert_eq!(record.name, "Up");
        assert!(record.description.is_empty());
        assert!(record.trailer_link.is_empty());
        assert!(record.poster.is_empty());
        assert!(record.genres.is_empty());
    }

    #[test]
    fn genre_vocabulary_should_have_ten_distinct_labels() {
        let mut labels = GENRES.to_vec();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 10);
        assert!(is_known_genre("Ciencia Ficción"));
        assert!(!is_known_genre("Western"));
    }
}
