//! # Field Validators
//!
//! Pure validation rules shared by the create and edit forms. Every rule
//! returns `Ok(())` or the [`FieldError`] describing why the value was rejected.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

const YOUTUBE_LINK_PATTERN: &str =
    r"^(https?://)?(www\.)?(youtube\.com/watch\?v=|youtu\.be/)[A-Za-z0-9_-]{11}(&.*)?$";

const BASE64_IMAGE_PATTERN: &str = r"^data:image/(png|jpeg|jpg|gif);base64,[A-Za-z0-9+/=]+$";

static YOUTUBE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(YOUTUBE_LINK_PATTERN).expect("valid regex"));

static BASE64_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BASE64_IMAGE_PATTERN).expect("valid regex"));

/// Why a single form field failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Este campo es obligatorio")]
    Required,

    #[error("El enlace debe ser un video de YouTube válido")]
    InvalidYoutubeUrl,

    #[error("El póster debe ser una imagen png, jpeg, jpg o gif en base64")]
    InvalidBase64Image,

    #[error("Los géneros no son válidos")]
    InvalidGenres,

    #[error("Selecciona al menos {required} género(s) (seleccionados: {actual})")]
    MinGenres { required: usize, actual: usize },
}

/// Outcome of a single rule
pub type Validation = Result<(), FieldError>;

/// Rejects empty text
pub fn required(value: &str) -> Validation {
    if value.is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(())
    }
}

/// YouTube watch or short link with an 11 character video token.
///
/// Empty values pass; [`required`] reports those.
pub fn youtube_link(value: &str) -> Validation {
    if value.is_empty() || YOUTUBE_LINK.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidYoutubeUrl)
    }
}

/// `data:` URL carrying a png/jpeg/jpg/gif image as base64.
///
/// Empty values pass; [`required`] reports those.
pub fn base64_image(value: &str) -> Validation {
    if value.is_empty() || BASE64_IMAGE.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidBase64Image)
    }
}

/// At least `min` genres selected
pub fn min_genres(genres: &[String], min: usize) -> Validation {
    if genres.len() >= min {
        Ok(())
    } else {
        Err(FieldError::MinGenres {
            required: min,
            actual: genres.len(),
        })
    }
}

/// An empty selection counts as missing, like any other required field
pub fn required_genres(genres: &[String]) -> Validation {
    if genres.is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genres(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn required_should_reject_only_empty_text() {
        assert_eq!(required(""), Err(FieldError::Required));
        assert!(required(" ").is_ok());
        assert!(required("Matrix").is_ok());
    }

    #[test]
    fn youtube_link_should_accept_watch_and_short_links() {
        for link in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "http://youtube.com/watch?v=dQw4w9WgXcQ",
            "www.youtube.com/watch?v=dQw4w9WgXcQ",
            "youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "youtu.be/a-b_c-d_e-f",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&",
        ] {
            assert!(youtube_link(link).is_ok(), "{link} should be accepted");
        }
    }

    #[test]
    fn youtube_link_should_reject_other_links() {
        for link in [
            "https://vimeo.com/123456789",
            "https://www.youtube.com/watch?v=short",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQX",
            "https://www.youtube.com/watch?v=dQw4w9WgXc!",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?t=42",
            "ftp://youtube.com/watch?v=dQw4w9WgXcQ",
            " https://youtu.be/dQw4w9WgXcQ",
        ] {
            assert_eq!(
                youtube_link(link),
                Err(FieldError::InvalidYoutubeUrl),
                "{link} should be rejected"
            );
        }
    }

    #[test]
    fn youtube_link_should_leave_empty_value_to_required() {
        assert!(youtube_link("").is_ok());
    }

    #[test]
    fn base64_image_should_accept_supported_image_types() {
        for data in [
            "data:image/png;base64,iVBORw0KGgo=",
            "data:image/jpeg;base64,/9j/4AAQSkZJRg==",
            "data:image/jpg;base64,AAAA",
            "data:image/gif;base64,R0lGODlhAQABAAAAACw=",
        ] {
            assert!(base64_image(data).is_ok(), "{data} should be accepted");
        }
    }

    #[test]
    fn base64_image_should_reject_other_payloads() {
        for data in [
            "data:image/webp;base64,UklGRg==",
            "data:image/png;base64,",
            "data:image/png;base64,abc$",
            "data:text/plain;base64,aGVsbG8=",
            "image/png;base64,iVBORw0KGgo=",
            "https://example.com/poster.png",
        ] {
            assert_eq!(
                base64_image(data),
                Err(FieldError::InvalidBase64Image),
                "{data} should be rejected"
            );
        }
    }

    #[test]
    fn min_genres_should_count_selected_labels() {
        assert_eq!(
            min_genres(&[], 1),
            Err(FieldError::MinGenres {
                required: 1,
                actual: 0
            })
        );
        assert!(min_genres(&genres(&["Drama"]), 1).is_ok());
        assert!(min_genres(&genres(&["Drama", "Terror"]), 1).is_ok());
        assert_eq!(
            min_genres(&genres(&["Drama"]), 2),
            Err(FieldError::MinGenres {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn min_genres_error_should_mention_counts() {
        let err = FieldError::MinGenres {
            required: 1,
            actual: 0,
        };
        assert!(err.to_string().contains('1'));
        assert!(err.to_string().contains('0'));
    }
}
