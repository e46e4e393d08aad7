//! # Poster Encoding
//!
//! Turns an image file into a `data:` URL so it can travel inline in the
//! record's `poster` field.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PosterError {
    #[error("No se pudo leer la imagen {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// MIME type guessed from the file extension
pub fn mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Build a `data:<mime>;base64,<payload>` URL from raw bytes
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Read an image file and encode it as a `data:` URL.
///
/// The result is not validated here; unsupported types still produce a URL
/// that the poster validator will reject.
pub async fn read_as_data_url(path: &Path) -> Result<String, PosterError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| PosterError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Read {} bytes of poster from {}", bytes.len(), path.display());
    Ok(to_data_url(mime_type(path), &bytes))
}
