//! # Movie Listing Model
//!
//! In-memory list of records shown by the list screen. It is owned by the list
//! controller and only changes through [`MovieListing::replace`] and
//! [`MovieListing::remove_at`].

use super::movie::MovieRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieListing {
    movies: Vec<MovieRecord>,
}

impl MovieListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap the whole listing for a freshly fetched collection
    pub fn replace(&mut self, movies: Vec<MovieRecord>) {
        self.movies = movies;
    }

    /// Remove exactly one entry, returning it if the position exists
    pub fn remove_at(&mut self, index: usize) -> Option<MovieRecord> {
        if index < self.movies.len() {
            Some(self.movies.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&MovieRecord> {
        self.movies.get(index)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MovieRecord> {
        self.movies.iter()
    }
}
