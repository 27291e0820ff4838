use std::sync::Arc;

use crate::config::PosterConfig;
use crate::images::poster_loader::{PosterLoader, PosterRequest, Visual};
use crate::model::movie::Movie;

/// One grid cell bearing a poster image. Cells are recycled by the rendering
/// widget; the loader fills in `poster_url` once it has bound an image.
#[derive(Debug, Clone, PartialEq)]
pub struct PosterCell {
    pub poster_url: Option<String>,
    pub preserve_aspect_ratio: bool,
}

impl PosterCell {
    fn new() -> Self {
        PosterCell {
            poster_url: None,
            preserve_aspect_ratio: true,
        }
    }
}

/// A stateless view over one immutable snapshot of movies. New data means a
/// new adapter; there is no in-place update or diffing.
pub struct MovieGridAdapter {
    movies: Vec<Movie>,
    loader: Arc<dyn PosterLoader>,
    poster: PosterConfig,
}

impl MovieGridAdapter {
    pub fn new(movies: Vec<Movie>, loader: Arc<dyn PosterLoader>, poster: PosterConfig) -> Self {
        MovieGridAdapter {
            movies,
            loader,
            poster,
        }
    }

    /// Number of movies in the snapshot. Zero for an empty snapshot; "no data
    /// yet" is expressed by not having an adapter, never by a sentinel count.
    pub fn count(&self) -> usize {
        self.movies.len()
    }

    /// The movie at `position`, or `None` when out of range.
    pub fn item_at(&self, position: usize) -> Option<&Movie> {
        self.movies.get(position)
    }

    /// Item identity is not tracked; every position reports the same id.
    pub fn item_id(&self, _position: usize) -> u64 {
        0
    }

    /// Produces the cell for `position`, reusing `recycled` when the widget
    /// hands one back. Issues exactly one load request to the image
    /// collaborator; returns `None` when `position` is out of range.
    pub fn cell_for(&self, position: usize, recycled: Option<PosterCell>) -> Option<PosterCell> {
        let movie = self.item_at(position)?;
        let mut cell = recycled.unwrap_or_else(PosterCell::new);

        let request = PosterRequest {
            url: self.poster.url_for(&movie.poster_path),
            width: self.poster.width,
            height: self.poster.height,
            placeholder: Visual::Searching,
            error: Visual::NotFound,
        };
        self.loader.load(request, &mut cell);

        Some(cell)
    }
}
