use crate::adapters::grid_adapter::PosterCell;

/// Built-in visuals a cell can show while its poster is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visual {
    /// Shown while the poster is being fetched.
    Searching,
    /// Shown when the poster could not be fetched.
    NotFound,
}

/// Everything the image collaborator needs for one poster: where to fetch,
/// what size to scale to, and what to show before/instead of the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterRequest {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub placeholder: Visual,
    pub error: Visual,
}

/// Boundary to the external image-loading collaborator. Fetching, scaling,
/// caching and retry policy all live behind this trait; the grid adapter only
/// hands over a request and the cell to bind into.
pub trait PosterLoader: Send + Sync {
    fn load(&self, request: PosterRequest, cell: &mut PosterCell);
}

/// Loader used by the CLI: records the bound URL on the cell and logs the
/// request instead of moving pixels.
pub struct LogOnlyLoader;

impl PosterLoader for LogOnlyLoader {
    fn load(&self, request: PosterRequest, cell: &mut PosterCell) {
        log::debug!(
            "poster load requested: {} ({}x{})",
            request.url,
            request.width,
            request.height
        );
        cell.poster_url = Some(request.url);
    }
}
