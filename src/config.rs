/// Endpoint and key configuration for the discovery API. Injected into the
/// client so no URL or key lives as a literal inside the fetch path.
#[derive(Debug, Clone)]
pub struct Config {
    pub discover_url: String,
    pub api_key: String,
    pub poster: PosterConfig,
}

impl Config {
    pub fn new(api_key: String) -> Self {
        Config {
            discover_url: "https://api.themoviedb.org/3/discover/movie".to_string(),
            api_key,
            poster: PosterConfig::default(),
        }
    }
}

/// Where poster images live and how large the rendered cells should be.
/// Defaults match the TMDb `w185` poster variant.
#[derive(Debug, Clone)]
pub struct PosterConfig {
    pub base_url: String,
    pub size: String,
    pub width: u32,
    pub height: u32,
}

impl Default for PosterConfig {
    fn default() -> Self {
        PosterConfig {
            base_url: "https://image.tmdb.org/t/p".to_string(),
            size: "w185".to_string(),
            width: 185,
            height: 278,
        }
    }
}

impl PosterConfig {
    /// Full poster URL for a relative `poster_path` as returned by the API
    /// (paths come with a leading slash).
    pub fn url_for(&self, poster_path: &str) -> String {
        format!("{}/{}{}", self.base_url, self.size, poster_path)
    }
}
