use serde::Deserialize;

/// One movie entry from the discovery feed. All five fields are mandatory in
/// the wire format; an entry missing any of them fails the whole decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub original_title: String,
    pub poster_path: String,
    pub overview: String,
    pub vote_average: f64,
    pub release_date: String,
}

/// Envelope of the discovery endpoint: a single object with a `results` array.
#[derive(Debug, Deserialize)]
pub struct DiscoverResponse {
    pub results: Vec<Movie>,
}

impl Movie {
    /// One-line human summary used by the CLI grid printout.
    pub fn summary(&self) -> String {
        format!(
            "{} ({}) - rated {:.1}",
            self.original_title, self.release_date, self.vote_average
        )
    }
}
