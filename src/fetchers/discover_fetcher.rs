use std::sync::Arc;

use crate::clients::tmdb_client::{FetchError, TmdbClient};
use crate::model::movie::Movie;

/// Completion callback for a background discovery fetch. Invoked exactly once
/// per spawned task, from the runtime context the task runs on.
pub trait OnMoviesFetched: Send + Sync {
    fn on_movies_fetched(&self, result: Result<Vec<Movie>, FetchError>);
}

/// Handle for one in-flight fetch. Dropping it detaches the task; `abort`
/// cancels it, in which case the listener is never invoked.
pub struct FetchTask {
    handle: tokio::task::JoinHandle<()>,
}

impl FetchTask {
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Waits for the task to finish (or to acknowledge an abort).
    pub async fn join(self) {
        if let Err(e) = self.handle.await {
            if e.is_cancelled() {
                log::info!("Movie fetch task was cancelled before completing");
            } else {
                log::error!("Movie fetch task panicked: {}", e);
            }
        }
    }
}

#[derive(Clone)]
pub struct DiscoverFetcher {
    tmdb_client: Arc<TmdbClient>,
}

impl DiscoverFetcher {
    pub fn new(tmdb_client: Arc<TmdbClient>) -> Self {
        DiscoverFetcher { tmdb_client }
    }

    /// Runs one discovery fetch on a background task. Each call opens its own
    /// connection; concurrent fetches are independent and unordered.
    pub fn spawn(&self, sort_by: String, listener: Arc<dyn OnMoviesFetched>) -> FetchTask {
        let client = self.tmdb_client.clone();

        let handle = tokio::spawn(async move {
            log::info!("Fetching movies sorted by {}", sort_by);

            let result = client.discover(&sort_by).await;
            match &result {
                Ok(movies) => log::info!("Fetched {} movies", movies.len()),
                Err(e) => log::error!("Movie fetch failed: {}", e),
            }

            listener.on_movies_fetched(result);
        });

        FetchTask { handle }
    }
}
