use std::sync::{Arc, Mutex};

pub mod adapters;
pub mod clients;
pub mod config;
pub mod fetchers;
pub mod images;
pub mod model;

use adapters::grid_adapter::MovieGridAdapter;
use clients::tmdb_client::{FetchError, TmdbClient};
use config::Config;
use fetchers::discover_fetcher::{DiscoverFetcher, OnMoviesFetched};
use images::poster_loader::LogOnlyLoader;
use model::movie::Movie;

type FetchResult = Result<Vec<Movie>, FetchError>;

/// Listener that forwards the one-shot fetch outcome back to the awaiting
/// caller. The sender slot is taken on first use, so a second invocation
/// (which the fetcher never does) would be a no-op.
struct ChannelListener {
    sender: Mutex<Option<tokio::sync::oneshot::Sender<FetchResult>>>,
}

impl ChannelListener {
    fn new() -> (Arc<Self>, tokio::sync::oneshot::Receiver<FetchResult>) {
        let (sender, receiver) = tokio::sync::oneshot::channel();
        let listener = Arc::new(ChannelListener {
            sender: Mutex::new(Some(sender)),
        });
        (listener, receiver)
    }
}

impl OnMoviesFetched for ChannelListener {
    fn on_movies_fetched(&self, result: FetchResult) {
        let Ok(mut slot) = self.sender.lock() else {
            return;
        };
        if let Some(sender) = slot.take() {
            let _ = sender.send(result);
        }
    }
}

pub async fn run(config: Config, sort_by: String) {
    let tmdb_client = Arc::new(TmdbClient::new(config.clone()));
    let fetcher = DiscoverFetcher::new(tmdb_client);

    let (listener, receiver) = ChannelListener::new();
    let task = fetcher.spawn(sort_by, listener);

    let outcome = receiver.await;
    task.join().await;

    let movies = match outcome {
        Ok(Ok(movies)) => movies,
        Ok(Err(e)) => {
            log::error!("Could not load movies: {}", e);
            println!("Could not load movies: {}", e);
            return;
        }
        Err(_) => {
            log::error!("Fetch task finished without reporting a result");
            return;
        }
    };

    if movies.is_empty() {
        println!("No movies found.");
        return;
    }

    let adapter = MovieGridAdapter::new(movies, Arc::new(LogOnlyLoader), config.poster);
    render_grid(&adapter);
}

/// Walks every grid position the way a rendering widget would: one cell per
/// movie, each triggering a single poster request against the collaborator.
fn render_grid(adapter: &MovieGridAdapter) {
    println!("Found {} movies:", adapter.count());

    for position in 0..adapter.count() {
        let (Some(movie), Some(cell)) = (adapter.item_at(position), adapter.cell_for(position, None))
        else {
            continue;
        };
        println!(
            "{:>3}. {} [poster: {}]",
            position + 1,
            movie.summary(),
            cell.poster_url.as_deref().unwrap_or("<none>")
        );
    }
}
