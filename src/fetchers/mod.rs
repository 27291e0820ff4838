pub mod discover_fetcher;
