pub mod tmdb_client;
