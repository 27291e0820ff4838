pub mod poster_loader;
