use std::{env, io, io::prelude::*};

use moviegrid::config::Config;

mod logging;

fn get_sort_criterion() -> String {
    match env::args().nth(1) {
        None => {
            print!("Please, enter a sort criterion (e.g. popularity.desc): ");
            io::stdout().flush().expect("could not flush stdout");
            let mut user_input = String::new();
            io::stdin()
                .read_line(&mut user_input)
                .expect("Failed to read user input");
            user_input.trim().to_string()
        }
        Some(sort_by) => sort_by,
    }
}

fn get_api_key() -> String {
    env::var("TMDB_API_KEY").expect("TMDB_API_KEY must be set to a valid TMDb API key")
}

#[tokio::main]
async fn main() {
    logging::setup_logging();

    let config = Config::new(get_api_key());
    moviegrid::run(config, get_sort_criterion()).await;
}
