#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod error;
mod export;
mod fetch;
mod foundation;
mod parse;
mod render;
mod scrape;

use config::Config;

pub use error::{Error, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    pretty_env_logger::init();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    log::debug!("{config:?}");

    match scrape::run(&config).await {
        Ok(path) => println!("csv is ready: {}", path.display()),
        Err(e) => {
            log::error!("Scrape failed: {e:?}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
