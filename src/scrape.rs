//! The two-stage pipeline: render and parse the directory, then fetch every detail page and merge.
use std::path::PathBuf;

use reqwest::Client;
use scraper::Html;

use crate::{
    config::Config,
    export, fetch,
    foundation::Foundation,
    parse::{Directory, FoundationDetails},
    render,
};

pub async fn extract_links(config: &Config) -> crate::Result<Directory> {
    let content = render::render_search_results(config).await?;
    let document = Html::parse_document(&content);
    let directory = Directory::from_html_element(document.root_element(), &config.base_url)?;
    if directory.is_empty() {
        log::warn!("No foundation links found on {}", config.search_url);
    }
    for link in directory.links() {
        log::trace!("Found foundation link {link}");
    }
    Ok(directory)
}

async fn fetch_details(client: &Client, url: &str) -> crate::Result<FoundationDetails> {
    let page = fetch::fetch_detail_page(client, url).await?;
    Ok(FoundationDetails::from_page(&page)?)
}

/// Fetches detail pages one at a time. A page that cannot be fetched or parsed is reported and its row left out.
pub async fn extract_details(client: &Client, directory: &Directory) -> Vec<Foundation> {
    let mut result = Vec::with_capacity(directory.len());
    for entry in directory.iter() {
        let url = entry.link();
        match fetch_details(client, url).await {
            Ok(details) => result.push(Foundation::new(entry, details)),
            Err(e) => {
                println!("Error processing url: {url}");
                println!("{e}");
                log::warn!("Skipping {url}: {e:?}");
            }
        }
    }
    result
}

/// Runs both stages and writes the export. Returns the path of the written CSV.
pub async fn run(config: &Config) -> crate::Result<PathBuf> {
    let path = export::export_path(config, &chrono::Local::now());

    println!("Extracting links...");
    let directory = extract_links(config).await?;
    println!("Links extracted: {}", directory.len());

    println!("Extracting details...");
    let client = fetch::make_client(config)?;
    let rows = extract_details(&client, &directory).await;
    println!("Details extracted");
    if rows.len() < directory.len() {
        log::warn!(
            "{} of {} detail pages could not be fetched",
            directory.len() - rows.len(),
            directory.len()
        );
    }

    export::write_csv(&path, &rows)?;
    Ok(path)
}
