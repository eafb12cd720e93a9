use reqwest::{Client, Error as RequestError};
use tracing::{instrument, Level};

use crate::config::Config;

/// One session for every detail page in a run.
pub fn make_client(config: &Config) -> Result<Client, RequestError> {
    Client::builder()
        .gzip(true)
        .user_agent(config.user_agent.as_str())
        .timeout(config.request_timeout)
        .build()
}

/// An error status is not a failure: the body is still returned and parsed like any other page.
#[instrument(skip(client), level = Level::TRACE)]
pub async fn fetch_detail_page(client: &Client, url: &str) -> Result<String, RequestError> {
    let start = std::time::Instant::now();
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        log::warn!("{url} answered {}", response.status());
    }
    let text = response.text().await?;
    log::trace!("Got text of detail page in \t {:?}", start.elapsed());
    Ok(text)
}
