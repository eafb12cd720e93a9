use std::{future::Future, time::Duration};

use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::time::{sleep, Instant};
use tracing::{instrument, Level};

use crate::{config::Config, Error};

/// The radio input that expands the results table to every program area.
pub const EXPANSION_SELECTOR: &str = r#"input[name="findByProgramArea"]"#;
static SCROLL_TO_BOTTOM: &str = "window.scrollTo(0, document.body.scrollHeight)";
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn browser_config(config: &Config) -> crate::Result<BrowserConfig> {
    let mut builder = BrowserConfig::builder().request_timeout(config.request_timeout);
    if config.headful {
        builder = builder.with_head();
    }
    if let Some(chrome) = &config.chrome {
        builder = builder.chrome_executable(chrome);
    }
    builder.build().map_err(Error::Browser)
}

/// Renders the search results page, triggers the program-area expansion, and returns the final DOM as HTML.
#[instrument(skip(config), fields(url = %config.search_url), level = Level::DEBUG)]
pub async fn render_search_results(config: &Config) -> crate::Result<String> {
    let (mut browser, mut handler) = Browser::launch(browser_config(config)?).await?;
    let pump = tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if let Err(e) = event {
                log::debug!("browser handler stopped: {e}");
                break;
            }
        }
    });

    let content = match browser.new_page(config.search_url.as_str()).await {
        Ok(page) => expand_and_capture(&page, config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = browser.close().await {
        log::warn!("Error while closing browser: {e}");
    }
    if let Err(e) = browser.wait().await {
        log::warn!("Error while waiting for browser exit: {e}");
    }
    pump.abort();
    content
}

/// Calls `attempt` until it succeeds or `timeout` has passed, returning the last error on timeout.
async fn poll_until<T, E, F, Fut>(timeout: Duration, interval: Duration, mut attempt: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let deadline = Instant::now() + timeout;
    loop {
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(e) if Instant::now() + interval > deadline => return Err(e),
            Err(_) => sleep(interval).await,
        }
    }
}

async fn expand_and_capture(page: &Page, config: &Config) -> crate::Result<String> {
    page.wait_for_navigation().await?;
    // the input is inserted by page scripts, so it may not exist right after navigation
    let expansion = poll_until(config.request_timeout, POLL_INTERVAL, || {
        page.find_element(EXPANSION_SELECTOR)
    })
    .await?;
    expansion.click().await?;
    log::debug!("Clicked {EXPANSION_SELECTOR}, waiting {:?}", config.render_wait);
    sleep(config.render_wait).await;
    page.evaluate(SCROLL_TO_BOTTOM).await?;
    let content = page.content().await?;
    log::trace!("Rendered search results: {} bytes", content.len());
    Ok(content)
}
