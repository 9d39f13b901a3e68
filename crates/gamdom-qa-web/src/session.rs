//! Browser session lifecycle and page-level operations

use crate::error::{Error, Result};
use crate::locator::{Locator, LocatorSpec};
use crate::wait::poll_until;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use gamdom_qa_core::{Timeouts, WebConfig};
use regex::Regex;
use std::time::Duration;
use tokio::task::JoinHandle;
use url::Url;

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

/// One browser with one page, owned by a single test
pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    page: PageContext,
    ownership: Ownership,
}

/// Whether this session started Chrome or attached to one already running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Launched,
    Attached,
}

impl Ownership {
    fn for_config(config: &WebConfig) -> Self {
        if config.remote_debugging_url.is_some() {
            Ownership::Attached
        } else {
            Ownership::Launched
        }
    }
}

impl BrowserSession {
    pub async fn launch(config: &WebConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let ownership = Ownership::for_config(config);

        let (mut browser, mut handler) = match &config.remote_debugging_url {
            Some(url) => {
                tracing::info!("Connecting to remote Chrome instance at: {}", url);
                Browser::connect(url.as_str())
                    .await
                    .map_err(|e| Error::Launch(format!("Failed to connect to remote Chrome: {}", e)))?
            }
            None => {
                let mut builder = BrowserConfig::builder()
                    .no_sandbox()
                    .request_timeout(config.timeouts.navigation)
                    .window_size(WINDOW_WIDTH, WINDOW_HEIGHT)
                    .arg("--disable-gpu")
                    .arg("--disable-dev-shm-usage");
                if !config.headless {
                    builder = builder.with_head();
                }

                Browser::launch(builder.build().map_err(Error::Launch)?)
                    .await
                    .map_err(|e| Error::Launch(e.to_string()))?
            }
        };

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                if ownership == Ownership::Launched {
                    let _ = browser.close().await;
                }
                handler.abort();
                return Err(e.into());
            }
        };

        tracing::info!("Browser session ready for {}", base_url);

        Ok(Self {
            browser,
            handler,
            page: PageContext::new(page, base_url, config.timeouts),
            ownership,
        })
    }

    pub fn page(&self) -> &PageContext {
        &self.page
    }

    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Close the page, and the browser too when this session launched it.
    /// An attached Chrome keeps running for whoever else is using it.
    pub async fn close(mut self) -> Result<()> {
        let result = match self.ownership {
            Ownership::Launched => {
                let result = self.browser.close().await.map(|_| ());
                let _ = self.browser.wait().await;
                result
            }
            Ownership::Attached => self.page.page.clone().close().await,
        };
        self.handler.abort();
        tracing::info!("Browser session closed ({:?})", self.ownership);
        result?;
        Ok(())
    }
}

/// A live page plus the site base URL and timeouts page objects need
#[derive(Clone)]
pub struct PageContext {
    page: Page,
    base_url: Url,
    timeouts: Timeouts,
}

impl PageContext {
    pub fn new(page: Page, base_url: Url, timeouts: Timeouts) -> Self {
        Self {
            page,
            base_url,
            timeouts,
        }
    }

    pub fn locator(&self, spec: LocatorSpec) -> Locator {
        Locator::new(self.page.clone(), spec, self.timeouts)
    }

    pub fn timeouts(&self) -> &Timeouts {
        &self.timeouts
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Underlying CDP page
    pub fn raw(&self) -> &Page {
        &self.page
    }

    /// Load `path` relative to the base URL
    pub async fn goto(&self, path: &str) -> Result<()> {
        let url = resolve_url(&self.base_url, path)?;
        tracing::info!("Navigating to {}", url);

        tokio::time::timeout(self.timeouts.navigation, self.page.goto(url.as_str()))
            .await
            .map_err(|_| Error::Timeout {
                what: format!("navigation to {}", url),
                timeout: self.timeouts.navigation,
            })?
            .map_err(|e| Error::Navigation(format!("{}: {}", url, e)))?;

        Ok(())
    }

    /// Wait for DOM content loaded; does not wait for network idle
    pub async fn wait_for_load_state(&self) -> Result<()> {
        poll_until("DOM content loaded", self.timeouts.navigation, || async {
            let state: String = self
                .page
                .evaluate("document.readyState")
                .await?
                .into_value()?;
            Ok::<_, Error>(dom_content_loaded(&state).then_some(()))
        })
        .await
    }

    pub async fn current_url(&self) -> Result<String> {
        self.page
            .url()
            .await?
            .ok_or_else(|| Error::Navigation("Page has no URL".to_string()))
    }

    /// Wait until the page URL matches `pattern`, returning it
    pub async fn wait_for_url(&self, pattern: &Regex, timeout: Duration) -> Result<String> {
        let what = format!("URL matching /{}/", pattern);
        poll_until(&what, timeout, || async {
            let url = self.current_url().await?;
            Ok::<_, Error>(pattern.is_match(&url).then_some(url))
        })
        .await
    }
}

pub fn resolve_url(base: &Url, path: &str) -> Result<Url> {
    Ok(base.join(path)?)
}

fn dom_content_loaded(ready_state: &str) -> bool {
    matches!(ready_state, "interactive" | "complete")
}
