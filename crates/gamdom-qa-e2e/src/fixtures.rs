//! Per-test fixtures
//!
//! Each fixture builds exactly one collaborator bound to its own transport or
//! browser session. Nothing is shared between tests.

use anyhow::{Context, Result};
use futures::future::BoxFuture;
use gamdom_qa_core::{JiraConfig, WebConfig};
use gamdom_qa_jira::JiraClient;
use gamdom_qa_web::{BrowserSession, HomePage, LoginPage, PageContext};

use crate::lifecycle::IssueLifecycle;

/// Jira client for one test
pub struct ApiFixture {
    pub jira_client: JiraClient,
    pub project_key: String,
}

impl ApiFixture {
    pub fn new() -> Result<Self> {
        let config = JiraConfig::from_env().context("Loading Jira configuration")?;
        Self::with_config(&config)
    }

    pub fn with_config(config: &JiraConfig) -> Result<Self> {
        Ok(Self {
            jira_client: JiraClient::from_config(config)?,
            project_key: config.project_key.clone(),
        })
    }

    pub fn lifecycle(&self) -> IssueLifecycle<'_> {
        IssueLifecycle::new(&self.jira_client, self.project_key.clone())
    }
}

/// Browser session plus the page objects built over its page
pub struct UiFixture {
    session: BrowserSession,
    pub home_page: HomePage,
    pub login_page: LoginPage,
}

impl UiFixture {
    pub async fn launch() -> Result<Self> {
        let config = WebConfig::from_env().context("Loading web configuration")?;
        Self::launch_with(&config).await
    }

    pub async fn launch_with(config: &WebConfig) -> Result<Self> {
        let session = BrowserSession::launch(config)
            .await
            .context("Launching browser")?;
        let context = session.page().clone();

        Ok(Self {
            home_page: HomePage::new(context.clone()),
            login_page: LoginPage::new(context),
            session,
        })
    }

    pub fn page(&self) -> &PageContext {
        self.session.page()
    }

    pub async fn teardown(self) -> Result<()> {
        self.session.close().await?;
        Ok(())
    }

    /// Launch, run `body` under the test timeout, then always close the browser
    pub async fn run<F>(body: F) -> Result<()>
    where
        F: for<'a> FnOnce(&'a UiFixture) -> BoxFuture<'a, Result<()>>,
    {
        let config = WebConfig::from_env().context("Loading web configuration")?;
        let fixture = Self::launch_with(&config).await?;

        let outcome = tokio::time::timeout(config.timeouts.test, body(&fixture)).await;
        let teardown = fixture.teardown().await;

        match outcome {
            Ok(result) => result?,
            Err(_) => anyhow::bail!(
                "Test timed out after {}ms",
                config.timeouts.test.as_millis()
            ),
        }
        teardown
    }
}
