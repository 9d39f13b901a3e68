use crate::error::Result;
use crate::session::PageContext;
use async_trait::async_trait;

/// Behaviour shared by every page object
#[async_trait]
pub trait BasePage: Send + Sync {
    fn context(&self) -> &PageContext;

    /// Path relative to the site base URL
    fn path(&self) -> &str;

    async fn navigate(&self) -> Result<()> {
        self.context().goto(self.path()).await?;
        self.wait_for_page_load().await
    }

    async fn wait_for_page_load(&self) -> Result<()> {
        self.context().wait_for_load_state().await
    }
}
