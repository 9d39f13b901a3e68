//! Site header, shared by every page

use crate::error::Result;
use crate::locator::Locator;
use crate::session::PageContext;

pub struct HeaderComponent {
    pub logo: Locator,
    pub login_button: Locator,
    pub casino_nav_link: Locator,
    pub sports_nav_link: Locator,
}

impl HeaderComponent {
    pub fn new(context: &PageContext) -> Self {
        Self {
            logo: context.locator(selectors::logo()),
            login_button: context.locator(selectors::login_button()),
            casino_nav_link: context.locator(selectors::casino_nav_link()),
            sports_nav_link: context.locator(selectors::sports_nav_link()),
        }
    }

    pub async fn click_login(&self) -> Result<()> {
        self.login_button.click().await
    }

    pub async fn click_casino(&self) -> Result<()> {
        self.casino_nav_link.click().await
    }

    pub async fn click_sports(&self) -> Result<()> {
        self.sports_nav_link.click().await
    }

    pub async fn is_logo_visible(&self) -> Result<bool> {
        self.logo.is_visible().await
    }
}

pub mod selectors {
    use crate::locator::LocatorSpec;

    pub fn logo() -> LocatorSpec {
        LocatorSpec::css(r#"img[alt*="Gamdom Logo" i]"#)
    }

    pub fn login_button() -> LocatorSpec {
        LocatorSpec::css(r#"[data-testid*="signin-nav"]"#)
    }

    pub fn casino_nav_link() -> LocatorSpec {
        LocatorSpec::css(r#"[data-testid*="navLink-casino-link"]"#)
    }

    pub fn sports_nav_link() -> LocatorSpec {
        LocatorSpec::css(r#"[data-testid*="navLink-sports-link"]"#)
    }
}
