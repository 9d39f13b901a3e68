use crate::error::Result;
use crate::locator::Locator;
use crate::pages::{BasePage, HeaderComponent};
use crate::session::PageContext;

pub struct HomePage {
    context: PageContext,
    pub header: HeaderComponent,
    pub hero_banner: Locator,
    pub featured_games_section: Locator,
}

impl HomePage {
    pub fn new(context: PageContext) -> Self {
        Self {
            header: HeaderComponent::new(&context),
            hero_banner: context.locator(selectors::hero_banner()),
            featured_games_section: context.locator(selectors::featured_games_section()),
            context,
        }
    }

    pub async fn is_hero_banner_visible(&self) -> Result<bool> {
        self.hero_banner.is_visible().await
    }
}

impl BasePage for HomePage {
    fn context(&self) -> &PageContext {
        &self.context
    }

    fn path(&self) -> &str {
        "/"
    }
}

pub mod selectors {
    use crate::locator::LocatorSpec;

    pub fn hero_banner() -> LocatorSpec {
        LocatorSpec::any_css([
            r#"[data-testid*="hero"]"#,
            r#"[data-testid*="banner"]"#,
            ".hero",
            ".banner",
            r#"section[class*="hero" i]"#,
            r#"section[class*="banner" i]"#,
            r#"div[class*="hero" i]"#,
        ])
    }

    pub fn featured_games_section() -> LocatorSpec {
        LocatorSpec::any_css([
            r#"[data-testid*="featured"]"#,
            r#"[data-testid*="games"]"#,
            r#"section[class*="featured" i]"#,
            r#"section[class*="game" i]"#,
            r#"div[class*="featured" i]"#,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::selectors;

    #[test]
    fn test_fallbacks_prefer_test_ids() {
        let hero = selectors::hero_banner().selectors();
        assert_eq!(hero.len(), 7);
        assert_eq!(hero[0], r#"[data-testid*="hero"]"#);

        let featured = selectors::featured_games_section().selectors();
        assert_eq!(featured.len(), 5);
        assert!(featured[..2].iter().all(|s| s.starts_with("[data-testid*=")));
    }
}
