//! Element locators
//!
//! A [`LocatorSpec`] is an ordered list of selector strategies plus an
//! optional text filter. Strategies are tried in order and the first matching
//! element wins, so a spec tolerates minor markup drift by listing fallbacks.
//! A [`Locator`] binds a spec to a live page.

use crate::error::{Error, Result};
use crate::wait::poll_until;
use chromiumoxide::{Element, Page};
use gamdom_qa_core::Timeouts;
use std::fmt;
use std::time::Duration;

const IS_VISIBLE_JS: &str = r#"function() {
    const style = window.getComputedStyle(this);
    if (style.visibility === 'hidden' || style.display === 'none') {
        return false;
    }
    const rect = this.getBoundingClientRect();
    return rect.width > 0 && rect.height > 0;
}"#;

const CLEAR_VALUE_JS: &str = r#"function() {
    this.value = '';
    this.dispatchEvent(new Event('input', { bubbles: true }));
}"#;

/// One way of finding an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    Css(String),
    /// Exact `data-testid` match
    TestId(String),
    /// Case-insensitive substring match on the `placeholder` attribute
    Placeholder(String),
}

impl Strategy {
    pub fn to_css(&self) -> String {
        match self {
            Strategy::Css(css) => css.clone(),
            Strategy::TestId(id) => format!("[data-testid={}]", css_string(id)),
            Strategy::Placeholder(text) => format!("[placeholder*={} i]", css_string(text)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorSpec {
    strategies: Vec<Strategy>,
    has_text: Option<String>,
}

impl LocatorSpec {
    pub fn css(selector: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::Css(selector.into()))
    }

    /// Ordered CSS fallbacks
    pub fn any_css<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strategies: selectors
                .into_iter()
                .map(|s| Strategy::Css(s.into()))
                .collect(),
            has_text: None,
        }
    }

    pub fn test_id(id: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::TestId(id.into()))
    }

    pub fn placeholder(text: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::Placeholder(text.into()))
    }

    fn from_strategy(strategy: Strategy) -> Self {
        Self {
            strategies: vec![strategy],
            has_text: None,
        }
    }

    /// Append another spec's strategies as fallbacks
    pub fn or(mut self, other: LocatorSpec) -> Self {
        self.strategies.extend(other.strategies);
        if self.has_text.is_none() {
            self.has_text = other.has_text;
        }
        self
    }

    /// Keep only elements whose visible text contains `text`
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.has_text = Some(text.into());
        self
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn text_filter(&self) -> Option<&str> {
        self.has_text.as_deref()
    }

    pub fn selectors(&self) -> Vec<String> {
        self.strategies.iter().map(Strategy::to_css).collect()
    }
}

impl fmt::Display for LocatorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.selectors().join(" | "))?;
        if let Some(text) = &self.has_text {
            write!(f, " >> text={:?}", text)?;
        }
        Ok(())
    }
}

/// A [`LocatorSpec`] bound to a page
#[derive(Clone)]
pub struct Locator {
    page: Page,
    spec: LocatorSpec,
    timeouts: Timeouts,
}

impl Locator {
    pub fn new(page: Page, spec: LocatorSpec, timeouts: Timeouts) -> Self {
        Self {
            page,
            spec,
            timeouts,
        }
    }

    pub fn spec(&self) -> &LocatorSpec {
        &self.spec
    }

    /// First element matching the spec right now
    async fn resolve(&self) -> Result<Option<Element>> {
        for selector in self.spec.selectors() {
            for element in self.page.find_elements(selector.as_str()).await? {
                match self.spec.text_filter() {
                    None => return Ok(Some(element)),
                    Some(needle) => {
                        let text = element.inner_text().await?.unwrap_or_default();
                        if text_matches(&text, needle) {
                            return Ok(Some(element));
                        }
                    }
                }
            }
        }
        Ok(None)
    }

    async fn resolve_visible(&self) -> Result<Option<Element>> {
        match self.resolve().await? {
            Some(element) if element_visible(&element).await? => Ok(Some(element)),
            _ => Ok(None),
        }
    }

    /// Visible at this instant; does not wait
    pub async fn is_visible(&self) -> Result<bool> {
        Ok(self.resolve_visible().await?.is_some())
    }

    pub async fn wait_visible(&self, timeout: Duration) -> Result<()> {
        let what = format!("{} to be visible", self.spec);
        poll_until(&what, timeout, || self.resolve_visible()).await?;
        Ok(())
    }

    /// Wait for visibility using the default assertion timeout
    pub async fn expect_visible(&self) -> Result<()> {
        self.wait_visible(self.timeouts.expect).await
    }

    async fn actionable(&self) -> Result<Element> {
        let what = format!("{} to be actionable", self.spec);
        poll_until(&what, self.timeouts.action, || self.resolve_visible()).await
    }

    pub async fn click(&self) -> Result<()> {
        tracing::debug!("click {}", self.spec);
        self.actionable().await?.click().await?;
        Ok(())
    }

    /// Replace the element's value with `text`
    pub async fn fill(&self, text: &str) -> Result<()> {
        tracing::debug!("fill {}", self.spec);
        let element = self.actionable().await?;
        element.call_js_fn(CLEAR_VALUE_JS, false).await?;
        element.click().await?;
        element.type_str(text).await?;
        Ok(())
    }

    pub async fn text_content(&self) -> Result<Option<String>> {
        match self.resolve().await? {
            Some(element) => Ok(element.inner_text().await?),
            None => Err(Error::ElementNotFound(self.spec.to_string())),
        }
    }

    pub async fn attribute(&self, name: &str) -> Result<Option<String>> {
        let what = format!("{} to be attached", self.spec);
        let element = poll_until(&what, self.timeouts.action, || self.resolve()).await?;
        Ok(element.attribute(name).await?)
    }
}

async fn element_visible(element: &Element) -> Result<bool> {
    let returns = element.call_js_fn(IS_VISIBLE_JS, false).await?;
    Ok(returns
        .result
        .value
        .and_then(|v| v.as_bool())
        .unwrap_or(false))
}

/// Whitespace-normalized, case-insensitive substring match
pub fn text_matches(haystack: &str, needle: &str) -> bool {
    let normalize = |s: &str| {
        s.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    };
    normalize(haystack).contains(&normalize(needle))
}

/// Quote a value for use inside a CSS attribute selector
fn css_string(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_css() {
        assert_eq!(
            Strategy::TestId("start-playing-login".to_string()).to_css(),
            r#"[data-testid="start-playing-login"]"#
        );
        assert_eq!(
            Strategy::Placeholder("Enter your username".to_string()).to_css(),
            r#"[placeholder*="Enter your username" i]"#
        );
        assert_eq!(
            Strategy::Css("input[name=\"password\"]".to_string()).to_css(),
            r#"input[name="password"]"#
        );
    }

    #[test]
    fn test_css_string_escapes_quotes() {
        assert_eq!(css_string(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(css_string(r"back\slash"), r#""back\\slash""#);
    }

    #[test]
    fn test_or_keeps_order() {
        let spec = LocatorSpec::placeholder("Enter your password")
            .or(LocatorSpec::css(r#"input[name="password"]"#));
        assert_eq!(
            spec.selectors(),
            vec![
                r#"[placeholder*="Enter your password" i]"#.to_string(),
                r#"input[name="password"]"#.to_string(),
            ]
        );
    }

    #[test]
    fn test_any_css_and_text_filter() {
        let spec = LocatorSpec::any_css(["a", "b", "c"]).with_text("Incorrect credentials");
        assert_eq!(spec.strategies().len(), 3);
        assert_eq!(spec.text_filter(), Some("Incorrect credentials"));
        assert_eq!(spec.to_string(), r#"a | b | c >> text="Incorrect credentials""#);
    }

    #[test]
    fn test_text_matches() {
        assert!(text_matches("  Incorrect\n credentials. Try again ", "incorrect credentials"));
        assert!(!text_matches("Welcome back", "Incorrect credentials"));
        assert!(text_matches("anything", ""));
    }
}
