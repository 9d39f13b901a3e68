//! Login modal, opened from the header sign-in button

use crate::error::Result;
use crate::locator::Locator;
use crate::pages::BasePage;
use crate::session::PageContext;

pub struct LoginPage {
    context: PageContext,
    pub modal: Locator,
    pub username_input: Locator,
    pub password_input: Locator,
    pub submit_button: Locator,
    pub error_message: Locator,
}

impl LoginPage {
    pub fn new(context: PageContext) -> Self {
        Self {
            modal: context.locator(selectors::modal()),
            username_input: context.locator(selectors::username_input()),
            password_input: context.locator(selectors::password_input()),
            submit_button: context.locator(selectors::submit_button()),
            error_message: context.locator(selectors::error_message()),
            context,
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        self.username_input.fill(username).await?;
        self.password_input.fill(password).await?;
        self.submit_button.click().await
    }

    /// Error toast text, if one is showing
    pub async fn error_message_text(&self) -> Result<Option<String>> {
        if self.error_message.is_visible().await? {
            return self.error_message.text_content().await;
        }
        Ok(None)
    }

    pub async fn is_modal_visible(&self) -> Result<bool> {
        self.modal.is_visible().await
    }

    pub async fn is_password_masked(&self) -> Result<bool> {
        let input_type = self.password_input.attribute("type").await?;
        Ok(input_type.as_deref() == Some("password"))
    }
}

impl BasePage for LoginPage {
    fn context(&self) -> &PageContext {
        &self.context
    }

    fn path(&self) -> &str {
        "/"
    }
}

pub mod selectors {
    use crate::locator::LocatorSpec;

    pub fn modal() -> LocatorSpec {
        LocatorSpec::any_css([
            r#"[data-testid*="login-modal"]"#,
            r#"[data-testid*="auth-modal"]"#,
            r#"[role="dialog"][aria-label*="login" i]"#,
            r#"[role="dialog"][aria-label*="sign in" i]"#,
            r#"[class*="login-modal" i]"#,
            r#"[class*="auth-modal" i]"#,
            r#"[class*="loginModal" i]"#,
        ])
    }

    pub fn username_input() -> LocatorSpec {
        LocatorSpec::placeholder("Enter your username")
            .or(LocatorSpec::css(r#"input[name="username"]"#))
    }

    pub fn password_input() -> LocatorSpec {
        LocatorSpec::placeholder("Enter your password")
            .or(LocatorSpec::css(r#"input[name="password"]"#))
    }

    pub fn submit_button() -> LocatorSpec {
        LocatorSpec::test_id("start-playing-login")
    }

    pub fn error_message() -> LocatorSpec {
        LocatorSpec::css(r#"[data-testid*="toastSubTitle"]"#).with_text("Incorrect credentials")
    }
}

#[cfg(test)]
mod tests {
    use super::selectors;
    use crate::locator::Strategy;

    #[test]
    fn test_inputs_fall_back_to_name_attribute() {
        let username = selectors::username_input();
        assert_eq!(
            username.strategies(),
            &[
                Strategy::Placeholder("Enter your username".to_string()),
                Strategy::Css(r#"input[name="username"]"#.to_string()),
            ]
        );

        let password = selectors::password_input().selectors();
        assert_eq!(password[1], r#"input[name="password"]"#);
    }

    #[test]
    fn test_error_message_filters_by_text() {
        let spec = selectors::error_message();
        assert_eq!(spec.text_filter(), Some("Incorrect credentials"));
        assert_eq!(spec.selectors(), vec![r#"[data-testid*="toastSubTitle"]"#]);
    }

    #[test]
    fn test_submit_button_exact_test_id() {
        assert_eq!(
            selectors::submit_button().selectors(),
            vec![r#"[data-testid="start-playing-login"]"#]
        );
    }
}
