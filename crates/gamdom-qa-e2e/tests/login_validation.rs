//! Login modal validation against the live site
//!
//! Run with: cargo test -p gamdom-qa-e2e --test login_validation -- --ignored

use anyhow::Result;
use futures::FutureExt;
use gamdom_qa_e2e::{init_tracing, UiFixture};
use gamdom_qa_web::BasePage;
use std::time::Duration;

const MODAL_TIMEOUT: Duration = Duration::from_secs(10);

async fn open_login_modal(ui: &UiFixture) -> Result<()> {
    ui.home_page.navigate().await?;
    ui.home_page.header.click_login().await?;
    Ok(())
}

#[tokio::test]
#[ignore = "requires a browser and network access"]
async fn test_login_modal_opens_from_header() -> Result<()> {
    init_tracing();
    UiFixture::run(|ui| {
        async move {
            open_login_modal(ui).await?;
            ui.login_page.username_input.wait_visible(MODAL_TIMEOUT).await?;
            Ok(())
        }
        .boxed()
    })
    .await
}

#[tokio::test]
#[ignore = "requires a browser and network access"]
async fn test_login_modal_contains_all_expected_fields() -> Result<()> {
    init_tracing();
    UiFixture::run(|ui| {
        async move {
            open_login_modal(ui).await?;
            let login = &ui.login_page;
            login.username_input.wait_visible(MODAL_TIMEOUT).await?;
            login.password_input.expect_visible().await?;
            login.submit_button.expect_visible().await?;
            Ok(())
        }
        .boxed()
    })
    .await
}

#[tokio::test]
#[ignore = "requires a browser and network access"]
async fn test_password_field_masks_input() -> Result<()> {
    init_tracing();
    UiFixture::run(|ui| {
        async move {
            open_login_modal(ui).await?;
            let login = &ui.login_page;
            login.password_input.wait_visible(MODAL_TIMEOUT).await?;
            assert_eq!(login.password_input.attribute("type").await?.as_deref(), Some("password"));
            assert!(login.is_password_masked().await?);
            Ok(())
        }
        .boxed()
    })
    .await
}

#[tokio::test]
#[ignore = "requires a browser and network access"]
async fn test_invalid_credentials_show_error() -> Result<()> {
    init_tracing();
    UiFixture::run(|ui| {
        async move {
            open_login_modal(ui).await?;
            let login = &ui.login_page;
            login.username_input.wait_visible(MODAL_TIMEOUT).await?;
            login.login("gamdom-qa-nonexistent-user", "not-the-password").await?;
            login.error_message.wait_visible(MODAL_TIMEOUT).await?;

            let message = login.error_message_text().await?;
            assert!(message.is_some_and(|m| m.contains("Incorrect credentials")));
            Ok(())
        }
        .boxed()
    })
    .await
}
