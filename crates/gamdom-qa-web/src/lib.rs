//! Gamdom QA Web
//!
//! Browser session, locators and page objects for the website under test.
//! Automation goes through the Chrome DevTools Protocol via `chromiumoxide`.

pub mod error;
pub mod locator;
pub mod pages;
pub mod session;
mod wait;

pub use error::{Error, Result};
pub use locator::{Locator, LocatorSpec, Strategy};
pub use pages::{BasePage, HeaderComponent, HomePage, LoginPage};
pub use session::{BrowserSession, Ownership, PageContext};
