//! Page objects

pub mod base;
pub mod header;
pub mod home;
pub mod login;

pub use base::BasePage;
pub use header::HeaderComponent;
pub use home::HomePage;
pub use login::LoginPage;
