//! Login / signup page (`/login`)

use tracing::info;

use super::Navigator;
use crate::driver::PageDriver;
use crate::error::E2eResult;
use crate::locator::Locator;

pub(super) const PATH: &str = "/login";

/// Both the login and the signup form live on this page
pub struct LoginPage<'a> {
    nav: Navigator<'a>,
}

impl<'a> LoginPage<'a> {
    pub fn new(driver: &'a dyn PageDriver, base_url: &'a str) -> Self {
        Self { nav: Navigator::new(driver, base_url) }
    }

    pub fn navigator(&self) -> Navigator<'a> {
        self.nav
    }

    // Login form

    pub fn login_email(&self) -> Locator {
        Locator::attribute("input", "data-qa", "login-email")
    }

    pub fn login_password(&self) -> Locator {
        Locator::attribute("input", "data-qa", "login-password")
    }

    pub fn login_button(&self) -> Locator {
        Locator::attribute("button", "data-qa", "login-button")
    }

    /// Shown after a rejected login
    pub fn login_error(&self) -> Locator {
        Locator::text("Your email or password is incorrect")
    }

    // Signup form

    pub fn signup_name(&self) -> Locator {
        Locator::attribute("input", "data-qa", "signup-name")
    }

    pub fn signup_email(&self) -> Locator {
        Locator::attribute("input", "data-qa", "signup-email")
    }

    pub fn signup_button(&self) -> Locator {
        Locator::attribute("button", "data-qa", "signup-button")
    }

    pub async fn navigate_to_login(&self) -> E2eResult<()> {
        self.nav.navigate(PATH).await
    }

    /// Fill email and password, then submit
    pub async fn perform_login(&self, email: &str, password: &str) -> E2eResult<()> {
        info!("Logging in with: {}", email);
        let driver = self.nav.driver();
        driver.fill(&self.login_email(), email).await?;
        driver.fill(&self.login_password(), password).await?;
        driver.click(&self.login_button()).await?;
        info!("Login form submitted");
        Ok(())
    }

    /// Fill name and email, then submit
    pub async fn perform_signup(&self, name: &str, email: &str) -> E2eResult<()> {
        info!("Signing up with: {} ({})", name, email);
        let driver = self.nav.driver();
        driver.fill(&self.signup_name(), name).await?;
        driver.fill(&self.signup_email(), email).await?;
        driver.click(&self.signup_button()).await?;
        info!("Signup form submitted");
        Ok(())
    }

    pub async fn is_login_error_visible(&self) -> E2eResult<bool> {
        self.nav.driver().is_visible(&self.login_error()).await
    }

    pub async fn verify_login_page_loaded(&self) -> E2eResult<()> {
        self.nav.verify_url(PATH).await?;
        self.nav.driver().expect_visible(&self.login_button()).await?;
        info!("Login page verified");
        Ok(())
    }
}
