//! Home page (`/`)

use tracing::info;

use super::Navigator;
use crate::driver::PageDriver;
use crate::error::E2eResult;
use crate::locator::{AriaRole, Locator};

pub(super) const PATH: &str = "/";

pub struct HomePage<'a> {
    nav: Navigator<'a>,
}

impl<'a> HomePage<'a> {
    pub fn new(driver: &'a dyn PageDriver, base_url: &'a str) -> Self {
        Self { nav: Navigator::new(driver, base_url) }
    }

    pub fn navigator(&self) -> Navigator<'a> {
        self.nav
    }

    // Locators

    pub fn products_link(&self) -> Locator {
        Locator::role(AriaRole::Link, "Products")
    }

    pub fn login_link(&self) -> Locator {
        Locator::attribute("a", "href", "/login")
    }

    /// Main carousel
    pub fn home_slider(&self) -> Locator {
        Locator::css("#slider")
    }

    // Actions

    pub async fn navigate_to_home(&self) -> E2eResult<()> {
        self.nav.navigate(PATH).await
    }

    pub async fn click_products(&self) -> E2eResult<()> {
        self.nav.driver().click(&self.products_link()).await?;
        info!("Clicked Products link");
        Ok(())
    }

    pub async fn click_login(&self) -> E2eResult<()> {
        self.nav.driver().click(&self.login_link()).await?;
        info!("Clicked Login link");
        Ok(())
    }

    // Verifications

    /// The page counts as loaded once the slider is visible
    pub async fn is_home_page_loaded(&self) -> E2eResult<bool> {
        let visible = self.nav.driver().is_visible(&self.home_slider()).await?;
        info!("Home page loaded: {}", visible);
        Ok(visible)
    }

    pub async fn page_title(&self) -> E2eResult<String> {
        self.nav.title().await
    }

    pub async fn current_url(&self) -> E2eResult<String> {
        self.nav.current_url().await
    }
}
