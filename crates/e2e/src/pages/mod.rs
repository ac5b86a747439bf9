//! Page objects for the storefront
//!
//! Each page object borrows the driver it was built with, so it cannot outlive
//! the page handle; the handle itself is owned by the fixture layer. Shared
//! navigation lives in [`Navigator`], which every page object embeds.

mod cart;
mod home;
mod login;
mod products;

pub use cart::CartPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use products::ProductsPage;

use serde::Serialize;
use std::fmt;
use tracing::info;

use crate::driver::PageDriver;
use crate::error::E2eResult;

/// Site every page object navigates under unless configured otherwise
pub const DEFAULT_BASE_URL: &str = "https://www.automationexercise.com";

/// Navigation shared by all page objects
#[derive(Clone, Copy)]
pub struct Navigator<'a> {
    driver: &'a dyn PageDriver,
    base_url: &'a str,
}

impl<'a> Navigator<'a> {
    pub fn new(driver: &'a dyn PageDriver, base_url: &'a str) -> Self {
        Self { driver, base_url: base_url.trim_end_matches('/') }
    }

    pub fn driver(&self) -> &'a dyn PageDriver {
        self.driver
    }

    pub fn base_url(&self) -> &'a str {
        self.base_url
    }

    /// Absolute URL for a site path, e.g. `/login`
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Go to a path under the base URL
    pub async fn navigate(&self, path: &str) -> E2eResult<()> {
        let url = self.url_for(path);
        self.driver.goto(&url).await?;
        info!("Navigated to: {}", url);
        Ok(())
    }

    pub async fn title(&self) -> E2eResult<String> {
        self.driver.title().await
    }

    pub async fn current_url(&self) -> E2eResult<String> {
        self.driver.url().await
    }

    /// Assert the page is at `path` under the base URL
    pub async fn verify_url(&self, path: &str) -> E2eResult<()> {
        self.driver.expect_url(&self.url_for(path)).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Home,
    Login,
    Products,
    Cart,
}

impl PageKind {
    pub const ALL: [PageKind; 4] = [PageKind::Home, PageKind::Login, PageKind::Products, PageKind::Cart];

    /// Path of the page under the base URL
    pub fn path(&self) -> &'static str {
        match self {
            PageKind::Home => home::PATH,
            PageKind::Login => login::PATH,
            PageKind::Products => products::PATH,
            PageKind::Cart => cart::PATH,
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageKind::Home => "home",
            PageKind::Login => "login",
            PageKind::Products => "products",
            PageKind::Cart => "cart",
        };
        f.write_str(name)
    }
}

/// Any of the page objects
pub enum PageObject<'a> {
    Home(HomePage<'a>),
    Login(LoginPage<'a>),
    Products(ProductsPage<'a>),
    Cart(CartPage<'a>),
}

impl<'a> PageObject<'a> {
    pub fn new(kind: PageKind, driver: &'a dyn PageDriver, base_url: &'a str) -> Self {
        match kind {
            PageKind::Home => PageObject::Home(HomePage::new(driver, base_url)),
            PageKind::Login => PageObject::Login(LoginPage::new(driver, base_url)),
            PageKind::Products => PageObject::Products(ProductsPage::new(driver, base_url)),
            PageKind::Cart => PageObject::Cart(CartPage::new(driver, base_url)),
        }
    }

    pub fn kind(&self) -> PageKind {
        match self {
            PageObject::Home(_) => PageKind::Home,
            PageObject::Login(_) => PageKind::Login,
            PageObject::Products(_) => PageKind::Products,
            PageObject::Cart(_) => PageKind::Cart,
        }
    }

    pub fn navigator(&self) -> Navigator<'a> {
        match self {
            PageObject::Home(p) => p.navigator(),
            PageObject::Login(p) => p.navigator(),
            PageObject::Products(p) => p.navigator(),
            PageObject::Cart(p) => p.navigator(),
        }
    }

    /// Go to this page's own path
    pub async fn navigate(&self) -> E2eResult<()> {
        self.navigator().navigate(self.kind().path()).await
    }
}
