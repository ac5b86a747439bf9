//! Per-test dependencies
//!
//! Builds page objects, test data and browser-context configuration for one
//! scenario. The page handle is owned by the caller; everything built here
//! borrows it.

use serde::{Deserialize, Serialize};
use tracing::info;

use shopwright_common::locale::{self, LocaleDescriptor};
use shopwright_common::BrowserContextConfig;

use crate::driver::PageDriver;
use crate::error::E2eResult;
use crate::pages::{CartPage, HomePage, LoginPage, PageKind, PageObject, ProductsPage};

/// Credentials used by the login scenarios
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestUser {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl Default for TestUser {
    fn default() -> Self {
        Self {
            email: "testuser@example.com".to_string(),
            password: "Test@123".to_string(),
            name: "Test User".to_string(),
        }
    }
}

impl TestUser {
    /// Default user with `SHOPWRIGHT_USER_*` environment overrides applied
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            email: lookup("SHOPWRIGHT_USER_EMAIL").unwrap_or(defaults.email),
            password: lookup("SHOPWRIGHT_USER_PASSWORD").unwrap_or(defaults.password),
            name: lookup("SHOPWRIGHT_USER_NAME").unwrap_or(defaults.name),
        }
    }
}

/// Construct a page object bound to `handle`
pub fn build_page_object<'a>(kind: PageKind, handle: &'a dyn PageDriver, base_url: &'a str) -> PageObject<'a> {
    PageObject::new(kind, handle, base_url)
}

/// `base` with locale and timezone replaced by those of `locale_identifier`.
/// Unknown identifiers resolve to the en-US descriptor.
pub fn build_browser_context_config(base: &BrowserContextConfig, locale_identifier: &str) -> BrowserContextConfig {
    base.with_locale(locale::resolve(locale_identifier))
}

/// Whether `locale_identifier` is a right-to-left locale; unknown identifiers
/// are left-to-right
pub fn is_right_to_left(locale_identifier: &str) -> bool {
    locale::resolve(locale_identifier).is_right_to_left()
}

/// Everything one scenario needs
pub struct Fixtures<'a> {
    page: &'a dyn PageDriver,
    base_url: &'a str,
    locale: &'static LocaleDescriptor,
    context: &'a BrowserContextConfig,
    user: TestUser,
}

impl<'a> Fixtures<'a> {
    pub fn new(
        page: &'a dyn PageDriver,
        base_url: &'a str,
        context: &'a BrowserContextConfig,
        user: TestUser,
    ) -> Self {
        Self {
            page,
            base_url,
            locale: locale::resolve(context.locale()),
            context,
            user,
        }
    }

    /// Raw page handle
    pub fn page(&self) -> &'a dyn PageDriver {
        self.page
    }

    pub fn base_url(&self) -> &'a str {
        self.base_url
    }

    /// Descriptor the browser context was configured from
    pub fn locale_config(&self) -> &'static LocaleDescriptor {
        self.locale
    }

    pub fn context(&self) -> &'a BrowserContextConfig {
        self.context
    }

    pub fn is_rtl(&self) -> bool {
        self.locale.is_right_to_left()
    }

    pub fn test_user(&self) -> &TestUser {
        &self.user
    }

    pub fn page_object(&self, kind: PageKind) -> PageObject<'a> {
        build_page_object(kind, self.page, self.base_url)
    }

    pub fn home_page(&self) -> HomePage<'a> {
        HomePage::new(self.page, self.base_url)
    }

    pub fn login_page(&self) -> LoginPage<'a> {
        LoginPage::new(self.page, self.base_url)
    }

    pub fn products_page(&self) -> ProductsPage<'a> {
        ProductsPage::new(self.page, self.base_url)
    }

    pub fn cart_page(&self) -> CartPage<'a> {
        CartPage::new(self.page, self.base_url)
    }

    /// Home page, already navigated to
    pub async fn setup_home_page(&self) -> E2eResult<HomePage<'a>> {
        info!("Setup: navigating to home page");
        let home = self.home_page();
        home.navigate_to_home().await?;
        Ok(home)
    }
}
