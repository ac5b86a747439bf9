//! Products page (`/products`)

use tracing::info;

use super::Navigator;
use crate::driver::PageDriver;
use crate::error::E2eResult;
use crate::locator::Locator;

pub(super) const PATH: &str = "/products";

pub struct ProductsPage<'a> {
    nav: Navigator<'a>,
}

impl<'a> ProductsPage<'a> {
    pub fn new(driver: &'a dyn PageDriver, base_url: &'a str) -> Self {
        Self { nav: Navigator::new(driver, base_url) }
    }

    pub fn navigator(&self) -> Navigator<'a> {
        self.nav
    }

    // Locators

    pub fn search_box(&self) -> Locator {
        Locator::placeholder("Search Product")
    }

    pub fn search_button(&self) -> Locator {
        Locator::css("#submit_search")
    }

    /// Every product card
    pub fn all_products(&self) -> Locator {
        Locator::css(".productinfo")
    }

    /// Price headings inside the product cards
    pub fn product_prices(&self) -> Locator {
        Locator::css(".productinfo h2")
    }

    pub fn product_by_name(&self, name: &str) -> Locator {
        Locator::text(name)
    }

    /// First add-to-cart link whose product id contains `product_number`
    pub fn add_to_cart_button(&self, product_number: u32) -> Locator {
        Locator::xpath(format!("(//a[contains(@data-product-id, '{}')])[1]", product_number))
    }

    /// "Continue Shopping" in the added-to-cart modal
    pub fn continue_shopping_button(&self) -> Locator {
        Locator::css("button.btn-success")
    }

    /// "View Cart" in the added-to-cart modal
    pub fn view_cart_button(&self) -> Locator {
        Locator::text("View Cart")
    }

    // Actions

    pub async fn navigate_to_products(&self) -> E2eResult<()> {
        self.nav.navigate(PATH).await
    }

    pub async fn search_product(&self, product_name: &str) -> E2eResult<()> {
        info!("Searching for: {}", product_name);
        let driver = self.nav.driver();
        driver.fill(&self.search_box(), product_name).await?;
        driver.click(&self.search_button()).await
    }

    /// Add product 1 and dismiss the modal, staying on this page
    pub async fn add_first_product_to_cart(&self) -> E2eResult<()> {
        info!("Adding first product to cart");
        let driver = self.nav.driver();
        driver.click(&self.add_to_cart_button(1)).await?;
        driver.click(&self.continue_shopping_button()).await
    }

    /// Add a product and follow the modal through to the cart
    pub async fn add_product_and_view_cart(&self, product_number: u32) -> E2eResult<()> {
        info!("Adding product {} and viewing cart", product_number);
        let driver = self.nav.driver();
        driver.click(&self.add_to_cart_button(product_number)).await?;
        driver.click(&self.view_cart_button()).await
    }

    // Verifications

    pub async fn verify_products_page_loaded(&self) -> E2eResult<()> {
        self.nav.verify_url(PATH).await?;
        self.nav.driver().expect_visible(&self.all_products().first()).await?;
        info!("Products page verified");
        Ok(())
    }

    pub async fn get_product_count(&self) -> E2eResult<usize> {
        let count = self.nav.driver().count(&self.all_products()).await?;
        info!("Products found: {}", count);
        Ok(count)
    }

    pub async fn is_product_visible(&self, name: &str) -> E2eResult<bool> {
        self.nav.driver().is_visible(&self.product_by_name(name)).await
    }

    /// Text of the first price on the page
    pub async fn first_price(&self) -> E2eResult<String> {
        self.nav.driver().inner_text(&self.product_prices().first()).await
    }
}
