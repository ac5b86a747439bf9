//! Cart page (`/view_cart`)

use tracing::info;

use super::Navigator;
use crate::driver::PageDriver;
use crate::error::E2eResult;
use crate::locator::Locator;

pub(super) const PATH: &str = "/view_cart";

pub struct CartPage<'a> {
    nav: Navigator<'a>,
}

impl<'a> CartPage<'a> {
    pub fn new(driver: &'a dyn PageDriver, base_url: &'a str) -> Self {
        Self { nav: Navigator::new(driver, base_url) }
    }

    pub fn navigator(&self) -> Navigator<'a> {
        self.nav
    }

    /// One row per cart line
    pub fn cart_items(&self) -> Locator {
        Locator::css("#cart_info tbody tr")
    }

    pub fn empty_cart_message(&self) -> Locator {
        Locator::text("Cart is empty")
    }

    pub fn delete_button(&self, product_id: &str) -> Locator {
        Locator::xpath(format!("//a[@data-product-id='{}']", product_id))
    }

    pub fn proceed_to_checkout_button(&self) -> Locator {
        Locator::text("Proceed To Checkout")
    }

    pub async fn navigate_to_cart(&self) -> E2eResult<()> {
        self.nav.navigate(PATH).await
    }

    pub async fn remove_product(&self, product_id: &str) -> E2eResult<()> {
        info!("Removing product: {}", product_id);
        self.nav.driver().click(&self.delete_button(product_id)).await
    }

    pub async fn proceed_to_checkout(&self) -> E2eResult<()> {
        info!("Proceeding to checkout");
        self.nav.driver().click(&self.proceed_to_checkout_button()).await
    }

    pub async fn verify_cart_page_loaded(&self) -> E2eResult<()> {
        self.nav.verify_url(PATH).await?;
        info!("Cart page verified");
        Ok(())
    }

    pub async fn get_cart_item_count(&self) -> E2eResult<usize> {
        let count = self.nav.driver().count(&self.cart_items()).await?;
        info!("Cart items: {}", count);
        Ok(count)
    }

    pub async fn is_cart_empty(&self) -> E2eResult<bool> {
        let empty = self.nav.driver().is_visible(&self.empty_cart_message()).await?;
        info!("Cart empty: {}", empty);
        Ok(empty)
    }
}
