use shopwright_e2e::{Fixtures, Outcome, Scenario};

use super::{ensure, Run};

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("cart::add_and_verify", add_and_verify).tagged(&["cart"]),
        Scenario::new("cart::remove", remove).tagged(&["cart"]),
    ]
}

fn add_and_verify<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let products = fx.products_page();
        let cart = fx.cart_page();

        products.navigate_to_products().await?;
        products.add_product_and_view_cart(1).await?;

        cart.verify_cart_page_loaded().await?;
        ensure(cart.get_cart_item_count().await? > 0, "cart has no items")?;
        Ok(Outcome::Passed)
    })
}

fn remove<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let products = fx.products_page();
        let cart = fx.cart_page();

        products.navigate_to_products().await?;
        products.add_product_and_view_cart(1).await?;
        cart.remove_product("1").await?;

        // Removal updates the table asynchronously
        fx.page().wait_for_timeout(1000).await?;

        let remaining = cart.get_cart_item_count().await?;
        ensure(remaining == 0, format!("{} item(s) left in cart", remaining))?;
        Ok(Outcome::Passed)
    })
}
