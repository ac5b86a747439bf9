//! One scenario per locator strategy

use shopwright_e2e::{AriaRole, Fixtures, Locator, Outcome, Scenario};

use super::Run;

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("locators::text", by_text),
        Scenario::new("locators::role", by_role),
        Scenario::new("locators::placeholder", by_placeholder),
        Scenario::new("locators::css", by_css),
    ]
}

fn by_text<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let page = fx.page();
        page.goto(&format!("{}/", fx.base_url())).await?;
        page.click(&Locator::text("Products").first()).await?;
        page.expect_url(&format!("{}/products", fx.base_url())).await?;
        Ok(Outcome::Passed)
    })
}

fn by_role<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let page = fx.page();
        page.goto(&format!("{}/", fx.base_url())).await?;
        page.click(&Locator::role(AriaRole::Link, "Products")).await?;
        page.expect_url(&format!("{}/products", fx.base_url())).await?;
        Ok(Outcome::Passed)
    })
}

fn by_placeholder<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let page = fx.page();
        page.goto(&format!("{}/products", fx.base_url())).await?;
        page.fill(&Locator::placeholder("Search Product"), "Blue Top").await?;
        page.click(&Locator::css("#submit_search")).await?;
        Ok(Outcome::Passed)
    })
}

fn by_css<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let page = fx.page();
        page.goto(&format!("{}/", fx.base_url())).await?;
        page.click(&Locator::css("a[href='/login']")).await?;
        page.expect_url(&format!("{}/login", fx.base_url())).await?;
        Ok(Outcome::Passed)
    })
}
