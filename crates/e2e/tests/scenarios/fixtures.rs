use tracing::info;

use shopwright_e2e::{Fixtures, Outcome, PageKind, Scenario};

use super::{ensure, Run};

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("fixtures::base_url", base_url),
        Scenario::new("fixtures::test_user", test_user),
        Scenario::new("fixtures::page_object", page_object),
        Scenario::new("fixtures::setup_home_page", setup_home_page),
        Scenario::new("fixtures::combined", combined),
    ]
}

fn base_url<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        fx.page().goto(fx.base_url()).await?;
        let title = fx.page().title().await?;
        ensure(title.contains("Automation Exercise"), format!("unexpected title: {}", title))?;
        Ok(Outcome::Passed)
    })
}

fn test_user<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let user = fx.test_user();
        info!("Test user: {} <{}>", user.name, user.email);
        ensure(user.email.contains('@'), format!("not an email address: {}", user.email))?;
        Ok(Outcome::Passed)
    })
}

fn page_object<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let home = fx.page_object(PageKind::Home);
        home.navigate().await?;
        ensure(fx.home_page().is_home_page_loaded().await?, "home page did not load")?;
        Ok(Outcome::Passed)
    })
}

fn setup_home_page<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let home = fx.setup_home_page().await?;
        home.click_products().await?;

        let url = home.current_url().await?;
        ensure(url.contains("products"), format!("still at {}", url))?;
        Ok(Outcome::Passed)
    })
}

fn combined<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let user = fx.test_user();
        let login = fx.login_page();
        login.navigate_to_login().await?;
        login.perform_login(&user.email, &user.password).await?;
        info!("Submitted login for {} on {}", user.email, fx.base_url());
        Ok(Outcome::Passed)
    })
}
