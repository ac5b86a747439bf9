use shopwright_e2e::{Fixtures, Outcome, Scenario};

use super::{ensure, Run};

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("home::loads", loads).tagged(&["smoke"]),
        Scenario::new("home::navigation_links", navigation_links),
    ]
}

fn loads<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let home = fx.home_page();
        home.navigate_to_home().await?;

        ensure(home.is_home_page_loaded().await?, "home slider not visible")?;
        let title = home.page_title().await?;
        ensure(title.contains("Automation Exercise"), format!("unexpected title: {}", title))?;
        Ok(Outcome::Passed)
    })
}

fn navigation_links<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let home = fx.home_page();
        home.navigate_to_home().await?;

        let page = fx.page();
        ensure(page.is_visible(&home.products_link()).await?, "Products link not visible")?;
        ensure(page.is_visible(&home.login_link()).await?, "Login link not visible")?;
        Ok(Outcome::Passed)
    })
}
