use shopwright_e2e::{Fixtures, Outcome, Scenario};

use super::{ensure, Run};

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("login::navigate", navigate),
        Scenario::new("login::invalid_credentials", invalid_credentials).tagged(&["negative"]),
    ]
}

fn navigate<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let home = fx.home_page();
        let login = fx.login_page();

        home.navigate_to_home().await?;
        home.click_login().await?;
        login.verify_login_page_loaded().await?;
        Ok(Outcome::Passed)
    })
}

fn invalid_credentials<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let login = fx.login_page();
        login.navigate_to_login().await?;
        login.perform_login("wrong@email.com", "wrongpassword").await?;

        ensure(login.is_login_error_visible().await?, "login error message not shown")?;
        Ok(Outcome::Passed)
    })
}
