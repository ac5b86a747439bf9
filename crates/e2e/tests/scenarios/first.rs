use shopwright_e2e::{Fixtures, Outcome, Scenario};

use super::{ensure, Run};

pub fn scenarios() -> Vec<Scenario> {
    vec![Scenario::new("open_website", open_website).tagged(&["smoke"])]
}

fn open_website<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let page = fx.page();
        page.goto(&format!("{}/", fx.base_url())).await?;

        let title = page.title().await?;
        ensure(title.contains("Automation Exercise"), format!("unexpected title: {}", title))?;
        Ok(Outcome::Passed)
    })
}
