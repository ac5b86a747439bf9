//! Storefront scenarios, grouped by area

mod cart;
mod first;
mod fixtures;
mod home;
mod i18n;
mod locators;
mod login;

use futures::future::BoxFuture;
use shopwright_e2e::{E2eError, E2eResult, Outcome, Scenario};

/// Future every scenario body returns
pub type Run<'a> = BoxFuture<'a, E2eResult<Outcome>>;

/// Every scenario, in the order they run
pub fn all() -> Vec<Scenario> {
    let mut scenarios = Vec::new();
    scenarios.extend(first::scenarios());
    scenarios.extend(fixtures::scenarios());
    scenarios.extend(home::scenarios());
    scenarios.extend(login::scenarios());
    scenarios.extend(products::scenarios());
    scenarios.extend(cart::scenarios());
    scenarios.extend(locators::scenarios());
    scenarios.extend(i18n::scenarios());
    scenarios
}

/// Fail the scenario with `message` unless `condition` holds
pub fn ensure(condition: bool, message: impl Into<String>) -> E2eResult<()> {
    if condition {
        Ok(())
    } else {
        Err(E2eError::assertion(message))
    }
}
