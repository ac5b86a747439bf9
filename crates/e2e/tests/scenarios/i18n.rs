//! Behaviour across locales
//!
//! Scenarios built with [`Scenario::per_locale`] run once per listed locale,
//! each in a browser context created for that locale. The rest use the
//! session locale.

use chrono::Utc;
use tracing::info;

use shopwright_common::locale;
use shopwright_e2e::{Fixtures, Locator, Outcome, Scenario};

use super::{ensure, Run};

pub fn scenarios() -> Vec<Scenario> {
    let mut scenarios = Vec::new();
    scenarios.extend(Scenario::per_locale(
        "i18n::homepage",
        &["en-US", "fr-FR", "de-DE"],
        homepage_in_locale,
    ));
    scenarios.extend(Scenario::per_locale(
        "i18n::supported_locale",
        &locale::list_identifiers(),
        supported_locale,
    ));
    scenarios.push(Scenario::new("i18n::currency_display", currency_display));
    scenarios.extend(Scenario::per_locale(
        "i18n::date_format",
        &["en-US", "en-GB", "de-DE", "ja-JP"],
        date_format,
    ));
    scenarios.extend(Scenario::per_locale("i18n::rtl_layout", &["ar-SA"], rtl_layout));
    scenarios.push(Scenario::new("i18n::timezone", timezone));
    scenarios.extend(Scenario::per_locale(
        "i18n::character_encoding",
        &["zh-CN", "ja-JP", "ar-SA"],
        character_encoding,
    ));
    scenarios.push(Scenario::new("i18n::locale_switching", locale_switching));
    scenarios.iter_mut().for_each(|s| s.tags.push("i18n".to_string()));
    scenarios
}

fn homepage_in_locale<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        info!("Testing with locale: {}", fx.locale_config().name);

        let home = fx.home_page();
        home.navigate_to_home().await?;
        ensure(home.is_home_page_loaded().await?, "home slider not visible")?;
        Ok(Outcome::Passed)
    })
}

fn supported_locale<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let config = fx.locale_config();
        info!(
            "Locale: {} (timezone {}, currency {})",
            config.name, config.timezone, config.currency_symbol
        );

        let home = fx.home_page();
        home.navigate_to_home().await?;
        let title = home.page_title().await?;
        ensure(title.contains("Automation"), format!("unexpected title: {}", title))?;
        Ok(Outcome::Passed)
    })
}

fn currency_display<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let config = fx.locale_config();
        info!(
            "Currency {} ({}), decimal separator '{}', sample {}",
            config.currency,
            config.currency_symbol,
            config.decimal_separator,
            config.format_price(1234.5, 2)
        );

        let products = fx.products_page();
        products.navigate_to_products().await?;

        let prices = fx.page().count(&products.product_prices()).await?;
        ensure(prices > 0, "no prices on products page")?;

        // The storefront always prices in rupees, whatever the locale
        let first = products.first_price().await?;
        info!("First price found: {}", first);
        ensure(first.contains("Rs"), format!("price not in rupees: {}", first))?;
        Ok(Outcome::Passed)
    })
}

fn date_format<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let config = fx.locale_config();
        fx.home_page().navigate_to_home().await?;

        info!(
            "Expected format {}, today renders as {}",
            config.date_format,
            config.format_date(Utc::now().date_naive())
        );
        Ok(Outcome::Passed)
    })
}

fn rtl_layout<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        if !fx.is_rtl() {
            return Ok(Outcome::Skipped("Not an RTL locale".to_string()));
        }

        fx.home_page().navigate_to_home().await?;
        let dir = fx.page().get_attribute(&Locator::css("body"), "dir").await?;
        info!(
            "Body dir attribute: {} (locale expects {})",
            dir.as_deref().unwrap_or("<unset>"),
            fx.locale_config().direction.as_html_dir()
        );
        Ok(Outcome::Passed)
    })
}

fn timezone<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let expected = fx.locale_config().timezone;
        let browser_timezone = fx
            .page()
            .evaluate("Intl.DateTimeFormat().resolvedOptions().timeZone")
            .await?;

        info!("Browser timezone: {}, expected {}", browser_timezone, expected);
        ensure(
            browser_timezone.as_str() == Some(expected),
            format!("browser reports timezone {}", browser_timezone),
        )?;
        Ok(Outcome::Passed)
    })
}

fn character_encoding<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        fx.home_page().navigate_to_home().await?;

        let charset = fx.page().evaluate("document.characterSet").await?;
        let charset = charset.as_str().unwrap_or_default().to_uppercase();
        info!("Character set for {}: {}", fx.locale_config().name, charset);
        ensure(charset == "UTF-8", format!("unexpected character set {}", charset))?;
        Ok(Outcome::Passed)
    })
}

fn locale_switching<'a>(fx: &'a Fixtures<'a>) -> Run<'a> {
    Box::pin(async move {
        let home = fx.home_page();
        for id in ["en-US", "fr-FR", "de-DE"] {
            let config = locale::resolve(id);
            info!("Switching to: {}", config.name);
            home.navigate_to_home().await?;
        }
        Ok(Outcome::Passed)
    })
}
