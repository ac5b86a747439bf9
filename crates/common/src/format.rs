//! Expected renderings of numbers, prices and dates for a locale

use chrono::{Datelike, NaiveDate};

use crate::locale::LocaleDescriptor;

impl LocaleDescriptor {
    /// Format `value` with `decimals` fraction digits using this locale's
    /// separators, e.g. `1.234.567,89` for de-DE
    pub fn format_number(&self, value: f64, decimals: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let fixed = format!("{:.*}", decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
        if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
            out.push('-');
        }

        let digits = int_part.len();
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (digits - i) % 3 == 0 {
                out.push(self.thousands_separator);
            }
            out.push(ch);
        }

        if let Some(frac) = frac_part {
            out.push(self.decimal_separator);
            out.push_str(frac);
        }
        out
    }

    /// Currency symbol followed by the formatted amount
    pub fn format_price(&self, value: f64, decimals: usize) -> String {
        format!("{}{}", self.currency_symbol, self.format_number(value, decimals))
    }

    /// Render `date` with this locale's `date_format` pattern
    pub fn format_date(&self, date: NaiveDate) -> String {
        self.date_format
            .replace("YYYY", &format!("{:04}", date.year()))
            .replace("MM", &format!("{:02}", date.month()))
            .replace("DD", &format!("{:02}", date.day()))
    }
}
