//! Currency preference context: a selected currency code persisted across
//! sessions, plus formatting and the static offline rate table.
//!
//! `format_currency` only changes the displayed symbol and format — it never
//! converts the numeric value. Balances come from the backend in one
//! reference currency regardless of the selection.

use api::storage;
use dioxus::prelude::*;

pub const DEFAULT_CURRENCY: &str = "EUR";

/// A currency the navbar selector offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyOption {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

pub const SUPPORTED_CURRENCIES: &[CurrencyOption] = &[
    CurrencyOption { code: "EUR", name: "Euro", symbol: "€" },
    CurrencyOption { code: "USD", name: "US Dollar", symbol: "$" },
    CurrencyOption { code: "GBP", name: "Pound Sterling", symbol: "£" },
    CurrencyOption { code: "CHF", name: "Swiss Franc", symbol: "CHF" },
    CurrencyOption { code: "MAD", name: "Moroccan Dirham", symbol: "DH" },
    CurrencyOption { code: "JPY", name: "Japanese Yen", symbol: "¥" },
    CurrencyOption { code: "CAD", name: "Canadian Dollar", symbol: "C$" },
    CurrencyOption { code: "AUD", name: "Australian Dollar", symbol: "A$" },
];

#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyState {
    code: String,
}

impl CurrencyState {
    /// Restore the persisted selection, defaulting to EUR.
    pub fn load() -> Self {
        let code = storage::get_item(storage::CURRENCY_KEY)
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        Self { code }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn format(&self, amount: f64) -> String {
        format_currency(amount, &self.code)
    }
}

pub fn use_currency() -> Signal<CurrencyState> {
    use_context::<Signal<CurrencyState>>()
}

/// Change the selected currency. Persisted synchronously before the signal
/// write triggers the next render.
pub fn set_currency(mut currency: Signal<CurrencyState>, code: &str) {
    storage::set_item(storage::CURRENCY_KEY, code);
    currency.set(CurrencyState {
        code: code.to_string(),
    });
}

#[component]
pub fn CurrencyProvider(children: Element) -> Element {
    let currency = use_signal(CurrencyState::load);
    use_context_provider(|| currency);

    rsx! {
        {children}
    }
}

pub fn currency_symbol(code: &str) -> &str {
    match code {
        "EUR" => "€",
        "USD" => "$",
        "GBP" => "£",
        "CHF" => "CHF",
        "JPY" => "¥",
        "CAD" => "C$",
        "AUD" => "A$",
        "MAD" => "DH",
        other => other,
    }
}

/// Render an amount in French-locale monetary style: narrow no-break-space
/// digit grouping, comma decimals, symbol suffix. JPY has no minor unit.
/// Ties round away from zero, so 1234.5 yen renders as 1 235.
pub fn format_currency(amount: f64, code: &str) -> String {
    let decimals = if code == "JPY" { 0 } else { 2 };
    let negative = amount.is_sign_negative() && amount != 0.0;
    let scale = 10f64.powi(decimals as i32);
    let rounded = (amount.abs() * scale).round() / scale;
    let fixed = format!("{:.*}", decimals, rounded);
    let (whole, frac) = match fixed.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    let digits = whole.len();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push('\u{202f}');
        }
        out.push(ch);
    }
    if let Some(frac) = frac {
        out.push(',');
        out.push_str(frac);
    }
    out.push('\u{a0}');
    out.push_str(currency_symbol(code));
    out
}

/// Static offline rates for the demo. Unlisted pairs fall back to 1 (no
/// conversion). Exposed for completeness; no view converts amounts with it.
pub fn exchange_rate(from: &str, to: &str) -> f64 {
    if from == to {
        return 1.0;
    }
    match (from, to) {
        ("EUR", "USD") => 1.07,
        ("EUR", "GBP") => 0.85,
        ("EUR", "CHF") => 0.96,
        ("EUR", "MAD") => 10.80,
        ("USD", "EUR") => 0.93,
        ("USD", "GBP") => 0.79,
        ("USD", "CHF") => 0.89,
        ("USD", "MAD") => 10.10,
        ("GBP", "EUR") => 1.18,
        ("GBP", "USD") => 1.26,
        ("GBP", "CHF") => 1.13,
        ("GBP", "MAD") => 12.70,
        ("MAD", "EUR") => 0.093,
        ("MAD", "USD") => 0.099,
        ("MAD", "GBP") => 0.079,
        ("MAD", "CHF") => 0.088,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_groups_and_uses_comma_decimals() {
        assert_eq!(format_currency(1234.5, "EUR"), "1\u{202f}234,50\u{a0}€");
        assert_eq!(format_currency(0.0, "USD"), "0,00\u{a0}$");
        assert_eq!(
            format_currency(1_000_000.0, "GBP"),
            "1\u{202f}000\u{202f}000,00\u{a0}£"
        );
    }

    #[test]
    fn test_format_negative_amounts() {
        assert_eq!(format_currency(-42.1, "EUR"), "-42,10\u{a0}€");
    }

    #[test]
    fn test_jpy_has_no_minor_unit() {
        assert_eq!(format_currency(1234.5, "JPY"), "1\u{202f}235\u{a0}¥");
        assert_eq!(format_currency(1234.4, "JPY"), "1\u{202f}234\u{a0}¥");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        // 0.125 is exact in binary; bankers' rounding would give 0,12.
        assert_eq!(format_currency(0.125, "EUR"), "0,13\u{a0}€");
        assert_eq!(format_currency(-0.125, "EUR"), "-0,13\u{a0}€");
    }

    #[test]
    fn test_formatting_never_converts_the_value() {
        // Switching currency relabels the same number; only the symbol moves.
        let eur = format_currency(100.0, "EUR");
        let usd = format_currency(100.0, "USD");
        assert!(eur.starts_with("100,00"));
        assert!(usd.starts_with("100,00"));
        assert_ne!(eur, usd);
    }

    #[test]
    fn test_symbol_table() {
        assert_eq!(currency_symbol("EUR"), "€");
        assert_eq!(currency_symbol("MAD"), "DH");
        assert_eq!(currency_symbol("XXX"), "XXX");
    }

    #[test]
    fn test_exchange_rate_table() {
        assert_eq!(exchange_rate("EUR", "USD"), 1.07);
        assert_eq!(exchange_rate("MAD", "CHF"), 0.088);
        assert_eq!(exchange_rate("EUR", "EUR"), 1.0);
        assert_eq!(exchange_rate("JPY", "EUR"), 1.0);
    }

    #[test]
    fn test_persisted_selection_wins_over_default() {
        storage::set_item(storage::CURRENCY_KEY, "USD");
        assert_eq!(CurrencyState::load().code(), "USD");
        storage::set_item(storage::CURRENCY_KEY, "EUR");
        assert_eq!(CurrencyState::load().code(), "EUR");
        storage::remove_item(storage::CURRENCY_KEY);
        assert_eq!(CurrencyState::load().code(), DEFAULT_CURRENCY);
    }
}
