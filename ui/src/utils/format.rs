use payloads::{RateTier, Rates};
use rust_decimal::Decimal;

pub fn money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

pub fn percent(rate: f64) -> String {
    format!("{rate:.1}%")
}

/// "from $12.00 / hour", or a notice when no rate is set.
pub fn starting_rate(rates: &Rates) -> String {
    match rates.starting_rate() {
        Some((tier, rate)) => format!("from {} / {}", money(rate), tier.label()),
        None => "No rates set".to_string(),
    }
}

/// Each configured tier as "$40.00 / day".
pub fn rate_lines(rates: &Rates) -> Vec<String> {
    RateTier::ALL
        .into_iter()
        .filter_map(|tier| {
            rates
                .get(tier)
                .map(|rate| format!("{} / {}", money(rate), tier.label()))
        })
        .collect()
}
