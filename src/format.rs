//! Thousands-separated rendering for report and trace output.
use crate::CURRENCY;
use crate::Money;
use crate::Utility;

/// `1234567` -> `"1,234,567"`.
pub fn money(amount: Money) -> String {
    group(&amount.to_string())
}

/// `22222.5` -> `"22,222.50"`. Non-finite values render as-is.
pub fn decimal(value: Utility) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((&fixed, "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, group(whole), fraction)
}

/// Whole amount with the currency suffix, `"1,000 TL"`.
pub fn price(amount: Money) -> String {
    format!("{}{}", money(amount), CURRENCY)
}

/// Two-decimal amount with the currency suffix, `"22,222.00 TL"`.
pub fn price_decimal(value: Utility) -> String {
    format!("{}{}", decimal(value), CURRENCY)
}

fn group(digits: &str) -> String {
    let n = digits.len();
    digits
        .chars()
        .enumerate()
        .fold(String::with_capacity(n + n / 3), |mut s, (i, c)| {
            if i > 0 && (n - i) % 3 == 0 {
                s.push(',');
            }
            s.push(c);
            s
        })
}
