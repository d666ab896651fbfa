//! Coin amounts: parsing user-typed prices and the two display forms used in
//! the report.

/// Parse a coin price typed by a user, e.g. `"6,500,000"`.
///
/// Surrounding whitespace and thousands separators are ignored. Returns `None`
/// when what remains is not an integer.
pub fn parse_price(text: &str) -> Option<i64> {
    let digits: String = text.trim().chars().filter(|c| *c != ',').collect();
    digits.parse().ok()
}

/// Abbreviate a coin amount by magnitude: `1.3B`, `2.5M`, `1.0K`, or the plain
/// integer below one thousand. Always one decimal when abbreviating.
pub fn format_coins(coins: i64) -> String {
    if coins >= 1_000_000_000 {
        format!("{:.1}B", coins as f64 / 1_000_000_000.0)
    } else if coins >= 1_000_000 {
        format!("{:.1}M", coins as f64 / 1_000_000.0)
    } else if coins >= 1_000 {
        format!("{:.1}K", coins as f64 / 1_000.0)
    } else {
        coins.to_string()
    }
}

/// Group digits in threes with commas: `1234567` -> `"1,234,567"`.
pub fn format_number(num: i64) -> String {
    let digits = num.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if num < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
