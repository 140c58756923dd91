//! Formatting utilities used for console panels and messages.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Thousands-separated integer rendering of a float: `8640.0` → `"8,640"`.
/// Values are rounded to the nearest whole unit first.
pub fn thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    // abs() overflows on i64::MIN, which the saturating cast can produce
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}")
}

/// Two-decimal rendering, used for resistance readings.
pub fn two_decimals(value: f64) -> String {
    format!("{value:.2}")
}
