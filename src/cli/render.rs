use crate::core::{Conversion, CurrencyCode, ExchangeError};
use chrono::{Local, TimeZone};

const SIGNIFICANT_DIGITS: usize = 6;
// Shortest form switches to an exponent from this decimal exponent upwards
const SHORTEST_EXPONENT_LIMIT: i32 = 16;

impl Conversion {
    pub fn display_line(&self) -> Result<String, ExchangeError> {
        render(self.updated_at, self.rate, &self.from, &self.to, self.amount)
    }
}

/// Formats a conversion as
/// `[At: <local time>]: [Rate: <rate>]: <amount> <from> = <converted> <to>`.
pub fn render(
    timestamp: i64,
    rate: f64,
    from: &CurrencyCode,
    to: &CurrencyCode,
    amount: f64,
) -> Result<String, ExchangeError> {
    let at = Local
        .timestamp_opt(timestamp, 0)
        .single()
        .ok_or_else(|| ExchangeError::Unknown(format!("Invalid update timestamp: {timestamp}")))?;

    Ok(format!(
        "[At: {}]: [Rate: {}]: {} {from} = {} {to}",
        at.format("%Y-%m-%d %H:%M:%S"),
        format_shortest(rate),
        format_shortest(amount),
        format_significant(amount * rate, SIGNIFICANT_DIGITS)
    ))
}

/// Shortest round-trip digits of `value`, with an exponent when the decimal
/// exponent is below -4 or at least 16 (`1e-07`, `1e+21`).
pub fn format_shortest(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SHORTEST_EXPONENT_LIMIT {
        with_exponent(mantissa, exponent)
    } else {
        format!("{value}")
    }
}

/// Formats `value` with `digits` significant digits in the style of C's `%g`:
/// trailing zeros are dropped and very large or small magnitudes use an exponent.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let digits = digits.max(1);

    // Scientific form first so the exponent reflects rounding (999999.9 -> 1.00000e6)
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        with_exponent(mantissa, exponent)
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn with_exponent(mantissa: &str, exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!(
        "{}e{sign}{:02}",
        trim_fraction(mantissa),
        exponent.unsigned_abs()
    )
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
