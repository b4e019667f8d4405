use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parse a free-text amount the way the input fields are read.
///
/// Everything except ASCII digits and `.` is discarded, then the longest
/// leading run that forms a decimal number is taken. Anything that leaves
/// no digits behind reads as zero, so the result is never an error.
///
/// # Examples
///
/// ```
/// use bridging_calculator::core::money::parse_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(parse_amount("$1,250,000"), dec!(1250000));
/// assert_eq!(parse_amount("6.25%"), dec!(6.25));
/// assert_eq!(parse_amount("1.2.3"), dec!(1.2));
/// assert_eq!(parse_amount("n/a"), dec!(0));
/// ```
pub fn parse_amount(text: &str) -> Decimal {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in cleaned.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        } else {
            seen_digit = true;
        }
        end = i + 1;
    }

    if !seen_digit {
        return Decimal::ZERO;
    }

    let number = cleaned[..end].trim_end_matches('.');
    let number = if number.starts_with('.') {
        format!("0{}", number)
    } else {
        number.to_string()
    };

    Decimal::from_str(&number).unwrap_or_else(|e| {
        log::warn!("amount '{}' out of range ({}), reading as zero", text, e);
        Decimal::ZERO
    })
}

/// Live formatting of a currency field: regroup the whole dollars in
/// thousands and keep whatever follows the first `.` as typed. An input
/// without digits becomes empty.
///
/// Display only; the value always comes from [`parse_amount`] on the raw text.
///
/// ```
/// use bridging_calculator::core::money::group_digits;
///
/// assert_eq!(group_digits("1234567"), "1,234,567");
/// assert_eq!(group_digits("$12,34"), "1,234");
/// assert_eq!(group_digits("45000.50"), "45,000.50");
/// assert_eq!(group_digits("abc"), "");
/// ```
pub fn group_digits(text: &str) -> String {
    if !text.chars().any(|c| c.is_ascii_digit()) {
        return String::new();
    }
    let (whole, cents) = match text.split_once('.') {
        Some((whole, rest)) => (whole, Some(rest)),
        None => (text, None),
    };

    let digits: String = whole.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = digits.trim_start_matches('0');
    let grouped = if digits.is_empty() {
        "0".to_string()
    } else {
        insert_separators(digits)
    };

    match cents {
        Some(rest) => {
            let cents: String = rest.chars().filter(|c| c.is_ascii_digit()).collect();
            format!("{}.{}", grouped, cents)
        }
        None => grouped,
    }
}

/// Format as Australian dollars with cents: `$1,234,567.89`, `-$12.50`.
pub fn format_currency(amount: Decimal) -> String {
    let (negative, body) = two_places(amount);
    if negative {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Format without a currency symbol, as written back into editable fields.
pub fn format_plain(amount: Decimal) -> String {
    let (negative, body) = two_places(amount);
    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

/// Format a percentage to two places, e.g. `81.25%`.
pub fn format_percent(percent: Decimal) -> String {
    let rounded = percent.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}%", rounded)
}

fn two_places(amount: Decimal) -> (bool, String) {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    (negative, format!("{}.{}", insert_separators(int_part), frac_part))
}

fn insert_separators(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
