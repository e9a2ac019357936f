//! Fixed `nl-NL` display formatting for money and dates.
//!
//! # Invariants
//! - Currency: `€`, a no-break space, `.` thousands grouping, `,` decimal
//!   mark and exactly two decimals (`€ 1.234,50`).
//! - Dates: `D-M-YYYY` without zero padding (`5-3-2024`).
//! - Unparseable dates render as `Invalid Date`.

use chrono::{DateTime, Datelike, NaiveDate};
use num_format::Locale;

const CURRENCY_SYMBOL: &str = "€";
const NO_BREAK_SPACE: char = '\u{a0}';
const DISPLAY_LOCALE: Locale = Locale::nl;
pub const INVALID_DATE: &str = "Invalid Date";

/// Formats an amount as Dutch euro currency.
///
/// Cents are rounded half away from zero on the shortest decimal form of
/// `amount`, so `1.005` shows as `€ 1,01`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{CURRENCY_SYMBOL}{NO_BREAK_SPACE}NaN");
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{CURRENCY_SYMBOL}{NO_BREAK_SPACE}{sign}∞");
    }

    let (whole, cents) = round_to_cents(&format!("{}", amount.abs()));
    format!(
        "{CURRENCY_SYMBOL}{NO_BREAK_SPACE}{sign}{}{}{cents}",
        group_thousands(&whole, DISPLAY_LOCALE.separator()),
        DISPLAY_LOCALE.decimal()
    )
}

/// Rounds a plain non-negative decimal string to two fraction digits.
///
/// Returns `(whole digits, two cent digits)`.
fn round_to_cents(plain: &str) -> (String, String) {
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain, ""));
    let mut digits = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|digit| digit - b'0')
        .collect::<Vec<u8>>();

    let round_up = fraction.as_bytes().get(2).is_some_and(|digit| *digit >= b'5');
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - 2;
    let render = |part: &[u8]| {
        part.iter()
            .map(|digit| char::from(b'0' + digit))
            .collect::<String>()
    };
    (render(&digits[..split]), render(&digits[split..]))
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Formats an ISO-8601 date (or RFC 3339 timestamp) as `D-M-YYYY`.
pub fn format_date(iso: &str) -> String {
    match parse_iso_date(iso.trim()) {
        Some(date) => format!("{}-{}-{}", date.day(), date.month(), date.year()),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

/// Formats a plain number the way it is shown in raw table cells.
pub(crate) fn format_plain_number(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::{format_currency, format_date, format_plain_number, INVALID_DATE};

    #[test]
    fn currency_uses_dutch_grouping_and_decimal_comma() {
        assert_eq!(format_currency(1234.5), "€\u{a0}1.234,50");
        assert_eq!(format_currency(0.0), "€\u{a0}0,00");
        assert_eq!(format_currency(37.5), "€\u{a0}37,50");
        assert_eq!(format_currency(1_000_000.0), "€\u{a0}1.000.000,00");
    }

    #[test]
    fn currency_rounds_to_cents_and_keeps_sign() {
        assert_eq!(format_currency(0.999), "€\u{a0}1,00");
        assert_eq!(format_currency(-5.0), "€\u{a0}-5,00");
        assert_eq!(format_currency(f64::NAN), "€\u{a0}NaN");
    }

    #[test]
    fn currency_rounds_the_decimal_form_not_the_binary_value() {
        assert_eq!(format_currency(1.005), "€\u{a0}1,01");
        assert_eq!(format_currency(0.145), "€\u{a0}0,15");
        assert_eq!(format_currency(-2.675), "€\u{a0}-2,68");
        assert_eq!(format_currency(0.144), "€\u{a0}0,14");
        assert_eq!(format_currency(999.995), "€\u{a0}1.000,00");
        assert_eq!(format_currency(99.999), "€\u{a0}100,00");
    }

    #[test]
    fn currency_never_truncates_large_amounts() {
        assert_eq!(
            format_currency(1e20),
            "€\u{a0}100.000.000.000.000.000.000,00"
        );
        assert_eq!(format_currency(123_456.0), "€\u{a0}123.456,00");
    }

    #[test]
    fn date_drops_zero_padding() {
        assert_eq!(format_date("2024-03-05"), "5-3-2024");
        assert_eq!(format_date("2023-12-31"), "31-12-2023");
        assert_eq!(format_date("2024-03-05T10:15:00Z"), "5-3-2024");
    }

    #[test]
    fn invalid_dates_render_placeholder() {
        assert_eq!(format_date(""), INVALID_DATE);
        assert_eq!(format_date("gisteren"), INVALID_DATE);
    }

    #[test]
    fn plain_numbers_drop_trailing_zeroes() {
        assert_eq!(format_plain_number(3.0), "3");
        assert_eq!(format_plain_number(12.5), "12.5");
    }
}
