//! Currency input masking
//!
//! Stateless conversion between raw digit strings (as typed incrementally by
//! a user), cents, and locale-formatted display strings.
//!
//! Two parsing surfaces exist on purpose:
//!
//! - `format` / `unmask` are total. Malformed input degrades to the "no
//!   value" representation (empty string / 0.0) because raising on every
//!   keystroke is hostile in a live-typing field.
//! - `parse_money` is strict and returns `MaskError::InvalidAmount`, for
//!   contexts like batch import where silent zeroes would hide bad data.

pub mod style;

pub use style::CurrencyStyle;

use crate::error::{MaskError, MaskResult};
use crate::models::Money;

/// Converts between raw digit strings, cents, and display strings
///
/// # Examples
/// ```
/// use centavos::mask::CurrencyMask;
///
/// let mask = CurrencyMask::default(); // pt-BR / BRL
/// assert_eq!(mask.format("1000000"), "R$ 10.000,00");
/// assert_eq!(mask.unmask("R$ 1.234,56"), 1234.56);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurrencyMask {
    style: CurrencyStyle,
}

impl CurrencyMask {
    /// Create a mask with the given display style
    pub fn new(style: CurrencyStyle) -> Self {
        Self { style }
    }

    /// Get the display style
    pub fn style(&self) -> &CurrencyStyle {
        &self.style
    }

    /// Format a raw input string as a currency display string
    ///
    /// Every non-digit character is stripped and the remaining digit
    /// sequence is read as cents, so the last two digits typed are always
    /// the fractional part. An input with no digits returns an empty
    /// string: "no input yet" is distinct from a zero amount.
    ///
    /// Total for any input; extremely long digit sequences saturate at the
    /// largest representable amount instead of overflowing.
    pub fn format(&self, raw: &str) -> String {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return String::new();
        }
        self.format_money(Money::from_digit_str(&digits))
    }

    /// Format a cents amount as a currency display string
    ///
    /// Grouping separator every three major-unit digits, a two-digit minor
    /// part, and the style's symbol prefix.
    pub fn format_money(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let major = group_thousands(amount.major().unsigned_abs(), self.style.group_separator);
        format!(
            "{}{}{}{}{:02}",
            sign,
            self.style.prefix(),
            major,
            self.style.decimal_separator,
            amount.minor_part()
        )
    }

    /// Recover a numeric value from a display string
    ///
    /// Keeps digits and the style's decimal separator, converts the
    /// separator to a period, and parses as a float. Anything unparseable
    /// (including empty input) degrades to 0.0; this function never fails.
    pub fn unmask(&self, display: &str) -> f64 {
        if display.is_empty() {
            return 0.0;
        }
        let dec = self.style.decimal_separator;
        let cleaned: String = display
            .chars()
            .filter(|&c| c.is_ascii_digit() || c == dec)
            .map(|c| if c == dec { '.' } else { c })
            .collect();
        cleaned.parse().unwrap_or(0.0)
    }

    /// Strictly parse a display string into an exact cents amount
    ///
    /// Accepts an optional leading minus, an optional symbol prefix, and
    /// grouping separators; requires at most one decimal separator with a
    /// digits-only fractional part (padded or truncated to two digits).
    ///
    /// # Errors
    ///
    /// Returns `MaskError::InvalidAmount` for anything else, including
    /// amounts that do not fit in i64 cents.
    pub fn parse_money(&self, display: &str) -> MaskResult<Money> {
        let invalid = || MaskError::invalid_amount(display);

        let s = display.trim();
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, s),
        };
        let s = s
            .strip_prefix(self.style.symbol.as_str())
            .map(str::trim_start)
            .unwrap_or(s);

        let dec = self.style.decimal_separator;
        let (int_part, frac_part) = match s.split_once(dec) {
            Some((int, frac)) => (int, Some(frac)),
            None => (s, None),
        };

        let int_digits: String = int_part
            .chars()
            .filter(|&c| c != self.style.group_separator)
            .collect();
        if int_digits.is_empty() || !int_digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let major: i64 = int_digits.parse().map_err(|_| invalid())?;

        // Pad or truncate the fractional part to two digits
        let minor: i64 = match frac_part {
            None => 0,
            Some(frac) => {
                if !frac.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    0 => 0,
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => frac[..2].parse().map_err(|_| invalid())?,
                }
            }
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(invalid)?;

        Ok(Money::from_cents(if negative { -cents } else { cents }))
    }
}

/// Insert a separator every three digits, counting from the right
fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt_br() -> CurrencyMask {
        CurrencyMask::new(CurrencyStyle::pt_br())
    }

    fn en_us() -> CurrencyMask {
        CurrencyMask::new(CurrencyStyle::en_us())
    }

    #[test]
    fn test_format_empty_input() {
        assert_eq!(pt_br().format(""), "");
    }

    #[test]
    fn test_format_non_digit_input() {
        assert_eq!(pt_br().format("abc"), "");
        assert_eq!(pt_br().format("R$ ,."), "");
    }

    #[test]
    fn test_format_reads_digits_as_cents() {
        let mask = pt_br();
        assert_eq!(mask.format("5"), "R$ 0,05");
        assert_eq!(mask.format("500"), "R$ 5,00");
        assert_eq!(mask.format("1000000"), "R$ 10.000,00");
    }

    #[test]
    fn test_format_strips_formatting_artifacts() {
        // Re-feeding a formatted string produces the same display
        let mask = pt_br();
        assert_eq!(mask.format("R$ 10.000,00"), "R$ 10.000,00");
    }

    #[test]
    fn test_format_en_us_style() {
        let mask = en_us();
        assert_eq!(mask.format("123456"), "$1,234.56");
        assert_eq!(mask.format("99"), "$0.99");
    }

    #[test]
    fn test_format_total_for_huge_input() {
        // 300 digits: must neither panic nor overflow
        let raw = "9".repeat(300);
        let display = pt_br().format(&raw);
        assert!(display.starts_with("R$ "));
    }

    #[test]
    fn test_format_money_negative() {
        let mask = pt_br();
        assert_eq!(mask.format_money(Money::from_cents(-1050)), "-R$ 10,50");
    }

    #[test]
    fn test_unmask_empty_and_garbage() {
        let mask = pt_br();
        assert_eq!(mask.unmask(""), 0.0);
        assert_eq!(mask.unmask("garbage"), 0.0);
        assert_eq!(mask.unmask("1,2,3"), 0.0);
    }

    #[test]
    fn test_unmask_formatted_display() {
        let mask = pt_br();
        assert_eq!(mask.unmask("R$ 1.234,56"), 1234.56);
        assert_eq!(mask.unmask("R$ 5,00"), 5.0);
    }

    #[test]
    fn test_unmask_hand_typed_input() {
        let mask = pt_br();
        assert_eq!(mask.unmask("12,5"), 12.5);
        assert_eq!(mask.unmask("1234"), 1234.0);
    }

    #[test]
    fn test_unmask_en_us_style() {
        let mask = en_us();
        assert_eq!(mask.unmask("$1,234.56"), 1234.56);
    }

    #[test]
    fn test_round_trip_recovers_cents() {
        let mask = pt_br();
        for raw in ["1", "42", "500", "99999", "1000000"] {
            let cents: i64 = raw.parse().unwrap();
            let display = mask.format(raw);
            assert_eq!(mask.unmask(&display), cents as f64 / 100.0, "raw={raw}");
            assert_eq!(
                mask.parse_money(&display).unwrap().cents(),
                cents,
                "raw={raw}"
            );
        }
    }

    #[test]
    fn test_parse_money_accepts_common_forms() {
        let mask = pt_br();
        assert_eq!(mask.parse_money("1.234,56").unwrap().cents(), 123456);
        assert_eq!(mask.parse_money("R$ 5,00").unwrap().cents(), 500);
        assert_eq!(mask.parse_money("1234").unwrap().cents(), 123400);
        assert_eq!(mask.parse_money("12,5").unwrap().cents(), 1250);
        assert_eq!(mask.parse_money("-10,50").unwrap().cents(), -1050);
        assert_eq!(mask.parse_money("0,999").unwrap().cents(), 99);
    }

    #[test]
    fn test_parse_money_rejects_garbage() {
        let mask = pt_br();
        assert!(mask.parse_money("garbage").unwrap_err().is_invalid_amount());
        assert!(mask.parse_money("").is_err());
        assert!(mask.parse_money("1,2,3").is_err());
        assert!(mask.parse_money(",50").is_err());
        assert!(mask.parse_money("12,5a").is_err());
    }

    #[test]
    fn test_parse_money_rejects_overflow() {
        let mask = pt_br();
        assert!(mask.parse_money("99999999999999999999").is_err());
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, '.'), "0");
        assert_eq!(group_thousands(999, '.'), "999");
        assert_eq!(group_thousands(1000, '.'), "1.000");
        assert_eq!(group_thousands(1234567, ','), "1,234,567");
    }
}
