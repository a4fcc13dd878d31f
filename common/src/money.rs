//! [`Money`]-related definitions.
//!
//! Amounts are rendered the way the `en-IN` locale renders Indian Rupees:
//! the last three integer digits form a group and every group before them
//! has two digits (`12,34,56,789`).

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::Amount;

/// Symbol of the Indian Rupee.
pub const RUPEE: &str = "₹";

/// Amount of money in Indian Rupees.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Money(pub Decimal);

impl From<Amount> for Money {
    /// Converts the provided [`Amount`] into [`Money`], treating
    /// [`Amount::NaN`] as zero.
    fn from(amount: Amount) -> Self {
        Self(amount.or_zero())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Digits {
            negative,
            integer,
            fraction,
        } = Digits::of(self.0);

        let sign = if negative { "-" } else { "" };
        write!(f, "{sign}{RUPEE}{}.{fraction}", group(&integer))
    }
}

/// Formats the provided [`Amount`] as Indian Rupees with exactly two
/// fraction digits (`₹74,25,000.00`).
///
/// [`Amount::NaN`] is formatted as zero.
#[must_use]
pub fn format_currency(amount: Amount) -> String {
    Money::from(amount).to_string()
}

/// Formats the provided [`Amount`] as a plain grouped number with at most
/// two fraction digits (`1,350`, `1,363.5`).
///
/// [`Amount::NaN`] is formatted as zero.
#[must_use]
pub fn format_number(amount: Amount) -> String {
    let Digits {
        negative,
        integer,
        fraction,
    } = Digits::of(amount.or_zero());

    let sign = if negative { "-" } else { "" };
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{sign}{}", group(&integer))
    } else {
        format!("{sign}{}.{fraction}", group(&integer))
    }
}

/// Decimal digits of a number rounded to two fraction digits.
struct Digits {
    /// Indicator whether the rounded number is below zero.
    negative: bool,

    /// Integer digits, without separators.
    integer: String,

    /// Exactly two fraction digits.
    fraction: String,
}

impl Digits {
    /// Splits the provided number into [`Digits`].
    fn of(n: Decimal) -> Self {
        let rounded = n
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        let text = format!("{:.2}", rounded.abs());
        let (integer, fraction) =
            text.split_once('.').unwrap_or((text.as_str(), "00"));

        Self {
            negative,
            integer: integer.to_owned(),
            fraction: fraction.to_owned(),
        }
    }
}

/// Inserts Indian digit-group separators into the provided integer digits.
fn group(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let lead = if head.len() % 2 == 1 { 1 } else { 2 };

    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    out.push_str(&head[..lead]);
    for pair in head.as_bytes()[lead..].chunks(2) {
        out.push(',');
        out.extend(pair.iter().map(|b| char::from(*b)));
    }
    out.push(',');
    out.push_str(tail);
    out
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use crate::Amount;

    use super::{format_currency, format_number, group, Money};

    fn amount(s: &str) -> Amount {
        Amount::Number(s.parse().unwrap())
    }

    #[test]
    fn groups_digits_the_indian_way() {
        assert_eq!(group("0"), "0");
        assert_eq!(group("999"), "999");
        assert_eq!(group("1350"), "1,350");
        assert_eq!(group("74250"), "74,250");
        assert_eq!(group("7425000"), "74,25,000");
        assert_eq!(group("123456789"), "12,34,56,789");
        assert_eq!(group("1234567890"), "1,23,45,67,890");
    }

    #[test]
    fn formats_currency() {
        assert_eq!(format_currency(amount("7425000")), "₹74,25,000.00");
        assert_eq!(format_currency(amount("6425000")), "₹64,25,000.00");
        assert_eq!(format_currency(amount("1485000")), "₹14,85,000.00");
        assert_eq!(format_currency(amount("-4940000")), "-₹49,40,000.00");
        assert_eq!(format_currency(amount("5000.5")), "₹5,000.50");
        assert_eq!(format_currency(amount("12")), "₹12.00");
    }

    #[test]
    fn rounds_currency_half_away_from_zero() {
        assert_eq!(format_currency(amount("0.125")), "₹0.13");
        assert_eq!(format_currency(amount("-0.125")), "-₹0.13");
        assert_eq!(format_currency(amount("999.999")), "₹1,000.00");
        assert_eq!(format_currency(amount("-0.001")), "₹0.00");
    }

    #[test]
    fn formats_nan_as_zero() {
        assert_eq!(format_currency(Amount::NaN), "₹0.00");
        assert_eq!(format_number(Amount::NaN), "0");
        assert_eq!(Money::from(Amount::NaN), Money(Decimal::ZERO));
    }

    #[test]
    fn formats_numbers() {
        assert_eq!(format_number(amount("1350")), "1,350");
        assert_eq!(format_number(amount("1363.5")), "1,363.5");
        assert_eq!(format_number(amount("1363.456")), "1,363.46");
        assert_eq!(format_number(amount("13500000")), "1,35,00,000");
        assert_eq!(format_number(amount("-675")), "-675");
        assert_eq!(format_number(Amount::ZERO), "0");
    }

    #[test]
    fn currency_formatting_is_idempotent() {
        for s in [
            "0",
            "0.5",
            "12.34",
            "1350",
            "7425000",
            "98765432.10",
            "-4940000",
            "-0.75",
        ] {
            let once = format_currency(amount(s));
            let twice = format_currency(Amount::parse(&once));
            assert_eq!(once, twice, "for `{s}`");
        }
    }
}
