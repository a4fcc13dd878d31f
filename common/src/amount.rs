//! [`Amount`]-related definitions.

use std::{fmt, ops, str::FromStr as _, sync::LazyLock};

use regex::Regex;
use rust_decimal::Decimal;

/// Characters dropped by [`Amount::parse()`] before parsing.
static NON_NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^0-9.\-]").unwrap_or_else(|e| panic!("invalid regex: {e}"))
});

/// Numeric value read from a form field.
///
/// Arithmetic on [`Amount`]s never fails: a malformed operand or an
/// overflowed result turns into [`Amount::NaN`], which then propagates
/// through every following operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Amount {
    /// Finite decimal number.
    Number(Decimal),

    /// Not a number.
    NaN,
}

impl Amount {
    /// Zero [`Amount`].
    pub const ZERO: Self = Self::Number(Decimal::ZERO);

    /// Parses the provided field text into an [`Amount`].
    ///
    /// Every character other than an ASCII digit, `.` or `-` is dropped
    /// first, so currency symbols and grouping separators are ignored. Text
    /// left empty after that parses as zero, while text which still isn't a
    /// valid decimal (e.g. `1.2.3` or a lone `-`) parses as
    /// [`Amount::NaN`].
    ///
    /// Magnitudes beyond [`Decimal::MAX`] parse as [`Amount::NaN`] too.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let cleaned = NON_NUMERIC.replace_all(text, "");
        if cleaned.is_empty() {
            return Self::ZERO;
        }
        Decimal::from_str(&cleaned).map_or(Self::NaN, Self::Number)
    }

    /// Indicates whether this [`Amount`] is [`Amount::NaN`].
    #[must_use]
    pub const fn is_nan(self) -> bool {
        matches!(self, Self::NaN)
    }

    /// Indicates whether this [`Amount`] is a zero number.
    #[must_use]
    pub fn is_zero(self) -> bool {
        matches!(self, Self::Number(n) if n.is_zero())
    }

    /// Returns the number of this [`Amount`], if it's not [`Amount::NaN`].
    #[must_use]
    pub const fn number(self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(n),
            Self::NaN => None,
        }
    }

    /// Returns the number of this [`Amount`], treating [`Amount::NaN`] as
    /// zero.
    #[must_use]
    pub fn or_zero(self) -> Decimal {
        self.number().unwrap_or(Decimal::ZERO)
    }

    /// Indicates whether this [`Amount`] is strictly greater than the
    /// `other` one.
    ///
    /// Any comparison involving [`Amount::NaN`] is `false`.
    #[must_use]
    pub fn exceeds(self, other: Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a > b,
            (Self::NaN, _) | (_, Self::NaN) => false,
        }
    }

    /// Combines two [`Amount`]s with the provided checked operation.
    fn zip(
        self,
        rhs: Self,
        op: impl FnOnce(Decimal, Decimal) -> Option<Decimal>,
    ) -> Self {
        match (self, rhs) {
            (Self::Number(a), Self::Number(b)) => {
                op(a, b).map_or(Self::NaN, Self::Number)
            }
            (Self::NaN, _) | (_, Self::NaN) => Self::NaN,
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Decimal> for Amount {
    fn from(n: Decimal) -> Self {
        Self::Number(n)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n.normalize()),
            Self::NaN => f.write_str("NaN"),
        }
    }
}

impl ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip(rhs, Decimal::checked_add)
    }
}

impl ops::Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip(rhs, Decimal::checked_sub)
    }
}

impl ops::Mul for Amount {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.zip(rhs, Decimal::checked_mul)
    }
}

impl ops::Mul<Decimal> for Amount {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        self * Self::Number(rhs)
    }
}
