//! [`Percent`]-related definitions.

use derive_more::Display;
use rust_decimal::Decimal;

use crate::Amount;

/// Floating-point percentage.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("{_0}%")]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] from the provided whole number, saturating
    /// at `100`.
    #[expect(clippy::cast_lossless, reason = "`From` is not `const`")]
    #[must_use]
    pub const fn whole(val: u8) -> Self {
        let val = if val > 100 { 100 } else { val };
        Self(Decimal::from_parts(val as u32, 0, 0, false, 0))
    }

    /// Returns this [`Percent`] of the provided [`Amount`].
    #[must_use]
    pub fn of(self, amount: Amount) -> Amount {
        amount * (self.0 / Decimal::ONE_HUNDRED)
    }
}
