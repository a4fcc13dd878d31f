//! Capping of a payment recorded against a booking balance.

use common::{format_currency, Amount};

/// Result of [`check()`]ing a payment amount against the balance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Check {
    /// Amount doesn't exceed the balance.
    Within,

    /// Amount exceeds the balance, so the user must be asked what to do.
    Exceeds {
        /// Question to ask the user.
        prompt: String,
    },
}

/// Checks the provided payment `amount` against the current `balance`.
#[must_use]
pub fn check(amount: Amount, balance: Amount) -> Check {
    if amount.exceeds(balance) {
        Check::Exceeds {
            prompt: format!(
                "Entered amount ({}) exceeds current balance ({}).\n\
                 Do you want to set amount to the balance?",
                format_currency(amount),
                format_currency(balance),
            ),
        }
    } else {
        Check::Within
    }
}

/// Resolution of a payment amount after [`check()`]ing it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Capping {
    /// Amount was kept as entered.
    Within,

    /// Amount was lowered to the balance.
    CappedToBalance,

    /// Amount was reset to zero, and the field refocused.
    Cleared,
}
