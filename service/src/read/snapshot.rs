//! [`Snapshot`] definitions.

use crate::domain::{Field, Totals, Validation, Variant};
#[cfg(doc)]
use crate::Controller;

/// Point-in-time state of a [`Controller`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snapshot {
    /// [`Variant`] of the controlled form.
    pub variant: Variant,

    /// Current texts of all the [`Field`]s, in their declaration order.
    pub values: Vec<(Field, String)>,

    /// [`Totals`] derived from the current texts.
    pub totals: Totals,

    /// Result of validating the current texts.
    pub validation: Validation,

    /// Text of the payment amount, if there is a payment sub-form.
    pub payment: Option<String>,

    /// Indicator whether a submission is in flight.
    pub in_flight: bool,
}
