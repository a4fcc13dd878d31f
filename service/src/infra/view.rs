//! [`View`] definitions.

use std::{borrow::Cow, fmt};

use derive_more::{Display, Error};

use crate::domain::{Field, Variant};
#[cfg(doc)]
use crate::Controller;

/// Presentation the [`Controller`] writes its state into.
///
/// Implementations only mirror what they're told; they never compute
/// anything and never call back into the [`Controller`].
pub trait View {
    /// Replaces the text of the provided input [`Target`].
    fn set_value(&self, target: Target, value: &str);

    /// Replaces the text content of the provided [`Node`].
    fn set_text(&self, node: Node<'_>, text: &str);

    /// Shows the provided errors as a list, or hides the list when there are
    /// none.
    fn show_errors(&self, errors: &[String]);

    /// Enables or disables the submit control.
    fn set_submit_enabled(&self, enabled: bool);

    /// Shows the provided "previous value" label next to the [`Field`], or
    /// hides it on [`None`].
    fn set_previous(&self, field: Field, label: Option<&str>);

    /// Places the caret of the provided input [`Target`] at the `caret`
    /// position.
    ///
    /// # Errors
    ///
    /// If the caret cannot be placed there.
    fn restore_caret(
        &self,
        target: Target,
        caret: usize,
    ) -> Result<(), CaretError>;

    /// Focuses the provided input [`Target`], selecting its whole text if
    /// `select` is `true`.
    fn focus(&self, target: Target, select: bool);

    /// Asks the user the provided yes/no `question`, blocking until it's
    /// answered.
    fn confirm(&self, question: &str) -> bool;

    /// Navigates away to the provided URL.
    fn navigate(&self, url: &str);
}

/// Input a [`View`] renders.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Target {
    /// Input of a booking form [`Field`].
    Field(Field),

    /// Amount input of the payment sub-form.
    PaymentAmount,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => write!(f, "{field}"),
            Self::PaymentAmount => f.write_str("amount"),
        }
    }
}

/// Non-input element a [`View`] renders.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Node<'a> {
    /// Grouped super built-up area shown next to its input.
    SbuaDisplay,

    /// Total sale price.
    TotalSalePrice,

    /// Outstanding balance.
    BalanceAmount,

    /// Balance to be collected according to the sale type plan.
    BalancePlan,

    /// Currency placeholder with the provided ID.
    Currency(&'a str),
}

impl Node<'_> {
    /// Returns ID of the page element this [`Node`] is rendered into for the
    /// provided form [`Variant`].
    #[must_use]
    pub fn id(&self, variant: Variant) -> Cow<'_, str> {
        let total = |name: &'static str| {
            if variant.is_new() {
                Cow::Borrowed(name)
            } else {
                Cow::Owned(format!("edit_{name}"))
            }
        };
        match self {
            Self::SbuaDisplay => Cow::Borrowed("sbua_display"),
            Self::TotalSalePrice => total("total_sale_price"),
            Self::BalanceAmount => total("balance_amount"),
            Self::BalancePlan => total("balance_plan"),
            Self::Currency(id) => Cow::Borrowed(id),
        }
    }
}

/// Error of [`View::restore_caret()`].
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("caret cannot be placed at {_0}")]
pub struct CaretError(#[error(not(source))] pub usize);
