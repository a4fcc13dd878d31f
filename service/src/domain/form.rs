//! [`Form`] state definitions.

use std::collections::BTreeMap;

use common::Amount;

use super::{
    totals::{Inputs, Totals},
    Field, TypeOfSale,
};

/// Variant of a booking [`Form`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Variant {
    /// Form creating a new booking.
    New,

    /// Form amending an existing booking.
    Edit {
        /// Sum of the payments recorded against the booking so far.
        payments_total: Amount,
    },
}

impl Variant {
    /// Indicates whether this is the [`Variant::New`] one.
    #[must_use]
    pub const fn is_new(self) -> bool {
        matches!(self, Self::New)
    }

    /// Returns the sum of the payments already recorded against the booking.
    ///
    /// Always zero for a [`Variant::New`] form, as nothing can be paid
    /// against an unsaved booking.
    #[must_use]
    pub const fn payments_total(self) -> Amount {
        match self {
            Self::New => Amount::ZERO,
            Self::Edit { payments_total } => payments_total,
        }
    }
}

/// Current state of a booking form.
#[derive(Clone, Debug)]
pub struct Form {
    /// [`Variant`] of this [`Form`].
    variant: Variant,

    /// Current texts of the [`Field`]s.
    values: BTreeMap<Field, String>,
}

impl Form {
    /// Creates a new [`Form`] holding the provided [`Field`] texts.
    #[must_use]
    pub fn new(
        variant: Variant,
        values: impl IntoIterator<Item = (Field, String)>,
    ) -> Self {
        Self {
            variant,
            values: values.into_iter().collect(),
        }
    }

    /// Returns the [`Variant`] of this [`Form`].
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the current text of the provided [`Field`].
    ///
    /// A [`Field`] never set reads as an empty text.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Replaces the text of the provided [`Field`].
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        _ = self.values.insert(field, value.into());
    }

    /// Parses the current text of the provided [`Field`] as an [`Amount`].
    #[must_use]
    pub fn amount(&self, field: Field) -> Amount {
        Amount::parse(self.value(field))
    }

    /// Returns the [`TypeOfSale`] currently selected, if it's a valid one.
    #[must_use]
    pub fn type_of_sale(&self) -> Option<TypeOfSale> {
        TypeOfSale::from_field(self.value(Field::TypeOfSale))
    }

    /// Computes the [`Totals`] derived from the current state.
    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals::compute(&Inputs {
            sbua_sqft: self.amount(Field::SbuaSqft),
            base_sqft_price: self.amount(Field::BaseSqftPrice),
            amenties_and_premiums: self.amount(Field::AmentiesAndPremiums),
            amount_received: self.amount(Field::AmountReceived),
            payments_total: self.variant.payments_total(),
            type_of_sale: self.type_of_sale(),
        })
    }

    /// Returns texts of all the [`Field`]s in their declaration order, the
    /// way they're submitted.
    #[must_use]
    pub fn pairs(&self) -> Vec<(Field, String)> {
        Field::ALL
            .iter()
            .map(|f| (*f, self.value(*f).to_owned()))
            .collect()
    }
}
