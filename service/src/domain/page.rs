//! [`Page`] rendered by the server around a booking form.

use std::collections::BTreeMap;

use common::Amount;
use serde::Deserialize;

use super::{Field, Form, Previous, Variant};

/// Server-rendered page hosting a booking form.
///
/// Describes everything the form controller consumes from the page at load
/// time.
#[derive(Clone, Debug, Deserialize)]
pub struct Page {
    /// [`Kind`] of the hosted form.
    pub form: Kind,

    /// Path of the page, which the form is submitted to.
    pub path: String,

    /// Path to navigate to once the booking is saved, if the page overrides
    /// the default one.
    #[serde(default)]
    pub success_redirect: Option<String>,

    /// Sum of the payments recorded against the booking, as rendered.
    ///
    /// Only meaningful for a [`Kind::Edit`] form.
    #[serde(default)]
    pub payments_total: Option<String>,

    /// Texts the [`Field`]s are rendered with.
    #[serde(default)]
    pub fields: BTreeMap<Field, String>,

    /// Values the server knew for the [`Field`]s before the amendment.
    ///
    /// Only meaningful for a [`Kind::Edit`] form.
    #[serde(default)]
    pub previous: BTreeMap<Field, String>,

    /// Placeholders to be rendered as currency.
    #[serde(default)]
    pub currency_nodes: Vec<CurrencyNode>,
}

/// Kind of a form hosted by a [`Page`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Form creating a new booking.
    New,

    /// Form amending an existing booking, along with a sub-form recording
    /// payments against it.
    Edit,
}

/// Page element holding a plain number to be rendered as currency.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct CurrencyNode {
    /// ID of the element.
    pub id: String,

    /// Number held by the element.
    pub value: String,
}

impl Page {
    /// Returns the [`Variant`] of the hosted form.
    #[must_use]
    pub fn variant(&self) -> Variant {
        match self.form {
            Kind::New => Variant::New,
            Kind::Edit => Variant::Edit {
                payments_total: self
                    .payments_total
                    .as_deref()
                    .map_or(Amount::ZERO, Amount::parse),
            },
        }
    }

    /// Splits this [`Page`] into the initial [`Form`] state, its
    /// [`Previous`] values and the rest of the page.
    #[must_use]
    pub fn into_parts(self) -> (Form, Previous, Endpoint, Vec<CurrencyNode>) {
        let variant = self.variant();
        let Self {
            form: _,
            path,
            success_redirect,
            payments_total: _,
            fields,
            previous,
            currency_nodes,
        } = self;

        let previous = if variant.is_new() {
            Previous::default()
        } else {
            Previous::new(previous)
        };

        (
            Form::new(variant, fields),
            previous,
            Endpoint {
                path,
                success_redirect,
            },
            currency_nodes,
        )
    }
}

/// Where a form is submitted to, and where to go afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Endpoint {
    /// Path the form is submitted to.
    pub path: String,

    /// Path to navigate to once the booking is saved, if overridden.
    pub success_redirect: Option<String>,
}
