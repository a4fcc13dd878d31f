//! Service contains the behavior of a booking form of the sales CRM.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

use std::cell::{Cell, RefCell};

use common::{format_currency, Amount};
use smart_default::SmartDefault;
use tracing as log;

use self::{
    domain::{
        page::{CurrencyNode, Endpoint},
        totals::Sbua,
        validation, Field, Form, Page, Previous, Totals, Variant,
    },
    infra::view::{Node, Target},
};
#[cfg(doc)]
use self::infra::{Transport, View};

pub use self::{command::Command, query::Query};

/// [`Controller`] configuration.
#[derive(Clone, Debug, SmartDefault)]
pub struct Config {
    /// Path to navigate to once a booking is saved, unless the [`Page`]
    /// overrides it.
    #[default("/crm/new?saved=1".to_owned())]
    pub success_redirect: String,
}

/// Controller of a single booking form rendered on a [`Page`].
///
/// Keeps the [`Form`] state, derives values from it and mirrors everything
/// into its [`View`], submitting the [`Form`] via its [`Transport`].
///
/// Reacts to the user via [`Command`]s, each of them being a single UI event.
#[derive(Debug)]
pub struct Controller<T, V> {
    /// Configuration of this [`Controller`].
    config: Config,

    /// Where the [`Form`] is submitted to.
    endpoint: Endpoint,

    /// [`Previous`] values of the [`Form`] being amended.
    previous: Previous,

    /// Currency placeholders of the [`Page`].
    currency_nodes: Vec<CurrencyNode>,

    /// [`Transport`] of this [`Controller`].
    transport: T,

    /// [`View`] of this [`Controller`].
    view: V,

    /// Mutable state of this [`Controller`].
    state: RefCell<State>,

    /// Indicator whether a submission is in flight.
    submitting: Cell<bool>,
}

/// Mutable state of a [`Controller`].
#[derive(Clone, Debug)]
struct State {
    /// Current [`Form`].
    form: Form,

    /// Text of the payment amount input, if the [`Form`] has a payment
    /// sub-form.
    payment: Option<String>,

    /// [`Totals`] last rendered.
    totals: Totals,
}

impl<T, V> Controller<T, V> {
    /// Creates a new [`Controller`] of the form hosted by the provided
    /// [`Page`].
    ///
    /// Nothing is rendered until the [`command::Load`] is executed.
    pub fn new(config: Config, page: Page, transport: T, view: V) -> Self {
        let (form, previous, endpoint, currency_nodes) = page.into_parts();
        let payment = (!form.variant().is_new()).then(String::new);
        let totals = form.totals();

        Self {
            config,
            endpoint,
            previous,
            currency_nodes,
            transport,
            view,
            state: RefCell::new(State {
                form,
                payment,
                totals,
            }),
            submitting: Cell::new(false),
        }
    }

    /// Returns [`Config`] of this [`Controller`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Transport`] of this [`Controller`].
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns [`View`] of this [`Controller`].
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Returns the [`Variant`] of the controlled [`Form`].
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.state.borrow().form.variant()
    }

    /// Indicates whether a submission is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    /// Returns the current text of the provided [`Field`].
    #[must_use]
    pub fn value(&self, field: Field) -> String {
        self.state.borrow().form.value(field).to_owned()
    }

    /// Replaces the text of the provided [`Field`] without rendering
    /// anything.
    fn set(&self, field: Field, value: impl Into<String>) {
        self.state.borrow_mut().form.set(field, value);
    }

    /// Returns the balance exactly as it's displayed to the user.
    fn displayed_balance(&self) -> Amount {
        let balance = self.state.borrow().totals.balance_amount;
        Amount::parse(&format_currency(balance))
    }
}

impl<T, V: infra::View> Controller<T, V> {
    /// Reformats the provided input [`Target`] text as currency, trying to
    /// keep the caret in place.
    ///
    /// Returns the formatted text.
    fn render_currency(
        &self,
        target: Target,
        text: &str,
        caret: Option<usize>,
    ) -> String {
        let formatted = format_currency(Amount::parse(text));
        self.view.set_value(target, &formatted);
        if let Some(caret) = caret {
            if let Err(e) = self.view.restore_caret(target, caret) {
                log::trace!("failed to restore caret of `{target}`: {e}");
            }
        }
        formatted
    }

    /// Derives [`Field::SbuaSqft`] from the current land size and renders it.
    fn render_sbua(&self) {
        let land = self.state.borrow().form.amount(Field::LandSqyards);
        let Sbua { value, display } = Sbua::from_land(land);

        self.view.set_value(Target::Field(Field::SbuaSqft), &value);
        self.view.set_text(Node::SbuaDisplay, &display);
        self.set(Field::SbuaSqft, value);
    }

    /// Recomputes [`Totals`] and renders them.
    fn render_totals(&self) {
        let (variant, totals) = {
            let mut state = self.state.borrow_mut();
            state.totals = state.form.totals();
            (state.form.variant(), state.totals)
        };

        for (node, amount) in [
            (Node::TotalSalePrice, totals.total_sale_price),
            (Node::BalanceAmount, totals.balance_amount),
            (Node::BalancePlan, totals.balance_plan),
        ] {
            log::trace!("{} = {amount}", node.id(variant));
            self.view.set_text(node, &format_currency(amount));
        }
    }

    /// Validates the [`Form`] of a [`Variant::New`] and gates its submit
    /// control.
    ///
    /// Does nothing for other [`Variant`]s.
    fn render_validation(&self) {
        let validation = {
            let state = self.state.borrow();
            if !state.form.variant().is_new() {
                return;
            }
            validation::validate(&state.form)
        };

        self.view.show_errors(&validation);
        self.view
            .set_submit_enabled(validation.is_ok() && !self.is_submitting());
    }

    /// Renders the label of the provided [`Field`] previous value, if it has
    /// one.
    fn render_previous(&self, field: Field) {
        if !self.previous.contains(field) {
            return;
        }
        let label = {
            let state = self.state.borrow();
            self.previous.label(field, state.form.value(field))
        };
        self.view.set_previous(field, label.as_deref());
    }
}
