//! [`Command`] for rendering a freshly loaded [`Page`].

use std::convert::Infallible;

use common::{format_currency, Amount};
use tracing as log;

#[cfg(doc)]
use crate::domain::Page;
use crate::{
    domain::Field,
    infra::{view::Node, View},
    Controller,
};

use super::Command;

/// [`Command`] for rendering a freshly loaded [`Page`].
///
/// Formats the currency placeholders, derives every value from the initial
/// state and, for a new booking, decides whether it may be submitted.
#[derive(Clone, Copy, Debug)]
pub struct Load;

impl<T, V: View> Command<Load> for Controller<T, V> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, _: Load) -> Result<Self::Ok, Self::Err> {
        for node in &self.currency_nodes {
            self.view.set_text(
                Node::Currency(&node.id),
                &format_currency(Amount::parse(&node.value)),
            );
        }

        if self.variant().is_new() {
            self.view.set_submit_enabled(false);
        }
        self.render_sbua();
        self.render_totals();
        for field in Field::ALL {
            self.render_previous(*field);
        }
        self.render_validation();

        log::debug!("loaded {:?} form", self.variant());
        Ok(())
    }
}
