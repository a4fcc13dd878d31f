//! [`Command`]s handling events of the payment amount input.
//!
//! The payment sub-form exists only next to a [`Variant::Edit`] form, as
//! nothing can be paid against an unsaved booking.

use common::{format_currency, Amount};
use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::Variant;
use crate::{
    domain::payment::{self, Capping, Check},
    infra::{view::Target, View},
    Controller,
};

use super::{currency, Command};

/// [`Command`] for typing into the payment amount.
#[derive(Clone, Debug)]
pub struct PaymentInput {
    /// New text of the payment amount.
    pub value: String,

    /// Position of the caret in the typed text.
    pub caret: Option<usize>,
}

impl<T, V: View> Command<PaymentInput> for Controller<T, V> {
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: PaymentInput) -> Result<Self::Ok, Self::Err> {
        let PaymentInput { value, caret } = cmd;

        _ = self.payment()?;
        let formatted =
            self.render_currency(Target::PaymentAmount, &value, caret);
        self.set_payment(formatted);

        Ok(())
    }
}

/// [`Command`] for focusing the payment amount.
#[derive(Clone, Copy, Debug)]
pub struct PaymentFocus;

impl<T, V: View> Command<PaymentFocus> for Controller<T, V> {
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, _: PaymentFocus) -> Result<Self::Ok, Self::Err> {
        let raw = currency::raw(&self.payment()?);
        self.view.set_value(Target::PaymentAmount, &raw);
        self.set_payment(raw);

        Ok(())
    }
}

/// [`Command`] for leaving the payment amount.
///
/// Makes sure the amount doesn't exceed the displayed balance, asking the
/// user how to fix it otherwise.
#[derive(Clone, Copy, Debug)]
pub struct PaymentBlur;

impl<T, V: View> Command<PaymentBlur> for Controller<T, V> {
    type Ok = Capping;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, _: PaymentBlur) -> Result<Self::Ok, Self::Err> {
        let text = self.payment()?;
        let formatted = self.render_currency(Target::PaymentAmount, &text, None);
        self.set_payment(formatted.clone());

        let amount = Amount::parse(&formatted);
        let balance = self.displayed_balance();
        let Check::Exceeds { prompt } = payment::check(amount, balance) else {
            return Ok(Capping::Within);
        };

        Ok(if self.view.confirm(&prompt) {
            log::debug!("payment of {amount} capped to {balance}");
            let capped = format_currency(balance);
            self.view.set_value(Target::PaymentAmount, &capped);
            self.set_payment(capped);
            Capping::CappedToBalance
        } else {
            log::debug!("payment of {amount} cleared");
            let cleared = format_currency(Amount::ZERO);
            self.view.set_value(Target::PaymentAmount, &cleared);
            self.set_payment(cleared);
            self.view.focus(Target::PaymentAmount, true);
            Capping::Cleared
        })
    }
}

impl<T, V> Controller<T, V> {
    /// Returns the current text of the payment amount.
    ///
    /// # Errors
    ///
    /// If the controlled form has no payment sub-form.
    fn payment(&self) -> Result<String, Traced<ExecutionError>> {
        self.state
            .borrow()
            .payment
            .clone()
            .ok_or_else(|| tracerr::new!(ExecutionError::NoPaymentForm))
    }

    /// Replaces the text of the payment amount, if there is a payment
    /// sub-form.
    fn set_payment(&self, text: String) {
        if let Some(payment) = &mut self.state.borrow_mut().payment {
            *payment = text;
        }
    }
}

/// Error of payment [`Command`]s execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// Controlled form has no payment sub-form.
    #[display("Form has no payment sub-form")]
    NoPaymentForm,
}
