//! [`Command`]s handling events of a [`CurrencyField`] input.

use std::convert::Infallible;

use common::Amount;

use crate::{
    domain::{CurrencyField, Field},
    infra::{view::Target, View},
    Controller,
};

use super::Command;

/// [`Command`] for typing into a [`CurrencyField`].
#[derive(Clone, Debug)]
pub struct CurrencyInput {
    /// [`CurrencyField`] being typed into.
    pub field: CurrencyField,

    /// New text of the [`CurrencyField`].
    pub value: String,

    /// Position of the caret in the typed text.
    pub caret: Option<usize>,
}

impl<T, V: View> Command<CurrencyInput> for Controller<T, V> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, cmd: CurrencyInput) -> Result<Self::Ok, Self::Err> {
        let CurrencyInput {
            field,
            value,
            caret,
        } = cmd;
        let field = Field::from(field);

        let formatted =
            self.render_currency(Target::Field(field), &value, caret);
        self.set(field, formatted);

        self.render_totals();
        self.render_previous(field);
        self.render_validation();

        Ok(())
    }
}

/// [`Command`] for focusing a [`CurrencyField`].
///
/// Replaces the formatted text with the plain number, so it's easy to edit.
#[derive(Clone, Copy, Debug)]
pub struct CurrencyFocus {
    /// Focused [`CurrencyField`].
    pub field: CurrencyField,
}

impl<T, V: View> Command<CurrencyFocus> for Controller<T, V> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, cmd: CurrencyFocus) -> Result<Self::Ok, Self::Err> {
        let field = Field::from(cmd.field);

        let raw = raw(&self.value(field));
        self.view.set_value(Target::Field(field), &raw);
        self.set(field, raw);

        Ok(())
    }
}

/// [`Command`] for leaving a [`CurrencyField`].
#[derive(Clone, Copy, Debug)]
pub struct CurrencyBlur {
    /// Left [`CurrencyField`].
    pub field: CurrencyField,
}

impl<T, V: View> Command<CurrencyBlur> for Controller<T, V> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, cmd: CurrencyBlur) -> Result<Self::Ok, Self::Err> {
        let field = Field::from(cmd.field);

        let text = self.value(field);
        let formatted = self.render_currency(Target::Field(field), &text, None);
        self.set(field, formatted);

        self.render_previous(field);
        self.render_totals();
        self.render_validation();

        Ok(())
    }
}

/// Returns the plain number the provided currency `text` holds, as shown in
/// a focused input.
///
/// Zero and non-numbers are shown as an empty text.
pub(crate) fn raw(text: &str) -> String {
    let amount = Amount::parse(text);
    if amount.is_nan() || amount.is_zero() {
        String::new()
    } else {
        amount.to_string()
    }
}

#[cfg(test)]
mod spec {
    use super::raw;

    #[test]
    fn shows_plain_number() {
        assert_eq!(raw("₹1,23,456.50"), "123456.5");
        assert_eq!(raw("-₹2,000.00"), "-2000");
    }

    #[test]
    fn hides_zero_and_garbage() {
        assert_eq!(raw(""), "");
        assert_eq!(raw("₹0.00"), "");
        assert_eq!(raw("1.2.3"), "");
    }
}
