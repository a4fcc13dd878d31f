//! [`Command`] for typing into a plain [`Field`].

use derive_more::{Display, Error};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::field::Binding;
use crate::{
    domain::{field, Field},
    infra::View,
    Controller,
};

use super::Command;

/// [`Command`] for typing into a [`Field`] with a [`Binding::Plain`].
#[derive(Clone, Debug)]
pub struct FieldInput {
    /// [`Field`] being typed into.
    pub field: Field,

    /// New text of the [`Field`].
    pub value: String,
}

impl<T, V: View> Command<FieldInput> for Controller<T, V> {
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: FieldInput) -> Result<Self::Ok, Self::Err> {
        let FieldInput { field, value } = cmd;

        if field.binding() != field::Binding::Plain {
            return Err(tracerr::new!(ExecutionError::Misbound(field)));
        }

        self.set(field, value);
        if field == Field::SbuaSqft && self.variant().is_new() {
            // Derived from the land on a new booking.
            self.render_sbua();
        }

        self.render_previous(field);
        self.render_totals();
        self.render_validation();

        Ok(())
    }
}

/// Error of [`FieldInput`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// [`Field`] is driven by another [`Command`].
    #[display("`{_0}` field is not a plain one")]
    Misbound(#[error(not(source))] Field),
}
