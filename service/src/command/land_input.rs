//! [`Command`] for typing into the [`Field::LandSqyards`].

use std::convert::Infallible;

use crate::{domain::Field, infra::View, Controller};

use super::Command;

/// [`Command`] for typing into the [`Field::LandSqyards`].
///
/// Derives the [`Field::SbuaSqft`] from the land size before recomputing
/// anything else.
#[derive(Clone, Debug)]
pub struct LandInput {
    /// New text of the [`Field::LandSqyards`].
    pub value: String,
}

impl<T, V: View> Command<LandInput> for Controller<T, V> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, cmd: LandInput) -> Result<Self::Ok, Self::Err> {
        self.set(Field::LandSqyards, cmd.value);

        self.render_sbua();
        self.render_totals();
        self.render_previous(Field::LandSqyards);
        self.render_previous(Field::SbuaSqft);
        self.render_validation();

        Ok(())
    }
}
