//! [`Query`] definition.

use std::convert::Infallible;

use crate::{domain::validation, read::Snapshot, Controller};

/// [`Query`] of the [`Controller`].
pub use common::Handler as Query;

/// [`Query`] of the current [`Snapshot`] of a [`Controller`].
#[derive(Clone, Copy, Debug)]
pub struct CurrentState;

impl<T, V> Query<CurrentState> for Controller<T, V> {
    type Ok = Snapshot;
    type Err = Infallible;

    async fn execute(&self, _: CurrentState) -> Result<Self::Ok, Self::Err> {
        let state = self.state.borrow();
        Ok(Snapshot {
            variant: state.form.variant(),
            values: state.form.pairs(),
            totals: state.totals,
            validation: validation::validate(&state.form),
            payment: state.payment.clone(),
            in_flight: self.is_submitting(),
        })
    }
}
