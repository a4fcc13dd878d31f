//! [`Command`] definition.

pub mod currency;
pub mod field_input;
pub mod land_input;
pub mod load;
pub mod payment;
pub mod submit;

/// [`Command`] of the [`Controller`].
///
/// [`Controller`]: crate::Controller
pub use common::Handler as Command;

pub use self::{
    currency::{CurrencyBlur, CurrencyFocus, CurrencyInput},
    field_input::FieldInput,
    land_input::LandInput,
    load::Load,
    payment::{PaymentBlur, PaymentFocus, PaymentInput},
    submit::Submit,
};
