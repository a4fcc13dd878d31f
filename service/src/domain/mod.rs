//! Domain definitions.

pub mod field;
pub mod form;
pub mod page;
pub mod payment;
pub mod previous;
pub mod redirect;
pub mod sale;
pub mod totals;
pub mod validation;

pub use self::{
    field::{Binding, CurrencyField, Field},
    form::{Form, Variant},
    page::Page,
    previous::Previous,
    sale::{SpgPraneeth, TypeOfSale},
    totals::Totals,
    validation::Validation,
};
