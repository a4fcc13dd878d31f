//! [`Validation`] of a booking form.

use derive_more::Deref;

use super::{Field, Form, SpgPraneeth, TypeOfSale};

/// Result of validating a [`Form`]: human-readable errors in the order
/// they were found.
///
/// No errors means the [`Form`] may be submitted.
#[derive(Clone, Debug, Default, Deref, Eq, PartialEq)]
pub struct Validation(Vec<String>);

impl Validation {
    /// Indicates whether no errors were found.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes this [`Validation`] returning its errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<String> {
        self.0
    }
}

/// Validates the provided [`Form`].
///
/// These are lightweight checks mirroring the server-side ones, so the user
/// learns about a mistake before submitting.
#[must_use]
pub fn validate(form: &Form) -> Validation {
    let mut errors = Vec::new();

    for field in Field::REQUIRED {
        if form.value(field).trim().is_empty() {
            errors.push(format!("{field} is required"));
        }
    }

    if SpgPraneeth::from_field(form.value(Field::SpgPraneeth)).is_none() {
        errors.push(format!("{} must be SPG or Praneeth", Field::SpgPraneeth));
    }

    if form.type_of_sale().is_none() {
        errors.push(format!("{} must be OTP or R", Field::TypeOfSale));
    }

    for field in Field::NUMERIC {
        if form.amount(field).is_nan() {
            errors.push(format!("{field} must be a number"));
        }
    }

    Validation(errors)
}

#[cfg(test)]
mod spec {
    use crate::domain::{Field, Form, Variant};

    use super::validate;

    fn complete() -> Form {
        Form::new(
            Variant::New,
            [
                (Field::BookingDate, "2025-03-14"),
                (Field::Project, "Arcadia"),
                (Field::SpgPraneeth, "SPG"),
                (Field::TypeOfSale, "otp"),
                (Field::BuyerName, "Ravi Kumar"),
                (Field::LandSqyards, "100"),
                (Field::SbuaSqft, "1350"),
                (Field::BaseSqftPrice, "₹5,000.00"),
            ]
            .map(|(f, v)| (f, v.to_owned())),
        )
    }

    #[test]
    fn accepts_complete_form() {
        let validation = validate(&complete());

        assert!(validation.is_ok(), "{validation:?}");
    }

    #[test]
    fn requires_buyer_name() {
        let mut form = complete();
        form.set(Field::BuyerName, "   ");

        let validation = validate(&form);

        assert_eq!(*validation, ["buyer_name is required"]);
    }

    #[test]
    fn rejects_unknown_seller() {
        let mut form = complete();
        form.set(Field::SpgPraneeth, "Other");

        assert_eq!(
            validate(&form).into_errors(),
            ["spg_praneeth must be SPG or Praneeth"],
        );
    }

    #[test]
    fn rejects_unknown_sale_type() {
        let mut form = complete();
        form.set(Field::TypeOfSale, "lease");

        assert_eq!(
            validate(&form).into_errors(),
            ["type_of_sale must be OTP or R"],
        );
    }

    #[test]
    fn empty_numbers_are_valid() {
        let form = complete();

        assert_eq!(form.value(Field::AmountReceived), "");
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn rejects_malformed_numbers() {
        let mut form = complete();
        form.set(Field::AmountReceived, "1.000.000");
        form.set(Field::SbuaSqft, "-");

        assert_eq!(
            validate(&form).into_errors(),
            ["sbua_sqft must be a number", "amount_received must be a number"],
        );
    }

    #[test]
    fn reports_errors_in_order() {
        let form = Form::new(Variant::New, []);

        assert_eq!(
            validate(&form).into_errors(),
            [
                "booking_date is required",
                "project is required",
                "spg_praneeth is required",
                "type_of_sale is required",
                "buyer_name is required",
                "land_sqyards is required",
                "base_sqft_price is required",
                "spg_praneeth must be SPG or Praneeth",
                "type_of_sale must be OTP or R",
            ],
        );
    }
}
