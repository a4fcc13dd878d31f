//! [`Totals`] derived from a booking form.

use common::{format_number, Amount, Percent};
use rust_decimal::Decimal;

use super::TypeOfSale;
#[cfg(doc)]
use super::Field;

/// Square feet of super built-up area per square yard of land.
pub const SBUA_PER_SQYARD: Decimal = Decimal::from_parts(135, 0, 0, false, 1);

/// Share of the total sale price to be collected by the plan approval.
pub const PLAN_MILESTONE: Percent = Percent::whole(20);

/// Calculates the super built-up area for the provided land size.
#[must_use]
pub fn sbua_for(land_sqyards: Amount) -> Amount {
    land_sqyards * SBUA_PER_SQYARD
}

/// Texts of the derived [`Field::SbuaSqft`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sbua {
    /// Text of the [`Field::SbuaSqft`] input itself.
    ///
    /// Empty when the land size isn't a number.
    pub value: String,

    /// Grouped text shown next to the input.
    pub display: String,
}

impl Sbua {
    /// Derives the [`Sbua`] texts from the provided land size.
    #[must_use]
    pub fn from_land(land_sqyards: Amount) -> Self {
        let sbua = sbua_for(land_sqyards);
        if sbua.is_nan() {
            Self {
                value: String::new(),
                display: "0".to_owned(),
            }
        } else {
            Self {
                value: sbua.to_string(),
                display: format_number(sbua),
            }
        }
    }
}

/// Values [`Totals`] are computed from.
#[derive(Clone, Copy, Debug)]
pub struct Inputs {
    /// Super built-up area in square feet.
    pub sbua_sqft: Amount,

    /// Base price of a square foot.
    pub base_sqft_price: Amount,

    /// Amenities and premiums per square foot.
    pub amenties_and_premiums: Amount,

    /// Amount received at the booking.
    pub amount_received: Amount,

    /// Sum of the payments recorded after the booking.
    pub payments_total: Amount,

    /// Selected [`TypeOfSale`], if valid.
    pub type_of_sale: Option<TypeOfSale>,
}

/// Totals derived from a booking form.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Totals {
    /// Price the plot is sold for.
    pub total_sale_price: Amount,

    /// Part of the [`Totals::total_sale_price`] not paid yet.
    pub balance_amount: Amount,

    /// Balance to be collected according to the [`TypeOfSale`] plan.
    pub balance_plan: Amount,
}

impl Totals {
    /// Computes [`Totals`] from the provided [`Inputs`].
    ///
    /// Any sale which isn't [`TypeOfSale::Otp`] (including an invalid one)
    /// is planned against the [`PLAN_MILESTONE`].
    #[must_use]
    pub fn compute(inputs: &Inputs) -> Self {
        let Inputs {
            sbua_sqft,
            base_sqft_price,
            amenties_and_premiums,
            amount_received,
            payments_total,
            type_of_sale,
        } = *inputs;

        let total_sale_price =
            sbua_sqft * (base_sqft_price + amenties_and_premiums);
        let balance_amount =
            total_sale_price - (amount_received + payments_total);
        let balance_plan = match type_of_sale {
            Some(TypeOfSale::Otp) => balance_amount,
            Some(TypeOfSale::R) | None => {
                PLAN_MILESTONE.of(total_sale_price) - balance_amount
            }
        };

        Self {
            total_sale_price,
            balance_amount,
            balance_plan,
        }
    }
}

#[cfg(test)]
mod spec {
    use common::Amount;

    use crate::domain::TypeOfSale;

    use super::{sbua_for, Inputs, Sbua, Totals};

    fn amount(s: &str) -> Amount {
        Amount::Number(s.parse().unwrap())
    }

    fn inputs(type_of_sale: Option<TypeOfSale>) -> Inputs {
        Inputs {
            sbua_sqft: amount("1350"),
            base_sqft_price: amount("5000"),
            amenties_and_premiums: amount("500"),
            amount_received: amount("1000000"),
            payments_total: Amount::ZERO,
            type_of_sale,
        }
    }

    #[test]
    fn derives_sbua_from_land() {
        assert_eq!(sbua_for(amount("100")), amount("1350"));
        assert_eq!(sbua_for(amount("101")), amount("1363.5"));
        assert_eq!(sbua_for(Amount::ZERO), Amount::ZERO);
    }

    #[test]
    fn renders_sbua_texts() {
        assert_eq!(
            Sbua::from_land(amount("100")),
            Sbua {
                value: "1350".to_owned(),
                display: "1,350".to_owned(),
            },
        );
        assert_eq!(
            Sbua::from_land(Amount::parse("1.2.3")),
            Sbua {
                value: String::new(),
                display: "0".to_owned(),
            },
        );
        assert_eq!(Sbua::from_land(Amount::ZERO).value, "0");
    }

    #[test]
    fn otp_plan_is_the_balance() {
        let totals = Totals::compute(&inputs(Some(TypeOfSale::Otp)));

        assert_eq!(totals.total_sale_price, amount("7425000"));
        assert_eq!(totals.balance_amount, amount("6425000"));
        assert_eq!(totals.balance_plan, amount("6425000"));
    }

    #[test]
    fn r_plan_is_measured_against_milestone() {
        let totals = Totals::compute(&inputs(Some(TypeOfSale::R)));

        assert_eq!(totals.total_sale_price, amount("7425000"));
        assert_eq!(totals.balance_amount, amount("6425000"));
        assert_eq!(totals.balance_plan, amount("-4940000"));
    }

    #[test]
    fn unknown_sale_type_is_planned_like_r() {
        assert_eq!(
            Totals::compute(&inputs(None)),
            Totals::compute(&inputs(Some(TypeOfSale::R))),
        );
    }

    #[test]
    fn payments_reduce_the_balance() {
        let totals = Totals::compute(&Inputs {
            payments_total: amount("425000"),
            ..inputs(Some(TypeOfSale::Otp))
        });

        assert_eq!(totals.balance_amount, amount("6000000"));
        assert_eq!(totals.balance_plan, amount("6000000"));
    }

    #[test]
    fn nan_input_spoils_every_total() {
        let totals = Totals::compute(&Inputs {
            base_sqft_price: Amount::NaN,
            ..inputs(Some(TypeOfSale::Otp))
        });

        assert!(totals.total_sale_price.is_nan());
        assert!(totals.balance_amount.is_nan());
        assert!(totals.balance_plan.is_nan());
    }
}
