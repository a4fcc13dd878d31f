//! [`Field`] definitions.

use common::define_kind;

#[cfg(doc)]
use crate::Controller;

define_kind! {
    #[doc = "Named field of a booking [`Form`](super::Form)."]
    enum Field {
        #[doc = "Date of the booking."]
        BookingDate = "booking_date",

        #[doc = "Project the booked plot belongs to."]
        Project = "project",

        #[doc = "Selling entity, either `SPG` or `Praneeth`."]
        SpgPraneeth = "spg_praneeth",

        #[doc = "Token number of the booking."]
        Token = "token",

        #[doc = "Name of the buyer."]
        BuyerName = "buyer_name",

        #[doc = "Source of lead."]
        Sol = "sol",

        #[doc = "Type of the sale, either `OTP` or `R`."]
        TypeOfSale = "type_of_sale",

        #[doc = "Land size in square yards."]
        LandSqyards = "land_sqyards",

        #[doc = "Super built-up area in square feet, derived from the land."]
        SbuaSqft = "sbua_sqft",

        #[doc = "Facing of the plot."]
        Facing = "facing",

        #[doc = "Base price of a square foot."]
        BaseSqftPrice = "base_sqft_price",

        #[doc = "Amenities and premiums charged per square foot."]
        AmentiesAndPremiums = "amenties_and_premiums",

        #[doc = "Amount received at the booking."]
        AmountReceived = "amount_received",

        #[doc = "Free-form notes."]
        Notes = "notes",

        #[doc = "Name of the sales person."]
        SalePersonName = "sale_person_name",
    }
}

define_kind! {
    #[doc = "[`Field`] holding an amount of money."]
    enum CurrencyField {
        #[doc = "[`Field::BaseSqftPrice`]."]
        BaseSqftPrice = "base_sqft_price",

        #[doc = "[`Field::AmentiesAndPremiums`]."]
        AmentiesAndPremiums = "amenties_and_premiums",

        #[doc = "[`Field::AmountReceived`]."]
        AmountReceived = "amount_received",
    }
}

impl From<CurrencyField> for Field {
    fn from(field: CurrencyField) -> Self {
        match field {
            CurrencyField::BaseSqftPrice => Self::BaseSqftPrice,
            CurrencyField::AmentiesAndPremiums => Self::AmentiesAndPremiums,
            CurrencyField::AmountReceived => Self::AmountReceived,
        }
    }
}

/// Way a [`Field`] is bound to the [`Controller`] commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Binding {
    /// [`Field::LandSqyards`], driving the derived built-up area.
    Land,

    /// [`CurrencyField`], reformatted as the user types.
    Currency(CurrencyField),

    /// Any other [`Field`].
    Plain,
}

impl Field {
    /// [`Field`]s which must not be blank, in the order they're reported.
    pub const REQUIRED: [Self; 7] = [
        Self::BookingDate,
        Self::Project,
        Self::SpgPraneeth,
        Self::TypeOfSale,
        Self::BuyerName,
        Self::LandSqyards,
        Self::BaseSqftPrice,
    ];

    /// [`Field`]s which must hold a number, in the order they're reported.
    pub const NUMERIC: [Self; 5] = [
        Self::LandSqyards,
        Self::SbuaSqft,
        Self::BaseSqftPrice,
        Self::AmentiesAndPremiums,
        Self::AmountReceived,
    ];

    /// Returns the [`Binding`] of this [`Field`].
    #[must_use]
    pub const fn binding(self) -> Binding {
        match self {
            Self::LandSqyards => Binding::Land,
            Self::BaseSqftPrice => {
                Binding::Currency(CurrencyField::BaseSqftPrice)
            }
            Self::AmentiesAndPremiums => {
                Binding::Currency(CurrencyField::AmentiesAndPremiums)
            }
            Self::AmountReceived => {
                Binding::Currency(CurrencyField::AmountReceived)
            }
            Self::BookingDate
            | Self::Project
            | Self::SpgPraneeth
            | Self::Token
            | Self::BuyerName
            | Self::Sol
            | Self::TypeOfSale
            | Self::SbuaSqft
            | Self::Facing
            | Self::Notes
            | Self::SalePersonName => Binding::Plain,
        }
    }

    /// Indicates whether this [`Field`] holds an amount of money.
    #[must_use]
    pub const fn is_currency(self) -> bool {
        matches!(self.binding(), Binding::Currency(_))
    }

    /// Returns the help text describing the rule this [`Field`] obeys, if
    /// any.
    #[must_use]
    pub const fn rule(self) -> Option<&'static str> {
        match self {
            Self::SpgPraneeth => Some("Allowed values: SPG or Praneeth"),
            Self::TypeOfSale => Some("Allowed values: OTP or R"),
            Self::SbuaSqft => Some("Calculated: land_sqyards * 13.5"),
            Self::BookingDate
            | Self::Project
            | Self::Token
            | Self::BuyerName
            | Self::Sol
            | Self::LandSqyards
            | Self::Facing
            | Self::BaseSqftPrice
            | Self::AmentiesAndPremiums
            | Self::AmountReceived
            | Self::Notes
            | Self::SalePersonName => None,
        }
    }
}

/// Help text describing the values calculated from the [`Field`]s.
pub const CALCULATED_RULE: &str =
    "Calculated: total_sale_price, balance_amount, balance_plan";
