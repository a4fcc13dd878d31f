//! Sale classification definitions.

use common::define_kind;

define_kind! {
    #[doc = "Entity a plot is sold by."]
    enum SpgPraneeth {
        #[doc = "SPG."]
        Spg = "SPG",

        #[doc = "Praneeth."]
        Praneeth = "Praneeth",
    }
}

impl SpgPraneeth {
    /// Reads a [`SpgPraneeth`] from the provided field text.
    ///
    /// Surrounding whitespace is ignored, but the case must match exactly.
    #[must_use]
    pub fn from_field(text: &str) -> Option<Self> {
        text.trim().parse().ok()
    }
}

define_kind! {
    #[doc = "Type of a sale, deciding how the balance plan is calculated."]
    enum TypeOfSale {
        #[doc = "Balance plan is the outstanding balance itself."]
        Otp = "OTP",

        #[doc = "Balance plan is measured against the 20% milestone of the \
                 total sale price."]
        R = "R",
    }
}

impl TypeOfSale {
    /// Reads a [`TypeOfSale`] from the provided field text, ignoring its
    /// case.
    #[must_use]
    pub fn from_field(text: &str) -> Option<Self> {
        text.to_uppercase().parse().ok()
    }
}
