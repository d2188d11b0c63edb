use derive_more::{Deref, Display, Into};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::domain::errors::{PricingError, PricingResult};

/// Value Object - plan tier shown on the pricing tabs
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    #[default]
    Basic,
    Business,
    Enterprise,
}

impl PlanId {
    /// Parse a `data-plan` value; anything outside the enumerated set is rejected.
    pub fn parse(value: &str) -> PricingResult<Self> {
        Self::from_str(value).map_err(|_| PricingError::UnknownPlan(value.to_string()))
    }
}

/// Value Object - payment cadence
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn parse(value: &str) -> PricingResult<Self> {
        Self::from_str(value).map_err(|_| PricingError::UnknownBillingCycle(value.to_string()))
    }
}

/// Value Object - display currency.
///
/// The symbol and rate lookups are exhaustive matches, so every listed code
/// always has both a symbol and a display rate.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Usd,
    Ugx,
    Kes,
    Ngn,
}

impl CurrencyCode {
    pub fn parse(value: &str) -> PricingResult<Self> {
        Self::from_str(value).map_err(|_| PricingError::UnknownCurrency(value.to_string()))
    }

    /// Display symbol placed in front of the amount.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Ugx => "UGX",
            Self::Kes => "KSh",
            Self::Ngn => "₦",
        }
    }

    /// Display-only multiplier against USD. Not a live exchange rate.
    pub fn display_rate(&self) -> f64 {
        match self {
            Self::Usd => 1.0,
            Self::Ugx => 3800.0,
            Self::Kes => 128.0,
            Self::Ngn => 1550.0,
        }
    }
}

/// Value Object - list price in US dollars, always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Into, Deref, Display, Serialize)]
#[display(fmt = "${}", _0)]
pub struct UsdAmount(pub(super) f64);

impl UsdAmount {
    pub fn try_new(value: f64) -> PricingResult<Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(PricingError::InvalidAmount(value.to_string()))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
