use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::entities::{PLAN_CATALOG, PlanCatalog};
use super::value_objects::{BillingCycle, CurrencyCode, PlanId, UsdAmount};

/// Placeholder shown for plans without a numeric price.
pub const CUSTOM_PRICE_LABEL: &str = "Custom";

/// Display-ready price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedPrice {
    Custom {
        display: &'static str,
    },
    Amount {
        symbol: &'static str,
        /// Multi-character symbols ("UGX", "KSh") get their own styling.
        is_long_symbol: bool,
        amount_text: String,
    },
}

impl FormattedPrice {
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }

    /// CSS classes for the symbol span of a numeric price.
    pub fn symbol_class(&self) -> Option<&'static str> {
        match self {
            Self::Custom { .. } => None,
            Self::Amount { is_long_symbol: true, .. } => Some("currency long"),
            Self::Amount { is_long_symbol: false, .. } => Some("currency"),
        }
    }
}

// Shape consumed by page scripts: `{isCustom, display}` or
// `{isCustom, symbol, isLongSymbol, amountText}`.
impl Serialize for FormattedPrice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Custom { display } => {
                let mut state = serializer.serialize_struct("FormattedPrice", 2)?;
                state.serialize_field("isCustom", &true)?;
                state.serialize_field("display", display)?;
                state.end()
            }
            Self::Amount { symbol, is_long_symbol, amount_text } => {
                let mut state = serializer.serialize_struct("FormattedPrice", 4)?;
                state.serialize_field("isCustom", &false)?;
                state.serialize_field("symbol", symbol)?;
                state.serialize_field("isLongSymbol", is_long_symbol)?;
                state.serialize_field("amountText", amount_text)?;
                state.end()
            }
        }
    }
}

/// Render an integer with comma thousands separators: `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Domain service: USD list price + currency -> display price.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceFormatter;

impl PriceFormatter {
    pub fn new() -> Self {
        Self
    }

    /// `None` short-circuits to the custom label before any arithmetic.
    pub fn format(&self, amount: Option<UsdAmount>, currency: CurrencyCode) -> FormattedPrice {
        let Some(amount) = amount else {
            return FormattedPrice::Custom { display: CUSTOM_PRICE_LABEL };
        };

        let symbol = currency.symbol();
        let is_long_symbol = symbol.chars().count() > 1;

        let amount_text = match currency {
            // USD keeps a plain digit string, no grouping
            CurrencyCode::Usd => format!("{}", amount.value().round() as u64),
            other => {
                let converted = (amount.value() * other.display_rate()).round() as u64;
                group_thousands(converted)
            }
        };

        FormattedPrice::Amount { symbol, is_long_symbol, amount_text }
    }
}

/// Domain service: plan + billing cycle -> USD list price.
#[derive(Debug, Clone, Copy)]
pub struct PlanPriceResolver {
    catalog: &'static PlanCatalog,
}

impl PlanPriceResolver {
    pub fn new(catalog: &'static PlanCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'static PlanCatalog {
        self.catalog
    }

    pub fn resolve(&self, plan: PlanId, cycle: BillingCycle) -> Option<UsdAmount> {
        self.catalog.get(plan).price_usd.for_cycle(cycle)
    }
}

impl Default for PlanPriceResolver {
    fn default() -> Self {
        Self::new(&PLAN_CATALOG)
    }
}

#[cfg(test)]
mod tests {
    use super::group_thousands;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(376_200), "376,200");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
