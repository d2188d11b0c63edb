use once_cell::sync::Lazy;
use strum::IntoEnumIterator;

use crate::domain::errors::PricingResult;

use super::value_objects::{BillingCycle, PlanId, UsdAmount};

/// Yearly commitments pay 12 months at a flat 20% discount.
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const YEARLY_DISCOUNT_FACTOR: f64 = 0.8;

/// Price per billing cycle. `None` means custom pricing ("contact us").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanPrices {
    pub monthly: Option<UsdAmount>,
    pub yearly: Option<UsdAmount>,
}

impl PlanPrices {
    /// Paid tier: the yearly price is derived once from the monthly one.
    pub fn from_monthly(monthly: f64) -> PricingResult<Self> {
        Ok(Self {
            monthly: Some(UsdAmount::try_new(monthly)?),
            yearly: Some(UsdAmount::try_new(monthly * MONTHS_PER_YEAR * YEARLY_DISCOUNT_FACTOR)?),
        })
    }

    /// Compiled-in catalog prices; only used in `const` items, so a bad
    /// literal fails the build.
    const fn listed(monthly: f64) -> Self {
        let yearly = monthly * MONTHS_PER_YEAR * YEARLY_DISCOUNT_FACTOR;
        assert!(monthly.is_finite() && monthly >= 0.0 && yearly.is_finite());
        Self { monthly: Some(UsdAmount(monthly)), yearly: Some(UsdAmount(yearly)) }
    }

    pub fn custom() -> Self {
        Self { monthly: None, yearly: None }
    }

    pub fn for_cycle(&self, cycle: BillingCycle) -> Option<UsdAmount> {
        match cycle {
            BillingCycle::Monthly => self.monthly,
            BillingCycle::Yearly => self.yearly,
        }
    }
}

const BASIC_PRICES: PlanPrices = PlanPrices::listed(99.0);
const BUSINESS_PRICES: PlanPrices = PlanPrices::listed(499.0);

/// Entity - one plan tier as shown on the page
#[derive(Debug, Clone, PartialEq)]
pub struct PlanCatalogEntry {
    pub id: PlanId,
    pub description: &'static str,
    /// Rendered as a list, in this order.
    pub features: &'static [&'static str],
    pub price_usd: PlanPrices,
}

/// Aggregate - the three plan tiers, immutable after construction.
///
/// One field per `PlanId` so lookups are total.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanCatalog {
    basic: PlanCatalogEntry,
    business: PlanCatalogEntry,
    enterprise: PlanCatalogEntry,
}

impl PlanCatalog {
    pub fn standard() -> Self {
        Self {
            basic: PlanCatalogEntry {
                id: PlanId::Basic,
                description: "Perfect for For SACCOs & Early-stage fintechs.",
                features: &[
                    "Predefined static fraud rules (plug-and-play)",
                    "Shared intelligence (basic alerts from network)",
                    "Anomaly detection (threshold-based)",
                    "Upload CSV/Excel OR basic API access",
                    "Basic fraud detection across our network",
                    "5000 monthly transaction limit",
                    "Dashboard for tracking payments",
                    "Standard support via email",
                ],
                price_usd: BASIC_PRICES,
            },
            business: PlanCatalogEntry {
                id: PlanId::Business,
                description: "Built For MFI, scaling fintechs, Saccos & mid-size banks",
                features: &[
                    "All Lite Features",
                    "Unlimited payment methods and channels",
                    "Advanced fraud detection with shared intelligence",
                    "API-first integration with core banking/payment systems",
                    "Fraud scoring engine (dynamic risk scores)",
                    "Team access and roles with audit logs",
                    "Alerts via SMS, webhook, email",
                    "Priority support with SLA",
                ],
                price_usd: BUSINESS_PRICES,
            },
            enterprise: PlanCatalogEntry {
                id: PlanId::Enterprise,
                description: "For Banks, MFIs and Telcos &  National Fintechs.",
                features: &[
                    "All Business features",
                    "AI/ML fraud detection (custom models per institution)",
                    "Dedicated region-aware infrastructure",
                    "On-prem or VPC deployments",
                    "Custom risk rules and data residency controls",
                    "Market expansion tools (multi-country, regulatory compliance)",
                    "Dedicated account manager & support",
                    "Compliance & security reviews (KYC/KYB/PCI)",
                ],
                price_usd: PlanPrices::custom(),
            },
        }
    }

    pub fn get(&self, id: PlanId) -> &PlanCatalogEntry {
        match id {
            PlanId::Basic => &self.basic,
            PlanId::Business => &self.business,
            PlanId::Enterprise => &self.enterprise,
        }
    }

    /// Entries in tab order.
    pub fn entries(&self) -> impl Iterator<Item = &PlanCatalogEntry> + '_ {
        PlanId::iter().map(move |id| self.get(id))
    }
}

/// Page-wide catalog, built on first use.
pub static PLAN_CATALOG: Lazy<PlanCatalog> = Lazy::new(PlanCatalog::standard);
