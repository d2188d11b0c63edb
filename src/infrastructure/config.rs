use serde::Deserialize;

use crate::application::PresenterState;
use crate::domain::{
    errors::PricingResult,
    logging::LogLevel,
    pricing::{BillingCycle, CurrencyCode, PlanId},
};

/// DOM hooks and thresholds for mounting the widget on a page.
///
/// Every field has a default matching the stock landing page markup, so a
/// config JSON only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub price_amount_id: String,
    pub plan_description_id: String,
    pub plan_features_id: String,
    pub plan_tab_selector: String,
    pub billing_button_selector: String,
    pub currency_select_id: String,

    pub initial_plan: PlanId,
    pub initial_billing: BillingCycle,
    pub initial_currency: CurrencyCode,

    pub log_level: LogLevel,

    pub page: PageEffectsConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            price_amount_id: "priceAmount".to_string(),
            plan_description_id: "planDesc".to_string(),
            plan_features_id: "planFeatures".to_string(),
            plan_tab_selector: ".plan-tab".to_string(),
            billing_button_selector: ".billing-btn".to_string(),
            currency_select_id: "currency".to_string(),
            initial_plan: PlanId::default(),
            initial_billing: BillingCycle::default(),
            initial_currency: CurrencyCode::default(),
            log_level: LogLevel::Info,
            page: PageEffectsConfig::default(),
        }
    }
}

impl WidgetConfig {
    /// `None` or an empty string yields the defaults.
    pub fn from_json(json: Option<&str>) -> PricingResult<Self> {
        match json.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(raw) => Ok(serde_json::from_str(raw)?),
        }
    }

    pub fn initial_state(&self) -> PresenterState {
        PresenterState::new(self.initial_plan, self.initial_billing, self.initial_currency)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageEffectsConfig {
    pub animated_selector: String,
    pub observer_threshold: f64,
    pub observer_root_margin: String,
    pub header_selector: String,
    pub header_scroll_threshold: f64,
    pub mobile_menu_button_selector: String,
    pub nav_links_selector: String,
    pub back_to_top_selector: String,
    pub back_to_top_threshold: f64,
    pub copyright_year_id: String,
}

impl Default for PageEffectsConfig {
    fn default() -> Self {
        Self {
            animated_selector: ".feature-card, .problem-card, .step, .diff-card, .audience-card"
                .to_string(),
            observer_threshold: 0.1,
            observer_root_margin: "0px 0px -100px 0px".to_string(),
            header_selector: "header".to_string(),
            header_scroll_threshold: 100.0,
            mobile_menu_button_selector: ".mobile-menu-btn".to_string(),
            nav_links_selector: ".nav-links".to_string(),
            back_to_top_selector: ".back-to-top".to_string(),
            back_to_top_threshold: 300.0,
            copyright_year_id: "copyrightYear".to_string(),
        }
    }
}
