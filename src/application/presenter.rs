use serde::Serialize;

use crate::domain::{
    errors::PricingResult,
    logging::{LogComponent, LogLevel, get_logger},
    pricing::{
        BillingCycle, CurrencyCode, FormattedPrice, PlanId, PlanPriceResolver, PriceFormatter,
    },
};
use crate::log_debug;

/// Current selection on the pricing card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenterState {
    pub selected_plan: PlanId,
    pub selected_billing: BillingCycle,
    pub selected_currency: CurrencyCode,
}

impl PresenterState {
    pub fn new(plan: PlanId, billing: BillingCycle, currency: CurrencyCode) -> Self {
        Self { selected_plan: plan, selected_billing: billing, selected_currency: currency }
    }
}

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderModel {
    pub price_display: FormattedPrice,
    pub description: &'static str,
    /// Catalog order, never sorted or filtered.
    pub features: Vec<&'static str>,
}

/// Projects a `RenderModel` onto the UI (DOM, test recorder, ...).
pub trait RenderAdapter {
    fn apply(&mut self, model: &RenderModel) -> PricingResult<()>;
}

impl<A: RenderAdapter + ?Sized> RenderAdapter for Box<A> {
    fn apply(&mut self, model: &RenderModel) -> PricingResult<()> {
        (**self).apply(model)
    }
}

/// Orchestrator: owns the selection, re-renders after every change.
///
/// Each `select_*` call writes one field and renders before returning, so a
/// render never observes a half-applied update.
pub struct PricingPresenter<A: RenderAdapter> {
    state: PresenterState,
    resolver: PlanPriceResolver,
    formatter: PriceFormatter,
    adapter: A,
}

impl<A: RenderAdapter> PricingPresenter<A> {
    pub fn new(adapter: A) -> Self {
        Self::with_state(adapter, PresenterState::default())
    }

    pub fn with_state(adapter: A, state: PresenterState) -> Self {
        get_logger().info(
            LogComponent::Application("PricingPresenter"),
            &format!(
                "Creating presenter: plan={} billing={} currency={}",
                state.selected_plan, state.selected_billing, state.selected_currency
            ),
        );

        Self {
            state,
            resolver: PlanPriceResolver::default(),
            formatter: PriceFormatter::new(),
            adapter,
        }
    }

    pub fn state(&self) -> PresenterState {
        self.state
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn select_plan(&mut self, plan: PlanId) -> PricingResult<RenderModel> {
        log_debug!(LogComponent::Application("PricingPresenter"), "select plan: {}", plan);
        self.state.selected_plan = plan;
        self.render()
    }

    pub fn select_billing(&mut self, cycle: BillingCycle) -> PricingResult<RenderModel> {
        log_debug!(LogComponent::Application("PricingPresenter"), "select billing: {}", cycle);
        self.state.selected_billing = cycle;
        self.render()
    }

    pub fn select_currency(&mut self, currency: CurrencyCode) -> PricingResult<RenderModel> {
        log_debug!(LogComponent::Application("PricingPresenter"), "select currency: {}", currency);
        self.state.selected_currency = currency;
        self.render()
    }

    /// Pure: the model for the current selection, without touching the adapter.
    pub fn render_model(&self) -> RenderModel {
        let entry = self.resolver.catalog().get(self.state.selected_plan);
        let amount = self.resolver.resolve(self.state.selected_plan, self.state.selected_billing);

        RenderModel {
            price_display: self.formatter.format(amount, self.state.selected_currency),
            description: entry.description,
            features: entry.features.to_vec(),
        }
    }

    /// Build the model and hand it to the adapter.
    pub fn render(&mut self) -> PricingResult<RenderModel> {
        let model = self.render_model();

        if let Ok(payload) = serde_json::to_string(&self.state) {
            get_logger().log_with_metadata(
                LogLevel::Debug,
                LogComponent::Application("PricingPresenter"),
                "render",
                &payload,
            );
        }

        self.adapter.apply(&model)?;
        Ok(model)
    }
}
