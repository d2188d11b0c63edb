use std::cell::RefCell;
use std::rc::Rc;

use pricing_widget_wasm::application::{PresenterState, PricingPresenter, RenderAdapter, RenderModel};
use pricing_widget_wasm::domain::errors::{PricingError, PricingResult};
use pricing_widget_wasm::domain::pricing::{BillingCycle, CurrencyCode, FormattedPrice, PlanId};
use quickcheck_macros::quickcheck;
use strum::IntoEnumIterator;

/// Records every model handed to the UI.
#[derive(Default, Clone)]
struct Recorder {
    applied: Rc<RefCell<Vec<RenderModel>>>,
}

impl RenderAdapter for Recorder {
    fn apply(&mut self, model: &RenderModel) -> PricingResult<()> {
        self.applied.borrow_mut().push(model.clone());
        Ok(())
    }
}

struct Broken;

impl RenderAdapter for Broken {
    fn apply(&mut self, _model: &RenderModel) -> PricingResult<()> {
        Err(PricingError::ElementNotFound("#priceAmount".to_string()))
    }
}

fn plan(i: u8) -> PlanId {
    PlanId::iter().nth(i as usize % 3).unwrap()
}

fn cycle(i: u8) -> BillingCycle {
    BillingCycle::iter().nth(i as usize % 2).unwrap()
}

fn currency(i: u8) -> CurrencyCode {
    CurrencyCode::iter().nth(i as usize % 4).unwrap()
}

#[test]
fn starts_on_basic_monthly_usd() {
    let presenter = PricingPresenter::new(Recorder::default());
    assert_eq!(
        presenter.state(),
        PresenterState {
            selected_plan: PlanId::Basic,
            selected_billing: BillingCycle::Monthly,
            selected_currency: CurrencyCode::Usd,
        }
    );
}

#[test]
fn switching_to_kes_changes_price_only() {
    let recorder = Recorder::default();
    let mut presenter = PricingPresenter::new(recorder.clone());
    let before = presenter.render().unwrap();

    let after = presenter.select_currency(CurrencyCode::Kes).unwrap();

    assert_eq!(
        after.price_display,
        FormattedPrice::Amount {
            symbol: "KSh",
            is_long_symbol: true,
            amount_text: "12,672".to_string(),
        }
    );
    assert_eq!(after.description, before.description);
    assert_eq!(after.features, before.features);
    assert_eq!(recorder.applied.borrow().len(), 2);
    assert_eq!(recorder.applied.borrow().last(), Some(&after));
}

#[test]
fn enterprise_renders_custom_in_every_cycle() {
    let mut presenter = PricingPresenter::new(Recorder::default());
    let monthly = presenter.select_plan(PlanId::Enterprise).unwrap();
    let yearly = presenter.select_billing(BillingCycle::Yearly).unwrap();
    assert!(monthly.price_display.is_custom());
    assert_eq!(monthly, yearly);
}

#[test]
fn reselecting_the_same_plan_still_renders() {
    let recorder = Recorder::default();
    let mut presenter = PricingPresenter::new(recorder.clone());
    presenter.select_plan(PlanId::Basic).unwrap();
    presenter.select_plan(PlanId::Basic).unwrap();
    assert_eq!(recorder.applied.borrow().len(), 2);
}

#[test]
fn yearly_business_in_usd() {
    let mut presenter = PricingPresenter::new(Recorder::default());
    presenter.select_plan(PlanId::Business).unwrap();
    let model = presenter.select_billing(BillingCycle::Yearly).unwrap();
    // 499 * 12 * 0.8 = 4790.4
    assert!(matches!(
        model.price_display,
        FormattedPrice::Amount { ref amount_text, .. } if amount_text == "4790"
    ));
}

#[test]
fn adapter_failure_propagates_after_state_change() {
    let mut presenter = PricingPresenter::new(Broken);
    let err = presenter.select_plan(PlanId::Business).unwrap_err();
    assert_eq!(err, PricingError::ElementNotFound("#priceAmount".to_string()));
    assert!(!err.is_contract_violation());
    assert_eq!(presenter.state().selected_plan, PlanId::Business);
}

#[test]
fn render_model_snapshot() {
    let presenter = PricingPresenter::with_state(
        Recorder::default(),
        PresenterState::new(PlanId::Enterprise, BillingCycle::Yearly, CurrencyCode::Ngn),
    );
    insta::assert_json_snapshot!(presenter.render_model(), @r###"
    {
      "priceDisplay": {
        "isCustom": true,
        "display": "Custom"
      },
      "description": "For Banks, MFIs and Telcos &  National Fintechs.",
      "features": [
        "All Business features",
        "AI/ML fraud detection (custom models per institution)",
        "Dedicated region-aware infrastructure",
        "On-prem or VPC deployments",
        "Custom risk rules and data residency controls",
        "Market expansion tools (multi-country, regulatory compliance)",
        "Dedicated account manager & support",
        "Compliance & security reviews (KYC/KYB/PCI)"
      ]
    }
    "###);
}

#[quickcheck]
fn render_is_idempotent(p: u8, b: u8, c: u8) -> bool {
    let mut presenter = PricingPresenter::with_state(
        Recorder::default(),
        PresenterState::new(plan(p), cycle(b), currency(c)),
    );
    let first = presenter.render().unwrap();
    let second = presenter.render().unwrap();
    first == second && first == presenter.render_model()
}

#[quickcheck]
fn plan_round_trip_restores_model(p: u8, b: u8, c: u8, other: u8) -> bool {
    let start = PresenterState::new(plan(p), cycle(b), currency(c));
    let mut presenter = PricingPresenter::with_state(Recorder::default(), start);
    let original = presenter.render().unwrap();
    presenter.select_plan(plan(other)).unwrap();
    let restored = presenter.select_plan(start.selected_plan).unwrap();
    original == restored && presenter.state() == start
}

#[quickcheck]
fn features_match_catalog_order(p: u8, b: u8, c: u8) -> bool {
    use pricing_widget_wasm::domain::pricing::PLAN_CATALOG;
    let state = PresenterState::new(plan(p), cycle(b), currency(c));
    let presenter = PricingPresenter::with_state(Recorder::default(), state);
    presenter.render_model().features == PLAN_CATALOG.get(state.selected_plan).features
}
