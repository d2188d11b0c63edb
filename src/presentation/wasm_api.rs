use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::application::{PricingPresenter, RenderModel};
use crate::domain::{
    errors::{PricingError, PricingResult},
    logging::{LogComponent, get_logger, set_min_level},
    pricing::{BillingCycle, CurrencyCode, PlanId},
};
use crate::infrastructure::{
    DomPricingAdapter, WidgetConfig,
    controls::{PricingControls, SharedPresenter},
    dom,
    page_effects::PageEffects,
};

/// JS surface of the pricing card
/// Minimal logic: parse enumerated input, delegate to the presenter
#[wasm_bindgen]
pub struct PricingWidget {
    presenter: SharedPresenter<DomPricingAdapter>,
    controls: PricingControls,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))
}

fn model_json(result: PricingResult<RenderModel>) -> Result<String, JsValue> {
    let model = result.map_err(|err| {
        get_logger().error(LogComponent::Presentation("PricingWidget"), &err.to_string());
        JsValue::from(err)
    })?;
    to_json(&model)
}

impl PricingWidget {
    /// Bind the pricing regions and controls, then render the initial selection.
    pub fn mount(document: &Document, config: &WidgetConfig) -> PricingResult<Self> {
        let adapter = DomPricingAdapter::from_ids(
            &config.price_amount_id,
            &config.plan_description_id,
            &config.plan_features_id,
        )?;
        let presenter = Rc::new(RefCell::new(PricingPresenter::with_state(adapter, config.initial_state())));
        let controls = PricingControls::bind(document, config, &presenter)?;
        presenter.borrow_mut().render()?;

        get_logger().info(
            LogComponent::Presentation("PricingWidget"),
            &format!("Pricing widget mounted with {} control listeners", controls.listener_count()),
        );

        Ok(Self { presenter, controls })
    }
}

#[wasm_bindgen]
impl PricingWidget {
    /// Mount on the current document. `config_json` overrides `WidgetConfig` defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<PricingWidget, JsValue> {
        let config = WidgetConfig::from_json(config_json.as_deref())?;
        set_min_level(config.log_level);
        let document = dom::document()?;
        Ok(Self::mount(&document, &config)?)
    }

    #[wasm_bindgen(js_name = selectPlan)]
    pub fn select_plan(&self, plan: &str) -> Result<String, JsValue> {
        let plan = PlanId::parse(plan)?;
        model_json(self.presenter.borrow_mut().select_plan(plan))
    }

    #[wasm_bindgen(js_name = selectBilling)]
    pub fn select_billing(&self, cycle: &str) -> Result<String, JsValue> {
        let cycle = BillingCycle::parse(cycle)?;
        model_json(self.presenter.borrow_mut().select_billing(cycle))
    }

    #[wasm_bindgen(js_name = selectCurrency)]
    pub fn select_currency(&self, code: &str) -> Result<String, JsValue> {
        let code = CurrencyCode::parse(code)?;
        model_json(self.presenter.borrow_mut().select_currency(code))
    }

    /// Current RenderModel as JSON, without re-rendering.
    #[wasm_bindgen(js_name = renderModel)]
    pub fn render_model(&self) -> Result<String, JsValue> {
        to_json(&self.presenter.borrow().render_model())
    }

    #[wasm_bindgen(js_name = state)]
    pub fn state(&self) -> Result<String, JsValue> {
        to_json(&self.presenter.borrow().state())
    }

    #[wasm_bindgen(js_name = controlCount)]
    pub fn control_count(&self) -> usize {
        self.controls.listener_count()
    }
}

/// Everything `mountPage` installed, kept alive until `unmountPage`.
struct MountedPage {
    pricing: Option<PricingWidget>,
    effects: PageEffects,
}

thread_local! {
    static MOUNTED_PAGE: RefCell<Option<MountedPage>> = const { RefCell::new(None) };
}

fn mount(config: &WidgetConfig) -> PricingResult<MountedPage> {
    let document = dom::document()?;

    // The pricing card is optional: pages without it still get the chrome effects
    let pricing = if document.get_element_by_id(&config.price_amount_id).is_some() {
        Some(PricingWidget::mount(&document, config)?)
    } else {
        get_logger().info(
            LogComponent::Presentation("MountPage"),
            &format!("No #{} on this page, pricing widget skipped", config.price_amount_id),
        );
        None
    };

    let effects = PageEffects::install(&document, &config.page)?;
    Ok(MountedPage { pricing, effects })
}

/// Wire the whole landing page: pricing card plus page effects.
/// Calling it again replaces the previous mount.
#[wasm_bindgen(js_name = mountPage)]
pub fn mount_page(config_json: Option<String>) -> Result<(), JsValue> {
    let config = WidgetConfig::from_json(config_json.as_deref())?;
    set_min_level(config.log_level);

    unmount_page();
    let mounted = mount(&config).map_err(|err: PricingError| {
        get_logger().error(LogComponent::Presentation("MountPage"), &err.to_string());
        JsValue::from(err)
    })?;
    MOUNTED_PAGE.with(|slot| *slot.borrow_mut() = Some(mounted));
    Ok(())
}

#[wasm_bindgen(js_name = unmountPage)]
pub fn unmount_page() {
    let previous = MOUNTED_PAGE.with(|slot| slot.borrow_mut().take());
    if let Some(page) = previous {
        drop(page.pricing);
        page.effects.teardown();
        get_logger().debug(LogComponent::Presentation("MountPage"), "Page unmounted");
    }
}

/// RenderModel of the mounted pricing card, if any.
#[wasm_bindgen(js_name = mountedRenderModel)]
pub fn mounted_render_model() -> Result<Option<String>, JsValue> {
    MOUNTED_PAGE.with(|slot| match slot.borrow().as_ref().and_then(|page| page.pricing.as_ref()) {
        Some(widget) => widget.render_model().map(Some),
        None => Ok(None),
    })
}
