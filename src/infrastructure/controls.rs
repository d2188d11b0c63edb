use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlSelectElement};

use crate::application::{PricingPresenter, RenderAdapter, RenderModel};
use crate::domain::{
    errors::{PricingError, PricingResult},
    logging::{LogComponent, get_logger},
    pricing::{BillingCycle, CurrencyCode, PlanId},
};
use crate::infrastructure::config::WidgetConfig;
use crate::infrastructure::dom::{element_by_id, query_all};
use crate::{log_error, log_warn};

pub type SharedPresenter<A> = Rc<RefCell<PricingPresenter<A>>>;

/// Mark `active` as the only element of its group carrying the `active` class.
pub fn set_active_in_group(group: &[Element], active: &Element) {
    for el in group {
        let _ = el.class_list().remove_1("active");
    }
    let _ = active.class_list().add_1("active");
}

fn report(result: PricingResult<RenderModel>) {
    match result {
        Err(err) if err.is_contract_violation() => {
            log_error!(LogComponent::Infrastructure("Controls"), "Contract violation: {}", err);
        }
        Err(err) => {
            log_warn!(LogComponent::Infrastructure("Controls"), "Render failed: {}", err);
        }
        Ok(_) => {}
    }
}

/// Read and validate a `data-*` attribute on a control.
fn data_value<T>(
    el: &Element,
    attribute: &str,
    parse: impl Fn(&str) -> PricingResult<T>,
) -> PricingResult<T> {
    let raw = el.get_attribute(attribute).unwrap_or_default();
    parse(&raw)
}

/// Plan tabs: `data-plan` values are validated when wiring, not on click.
/// The tab for `initial` starts out `active`.
pub fn bind_plan_tabs<A: RenderAdapter + 'static>(
    document: &Document,
    selector: &str,
    initial: PlanId,
    presenter: &SharedPresenter<A>,
) -> PricingResult<Vec<EventListener>> {
    let tabs = Rc::new(query_all(document, selector)?);
    let mut listeners = Vec::with_capacity(tabs.len());

    for tab in tabs.iter() {
        let plan = data_value(tab, "data-plan", PlanId::parse)?;
        if plan == initial {
            set_active_in_group(&tabs, tab);
        }
        let presenter = presenter.clone();
        let group = tabs.clone();
        let this = tab.clone();
        listeners.push(EventListener::new(tab, "click", move |_| {
            set_active_in_group(&group, &this);
            report(presenter.borrow_mut().select_plan(plan));
        }));
    }

    get_logger().debug(
        LogComponent::Infrastructure("Controls"),
        &format!("Bound {} plan tabs", listeners.len()),
    );
    Ok(listeners)
}

pub fn bind_billing_buttons<A: RenderAdapter + 'static>(
    document: &Document,
    selector: &str,
    initial: BillingCycle,
    presenter: &SharedPresenter<A>,
) -> PricingResult<Vec<EventListener>> {
    let buttons = Rc::new(query_all(document, selector)?);
    let mut listeners = Vec::with_capacity(buttons.len());

    for button in buttons.iter() {
        let cycle = data_value(button, "data-billing", BillingCycle::parse)?;
        if cycle == initial {
            set_active_in_group(&buttons, button);
        }
        let presenter = presenter.clone();
        let group = buttons.clone();
        let this = button.clone();
        listeners.push(EventListener::new(button, "click", move |_| {
            set_active_in_group(&group, &this);
            report(presenter.borrow_mut().select_billing(cycle));
        }));
    }

    Ok(listeners)
}

/// Currency `<select>`; optional on the page. Shows `initial` once bound.
pub fn bind_currency_select<A: RenderAdapter + 'static>(
    document: &Document,
    id: &str,
    initial: CurrencyCode,
    presenter: &SharedPresenter<A>,
) -> PricingResult<Option<EventListener>> {
    let Ok(element) = element_by_id(document, id) else {
        log_warn!(LogComponent::Infrastructure("Controls"), "Currency select #{} not found, currency stays fixed", id);
        return Ok(None);
    };
    let select = element
        .dyn_into::<HtmlSelectElement>()
        .map_err(|_| PricingError::ElementNotFound(format!("#{} is not a <select>", id)))?;
    select.set_value(initial.as_ref());

    let presenter = presenter.clone();
    let target = select.clone();
    let listener = EventListener::new(&select, "change", move |_| {
        let selected = CurrencyCode::parse(&target.value());
        report(selected.and_then(|code| presenter.borrow_mut().select_currency(code)));
    });
    Ok(Some(listener))
}

/// Listeners keeping the pricing controls alive; dropping them unbinds.
pub struct PricingControls {
    listeners: Vec<EventListener>,
}

impl PricingControls {
    pub fn bind<A: RenderAdapter + 'static>(
        document: &Document,
        config: &WidgetConfig,
        presenter: &SharedPresenter<A>,
    ) -> PricingResult<Self> {
        let initial = config.initial_state();
        let mut listeners =
            bind_plan_tabs(document, &config.plan_tab_selector, initial.selected_plan, presenter)?;
        listeners.extend(bind_billing_buttons(
            document,
            &config.billing_button_selector,
            initial.selected_billing,
            presenter,
        )?);
        listeners.extend(bind_currency_select(
            document,
            &config.currency_select_id,
            initial.selected_currency,
            presenter,
        )?);
        Ok(Self { listeners })
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
