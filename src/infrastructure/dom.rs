use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::application::{RenderAdapter, RenderModel};
use crate::domain::{
    errors::{PricingError, PricingResult},
    logging::{LogComponent, get_logger},
    pricing::FormattedPrice,
};

pub fn document() -> PricingResult<Document> {
    web_sys::window()
        .ok_or_else(|| PricingError::BrowserApi("Window not available".to_string()))?
        .document()
        .ok_or_else(|| PricingError::BrowserApi("Document not available".to_string()))
}

pub fn element_by_id(document: &Document, id: &str) -> PricingResult<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PricingError::ElementNotFound(format!("#{}", id)))
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> PricingResult<Vec<Element>> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| PricingError::browser(&format!("querySelectorAll('{}')", selector), e))?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_one(document: &Document, selector: &str) -> PricingResult<Option<Element>> {
    document
        .query_selector(selector)
        .map_err(|e| PricingError::browser(&format!("querySelector('{}')", selector), e))
}

pub fn query_html_element(document: &Document, selector: &str) -> PricingResult<Option<HtmlElement>> {
    Ok(query_one(document, selector)?.and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// Writes render models into the three pricing regions of the page.
pub struct DomPricingAdapter {
    document: Document,
    price_amount: Element,
    plan_description: Element,
    plan_features: Element,
}

impl DomPricingAdapter {
    pub fn new(
        document: Document,
        price_amount: Element,
        plan_description: Element,
        plan_features: Element,
    ) -> Self {
        Self { document, price_amount, plan_description, plan_features }
    }

    /// Look the three regions up by id; any missing one is an error.
    pub fn from_ids(price_id: &str, description_id: &str, features_id: &str) -> PricingResult<Self> {
        let document = document()?;
        let price_amount = element_by_id(&document, price_id)?;
        let plan_description = element_by_id(&document, description_id)?;
        let plan_features = element_by_id(&document, features_id)?;

        get_logger().debug(
            LogComponent::Infrastructure("DomPricingAdapter"),
            &format!("Bound pricing regions #{} #{} #{}", price_id, description_id, features_id),
        );

        Ok(Self::new(document, price_amount, plan_description, plan_features))
    }

    fn write_price(&self, price: &FormattedPrice) -> PricingResult<()> {
        match price {
            FormattedPrice::Custom { display } => {
                self.price_amount.set_text_content(Some(display));
            }
            FormattedPrice::Amount { symbol, amount_text, .. } => {
                self.price_amount.set_inner_html("");

                let symbol_span = self
                    .document
                    .create_element("span")
                    .map_err(|e| PricingError::browser("createElement(span)", e))?;
                if let Some(class) = price.symbol_class() {
                    symbol_span.set_class_name(class);
                }
                symbol_span.set_text_content(Some(symbol));

                let amount = self.document.create_text_node(amount_text);

                self.price_amount
                    .append_child(&symbol_span)
                    .map_err(|e| PricingError::browser("appendChild(symbol)", e))?;
                self.price_amount
                    .append_child(&amount)
                    .map_err(|e| PricingError::browser("appendChild(amount)", e))?;
            }
        }
        Ok(())
    }

    fn write_features(&self, features: &[&'static str]) -> PricingResult<()> {
        self.plan_features.set_inner_html("");
        for feature in features {
            let item = self
                .document
                .create_element("li")
                .map_err(|e| PricingError::browser("createElement(li)", e))?;
            item.set_text_content(Some(feature));
            self.plan_features
                .append_child(&item)
                .map_err(|e| PricingError::browser("appendChild(li)", e))?;
        }
        Ok(())
    }
}

impl RenderAdapter for DomPricingAdapter {
    fn apply(&mut self, model: &RenderModel) -> PricingResult<()> {
        self.write_price(&model.price_display)?;
        self.plan_description.set_text_content(Some(model.description));
        self.write_features(&model.features)
    }
}
