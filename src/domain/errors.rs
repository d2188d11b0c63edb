use derive_more::Display;
use wasm_bindgen::JsValue;

/// Errors surfaced by the pricing widget.
///
/// The `Unknown*` variants are contract violations: the UI layer handed over
/// a value outside the enumerated set, or a price that is negative or not
/// finite. They are never defaulted away, since a silent fallback would show
/// the wrong price.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PricingError {
    #[display(fmt = "Unknown plan id: '{}'", _0)]
    UnknownPlan(String),
    #[display(fmt = "Unknown billing cycle: '{}'", _0)]
    UnknownBillingCycle(String),
    #[display(fmt = "Unknown currency code: '{}'", _0)]
    UnknownCurrency(String),
    #[display(fmt = "Invalid USD amount: {}", _0)]
    InvalidAmount(String),
    #[display(fmt = "Element not found: {}", _0)]
    ElementNotFound(String),
    #[display(fmt = "Browser API error: {}", _0)]
    BrowserApi(String),
    #[display(fmt = "Invalid widget config: {}", _0)]
    InvalidConfig(String),
}

impl PricingError {
    /// True for enumerated-input violations (programming defects in the wiring).
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::UnknownPlan(_)
                | Self::UnknownBillingCycle(_)
                | Self::UnknownCurrency(_)
                | Self::InvalidAmount(_)
        )
    }

    /// Wrap a raw `JsValue` failure coming back from `web-sys`.
    pub fn browser(context: &str, err: JsValue) -> Self {
        let detail = err.as_string().unwrap_or_else(|| format!("{:?}", err));
        Self::BrowserApi(format!("{}: {}", context, detail))
    }
}

impl std::error::Error for PricingError {}

impl From<PricingError> for JsValue {
    fn from(error: PricingError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

impl From<serde_json::Error> for PricingError {
    fn from(error: serde_json::Error) -> Self {
        PricingError::InvalidConfig(error.to_string())
    }
}

pub type PricingResult<T> = Result<T, PricingError>;
