use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, LogLevel, set_min_level};

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;
pub mod event_utils;

pub use application::{PresenterState, PricingPresenter, RenderAdapter, RenderModel};
pub use domain::errors::{PricingError, PricingResult};
pub use domain::pricing::{BillingCycle, CurrencyCode, FormattedPrice, PlanId};

/// Module start: panic hook, console logger, browser clock.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    set_min_level(if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info });
    domain::logging::init_logger(Box::new(infrastructure::ConsoleLogger::new()));
    domain::logging::init_time_provider(Box::new(infrastructure::BrowserTimeProvider::new()));

    log_info!(LogComponent::Presentation("Initialize"), "Pricing widget module initialized");
}
