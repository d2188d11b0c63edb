pub mod config;
pub mod controls;
pub mod dom;
pub mod page_effects;
pub mod services;

pub use config::{PageEffectsConfig, WidgetConfig};
pub use dom::DomPricingAdapter;
pub use services::{BrowserTimeProvider, ConsoleLogger};
