//! Pricing aggregate: plan catalog, display currencies and the price formatter.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
