pub mod errors;
pub mod logging;
pub mod page;
pub mod pricing;
