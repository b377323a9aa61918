//! Seed configuration loading.
//!
//! Rates and allowance classes arrive as YAML files and are installed into
//! the store at startup.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AllowanceEntry, AllowancesConfig, RatesConfig};
