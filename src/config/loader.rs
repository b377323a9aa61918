//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the staffing
//! seed configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{StaffingError, StaffingResult};
use crate::models::{AllowanceClass, RateTable};
use crate::store::StaffingStore;

use super::types::{AllowancesConfig, RatesConfig};

/// Loads and provides access to the staffing seed configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/defaults/
/// ├── rates.yaml       # Daily rates per staffing category
/// └── allowances.yaml  # Allowance classes
/// ```
///
/// # Example
///
/// ```no_run
/// use camp_staffing::config::ConfigLoader;
/// use camp_staffing::store::StaffingStore;
///
/// let loader = ConfigLoader::load("./config/defaults").unwrap();
/// let mut store = StaffingStore::new();
/// loader.seed_store(&mut store).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rates: RatesConfig,
    allowances: AllowancesConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`StaffingError::ConfigNotFound`] when a required file is
    /// missing and [`StaffingError::ConfigParse`] when a file contains
    /// invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> StaffingResult<Self> {
        let path = path.as_ref();

        let rates = Self::load_yaml::<RatesConfig>(&path.join("rates.yaml"))?;
        let allowances = Self::load_yaml::<AllowancesConfig>(&path.join("allowances.yaml"))?;

        Ok(Self { rates, allowances })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> StaffingResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| StaffingError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| StaffingError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Converts the configured rates into a [`RateTable`].
    pub fn rate_table(&self) -> RateTable {
        RateTable {
            updated_at: self.rates.updated_at,
            senior_counselor: self.rates.senior_counselor,
            counselor: self.rates.counselor,
            monitor: self.rates.monitor,
            junior_monitor: self.rates.junior_monitor,
            intern: self.rates.intern,
            nurse: self.rates.nurse,
            trainee_nurse: self.rates.trainee_nurse,
            photographer_1: self.rates.photographer_1,
            photographer_2: self.rates.photographer_2,
            day_use: self.rates.day_use,
        }
    }

    /// The configured allowance classes, in file order.
    pub fn allowance_classes(&self) -> Vec<AllowanceClass> {
        self.allowances
            .classes
            .iter()
            .map(|entry| AllowanceClass::new(entry.name.clone(), entry.amount))
            .collect()
    }

    /// Seeds a store with the configured rate table and allowance classes.
    ///
    /// # Errors
    ///
    /// Returns [`StaffingError::Conflict`] when the configuration contains
    /// duplicate allowance class names.
    pub fn seed_store(&self, store: &mut StaffingStore) -> StaffingResult<()> {
        store.push_rate_table(self.rate_table());
        for class in self.allowance_classes() {
            store.insert_allowance_class(class)?;
        }
        Ok(())
    }
}
