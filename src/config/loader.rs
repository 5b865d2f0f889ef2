//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::{ContributionsConfig, PayrollConfig, TaxTable, WorkSchedule};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates them for internal consistency before handing the configuration
/// to the engine.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/ph/
/// ├── schedule.yaml       # Work schedule and timekeeping policy
/// ├── contributions.yaml  # SSS, PhilHealth, and Pag-IBIG parameters
/// └── tax.yaml            # Annual withholding tax brackets
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ph").unwrap();
/// let schedule = loader.config().schedule();
/// println!("Overtime premium: {}x", schedule.overtime_multiplier);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/ph")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The loaded configuration fails consistency checks
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/ph")?;
    /// # Ok::<(), payroll_engine::error::PayrollError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let schedule_path = path.join("schedule.yaml");
        let schedule = Self::load_yaml::<WorkSchedule>(&schedule_path)?;

        let contributions_path = path.join("contributions.yaml");
        let contributions = Self::load_yaml::<ContributionsConfig>(&contributions_path)?;

        let tax_path = path.join("tax.yaml");
        let tax = Self::load_yaml::<TaxTable>(&tax_path)?;

        let config = PayrollConfig::new(
            schedule,
            contributions.sss,
            contributions.philhealth,
            contributions.pagibig,
            tax,
        );

        config
            .validate()
            .map_err(|message| PayrollError::ConfigParseError {
                path: path.display().to_string(),
                message,
            })?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
