//! Calibration store: built-in defaults plus an optional TOML override.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::calibration::{CalibrationParameters, SteadyState};
use crate::error::CalibrationError;

/// Partial calibration override as read from a TOML file.
///
/// Any subset of the structural parameters and steady-state levels may be
/// supplied; unspecified fields keep their documented defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CalibrationOverride {
    discount_factor: Option<f64>,
    risk_aversion: Option<f64>,
    inverse_frisch: Option<f64>,
    import_share: Option<f64>,
    capital_share: Option<f64>,
    calvo_stickiness: Option<f64>,
    taylor_inflation: Option<f64>,
    taylor_output_gap: Option<f64>,
    depreciation: Option<f64>,
    substitution_elasticity: Option<f64>,
    goods_elasticity: Option<f64>,
    bank_margin: Option<f64>,
    reserve_ratio: Option<f64>,
    spending_persistence: Option<f64>,
    inflation_target: Option<f64>,
    steady_state: Option<SteadyStateOverride>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SteadyStateOverride {
    output: Option<f64>,
    consumption: Option<f64>,
    investment: Option<f64>,
    inflation: Option<f64>,
    interest_rate: Option<f64>,
    real_wage: Option<f64>,
    labour: Option<f64>,
    net_exports: Option<f64>,
    government_spending: Option<f64>,
    tax_revenue: Option<f64>,
    public_debt: Option<f64>,
    credit: Option<f64>,
    bank_spread: Option<f64>,
    real_exchange_rate: Option<f64>,
    output_gap: Option<f64>,
}

impl CalibrationOverride {
    fn apply(self, mut params: CalibrationParameters) -> CalibrationParameters {
        params.discount_factor = self.discount_factor.unwrap_or(params.discount_factor);
        params.risk_aversion = self.risk_aversion.unwrap_or(params.risk_aversion);
        params.inverse_frisch = self.inverse_frisch.unwrap_or(params.inverse_frisch);
        params.import_share = self.import_share.unwrap_or(params.import_share);
        params.capital_share = self.capital_share.unwrap_or(params.capital_share);
        params.calvo_stickiness = self.calvo_stickiness.unwrap_or(params.calvo_stickiness);
        params.taylor_inflation = self.taylor_inflation.unwrap_or(params.taylor_inflation);
        params.taylor_output_gap = self.taylor_output_gap.unwrap_or(params.taylor_output_gap);
        params.depreciation = self.depreciation.unwrap_or(params.depreciation);
        params.substitution_elasticity = self
            .substitution_elasticity
            .unwrap_or(params.substitution_elasticity);
        params.goods_elasticity = self.goods_elasticity.unwrap_or(params.goods_elasticity);
        params.bank_margin = self.bank_margin.unwrap_or(params.bank_margin);
        params.reserve_ratio = self.reserve_ratio.unwrap_or(params.reserve_ratio);
        params.spending_persistence = self
            .spending_persistence
            .unwrap_or(params.spending_persistence);
        params.inflation_target = self.inflation_target.unwrap_or(params.inflation_target);
        if let Some(ss) = self.steady_state {
            params.steady_state = ss.apply(params.steady_state);
        }
        params
    }
}

impl SteadyStateOverride {
    fn apply(self, mut ss: SteadyState) -> SteadyState {
        ss.output = self.output.unwrap_or(ss.output);
        ss.consumption = self.consumption.unwrap_or(ss.consumption);
        ss.investment = self.investment.unwrap_or(ss.investment);
        ss.inflation = self.inflation.unwrap_or(ss.inflation);
        ss.interest_rate = self.interest_rate.unwrap_or(ss.interest_rate);
        ss.real_wage = self.real_wage.unwrap_or(ss.real_wage);
        ss.labour = self.labour.unwrap_or(ss.labour);
        ss.net_exports = self.net_exports.unwrap_or(ss.net_exports);
        ss.government_spending = self.government_spending.unwrap_or(ss.government_spending);
        ss.tax_revenue = self.tax_revenue.unwrap_or(ss.tax_revenue);
        ss.public_debt = self.public_debt.unwrap_or(ss.public_debt);
        ss.credit = self.credit.unwrap_or(ss.credit);
        ss.bank_spread = self.bank_spread.unwrap_or(ss.bank_spread);
        ss.real_exchange_rate = self.real_exchange_rate.unwrap_or(ss.real_exchange_rate);
        ss.output_gap = self.output_gap.unwrap_or(ss.output_gap);
        ss
    }
}

/// Read-only source of [`CalibrationParameters`].
///
/// The store is initialised once at process start; every simulation run
/// reads its own parameter snapshot and the store performs no further IO.
pub struct CalibrationStore;

impl CalibrationStore {
    /// Load calibration, falling back to defaults on any override failure.
    ///
    /// With `path = None` the documented defaults are returned directly.
    /// With a path, the override is read, merged over the defaults and
    /// validated; an unreadable, malformed or invalid override is surfaced
    /// as a warning and the defaults are used instead. The run proceeds;
    /// this is the one documented degradation in the system.
    pub fn load(path: Option<&Path>) -> CalibrationParameters {
        match path {
            None => CalibrationParameters::default(),
            Some(path) => match Self::try_load(path) {
                Ok(params) => {
                    info!(path = %path.display(), "calibration override applied");
                    params
                }
                Err(err) => {
                    warn!(%err, "calibration override rejected, using defaults");
                    CalibrationParameters::default()
                }
            },
        }
    }

    /// Load and validate a calibration override, propagating failures.
    pub fn try_load(path: &Path) -> Result<CalibrationParameters, CalibrationError> {
        let text = fs::read_to_string(path).map_err(|err| CalibrationError::ConfigurationLoad {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        let overrides: CalibrationOverride =
            toml::from_str(&text).map_err(|err| CalibrationError::ConfigurationLoad {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?;
        let params = overrides.apply(CalibrationParameters::default());
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_override(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_without_path_returns_defaults() {
        let params = CalibrationStore::load(None);
        assert_eq!(params, CalibrationParameters::default());
    }

    #[test]
    fn test_try_load_partial_override_merges_over_defaults() {
        let file = write_override(
            "discount_factor = 0.98\n\
             taylor_inflation = 1.8\n\n\
             [steady_state]\n\
             public_debt = 52.0\n",
        );
        let params = CalibrationStore::try_load(file.path()).unwrap();
        assert_eq!(params.discount_factor, 0.98);
        assert_eq!(params.taylor_inflation, 1.8);
        assert_eq!(params.steady_state.public_debt, 52.0);
        // untouched fields keep their defaults
        assert_eq!(params.risk_aversion, 2.0);
        assert_eq!(params.steady_state.output, 100.0);
    }

    #[test]
    fn test_try_load_missing_file_is_configuration_load_error() {
        let err = CalibrationStore::try_load(Path::new("/nonexistent/calibration.toml"))
            .unwrap_err();
        assert!(matches!(err, CalibrationError::ConfigurationLoad { .. }));
    }

    #[test]
    fn test_try_load_malformed_toml_is_configuration_load_error() {
        let file = write_override("discount_factor = [not a number");
        let err = CalibrationStore::try_load(file.path()).unwrap_err();
        assert!(matches!(err, CalibrationError::ConfigurationLoad { .. }));
    }

    #[test]
    fn test_try_load_unknown_key_rejected() {
        let file = write_override("frisch_elasticity = 1.5\n");
        assert!(CalibrationStore::try_load(file.path()).is_err());
    }

    #[test]
    fn test_try_load_invalid_value_is_parameter_error() {
        let file = write_override("discount_factor = 1.5\n");
        let err = CalibrationStore::try_load(file.path()).unwrap_err();
        assert!(matches!(err, CalibrationError::InvalidParameter { .. }));
    }

    #[test]
    fn test_load_falls_back_on_bad_override() {
        let file = write_override("discount_factor = 1.5\n");
        let params = CalibrationStore::load(Some(file.path()));
        assert_eq!(params, CalibrationParameters::default());
    }
}
