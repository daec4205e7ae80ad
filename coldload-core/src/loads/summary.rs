//! Aggregation of component loads and the safety factor
//!
//! The design load is the sum of every component multiplied by a safety
//! factor, then converted to the units equipment is selected in.

use crate::constants::design::SAFETY_FACTOR_MAX;
use crate::constants::units::{kw_to_btu_per_hour, kw_to_tr, HOURS_PER_DAY};
use crate::errors::{check_finite, check_range, CalcResult};
use crate::traits::HeatLoad;

/// Total load before and after the safety factor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LoadSummary {
    /// Sum of all components (kW)
    pub total_before_safety_kw: f64,
    /// Multiplier applied to the sum
    pub safety_factor: f64,
    /// Margin added by the safety factor (kW)
    pub safety_load_kw: f64,
    /// Design load (kW)
    pub final_kw: f64,
    /// Design load (TR)
    pub final_tr: f64,
    /// Design load (BTU/h)
    pub final_btu_per_hour: f64,
    /// Energy removed per day at the design load (kWh/day)
    pub daily_energy_kwh: f64,
}

impl LoadSummary {
    /// Apply `safety_factor` to a summed load
    pub fn from_total(total_kw: f64, safety_factor: f64) -> CalcResult<Self> {
        let total = check_finite("total_load", total_kw)?;
        let factor = check_range("safety_factor", safety_factor, 1.0, SAFETY_FACTOR_MAX)?;

        let final_kw = total * factor;
        Ok(Self {
            total_before_safety_kw: total,
            safety_factor: factor,
            safety_load_kw: final_kw - total,
            final_kw,
            final_tr: kw_to_tr(final_kw),
            final_btu_per_hour: kw_to_btu_per_hour(final_kw),
            daily_energy_kwh: final_kw * HOURS_PER_DAY,
        })
    }

    /// Sum the components and apply `safety_factor`
    pub fn aggregate(components: &[&dyn HeatLoad], safety_factor: f64) -> CalcResult<Self> {
        let total: f64 = components.iter().map(|c| c.kw()).sum();
        Self::from_total(total, safety_factor)
    }

    /// Safety margin as a percentage
    pub fn safety_percentage(&self) -> f64 {
        (self.safety_factor - 1.0) * 100.0
    }

    /// Sum before safety (TR)
    pub fn total_before_safety_tr(&self) -> f64 {
        kw_to_tr(self.total_before_safety_kw)
    }

    /// Safety margin (TR)
    pub fn safety_load_tr(&self) -> f64 {
        kw_to_tr(self.safety_load_kw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn ten_percent_margin() {
        let s = LoadSummary::from_total(10.0, 1.1).unwrap();
        assert!(close(s.final_kw, 11.0));
        assert!(close(s.safety_load_kw, 1.0));
        assert!(close(s.final_tr, 11.0 / 3.517));
        assert!(close(s.final_btu_per_hour, 11.0 * 3412.0));
        assert!(close(s.daily_energy_kwh, 264.0));
        assert!(close(s.safety_percentage(), 10.0));
    }

    #[test]
    fn aggregate_sums_components() {
        let a = 1.5f64;
        let b = 2.5f64;
        let s = LoadSummary::aggregate(&[&a, &b], 1.05).unwrap();
        assert!(close(s.total_before_safety_kw, 4.0));
        assert!(close(s.final_kw, 4.2));
    }

    #[test]
    fn safety_factor_below_one_rejected() {
        let err = LoadSummary::from_total(10.0, 0.9).unwrap_err();
        assert!(matches!(err, CalcError::OutOfRange { field: "safety_factor", .. }));
    }

    #[test]
    fn nan_total_rejected() {
        assert!(LoadSummary::from_total(f64::NAN, 1.1).is_err());
    }
}
