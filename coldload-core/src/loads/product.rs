//! Product load: heat removed to bring incoming goods to storage temperature
//!
//! ## Three-stage cooling
//!
//! Freezing a product passes through up to three stages, each with its own
//! property:
//!
//! ```text
//!   t_in ──(cp_above)──► Tf ──(latent)──► Tf ──(cp_below)──► t_out
//!
//! Q1 = m · cp_above · (t_in - max(t_out, Tf))      if t_in  > Tf
//! Q2 = m · L                                       if t_in  > Tf > t_out
//! Q3 = m · cp_below · (min(t_in, Tf) - t_out)      if t_out < Tf
//! ```
//!
//! The stages never overlap in temperature, so a product that enters already
//! frozen only sees Q3 and a product that is only chilled only sees Q1.
//!
//! The energy (kJ) is removed over a pull-down or batch time and reported as
//! the equivalent steady load in kW.

use crate::catalog::ProductProperties;
use crate::constants::units::kj_over_hours_to_kw;
use crate::traits::HeatLoad;

/// Energy per cooling stage for one intake of product
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProductLoad {
    /// Product mass (kg)
    pub mass: f64,
    /// Time allowed to remove the heat (h)
    pub hours: f64,
    /// Sensible heat above freezing (kJ)
    pub sensible_above_kj: f64,
    /// Latent heat of freezing (kJ)
    pub latent_kj: f64,
    /// Sensible heat below freezing (kJ)
    pub sensible_below_kj: f64,
}

impl ProductLoad {
    /// Chilling only: `m · cp · (t_in - t_out)`, zero if the product is already colder
    pub fn sensible_only(mass: f64, specific_heat: f64, t_in: f64, t_out: f64, hours: f64) -> Self {
        Self {
            mass,
            hours,
            sensible_above_kj: mass * specific_heat * (t_in - t_out).max(0.0),
            latent_kj: 0.0,
            sensible_below_kj: 0.0,
        }
    }

    /// Full three-stage cooling through the freezing point
    pub fn three_stage(mass: f64, props: &ProductProperties, t_in: f64, t_out: f64, hours: f64) -> Self {
        let tf = props.freezing_point;

        let sensible_above_kj = if t_in > tf {
            mass * props.specific_heat_above * (t_in - t_out.max(tf)).max(0.0)
        } else {
            0.0
        };

        let latent_kj = if t_in > tf && t_out < tf {
            mass * props.latent_heat
        } else {
            0.0
        };

        let sensible_below_kj = if t_out < tf {
            mass * props.specific_heat_below * (t_in.min(tf) - t_out).max(0.0)
        } else {
            0.0
        };

        Self { mass, hours, sensible_above_kj, latent_kj, sensible_below_kj }
    }

    pub fn sensible_above_kw(&self) -> f64 {
        kj_over_hours_to_kw(self.sensible_above_kj, self.hours)
    }

    pub fn latent_kw(&self) -> f64 {
        kj_over_hours_to_kw(self.latent_kj, self.hours)
    }

    pub fn sensible_below_kw(&self) -> f64 {
        kj_over_hours_to_kw(self.sensible_below_kj, self.hours)
    }

    /// Energy of all stages (kJ)
    pub fn total_kj(&self) -> f64 {
        self.sensible_above_kj + self.latent_kj + self.sensible_below_kj
    }

    /// Steady load over the pull-down time (kW)
    pub fn total(&self) -> f64 {
        kj_over_hours_to_kw(self.total_kj(), self.hours)
    }
}

impl HeatLoad for ProductLoad {
    fn kw(&self) -> f64 {
        self.total()
    }
}
