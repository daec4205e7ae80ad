//! Respiration load of living produce in storage

use crate::constants::units::W_PER_KW;
use crate::lookup::RespirationCurve;
use crate::traits::HeatLoad;

/// Heat given off by stored fruit and vegetables
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RespirationLoad {
    /// Interpolated factor at room temperature (W/tonne)
    pub factor_w_per_tonne: f64,
    /// Load (kW)
    pub kw: f64,
}

impl RespirationLoad {
    /// `(mass / 1000) · factor(t_room) / 1000`
    pub fn calculate(mass_kg: f64, curve: &RespirationCurve, room_temp_c: f64) -> Self {
        let factor = curve.factor_at(room_temp_c);
        let tonnes = mass_kg / 1000.0;
        Self {
            factor_w_per_tonne: factor,
            kw: tonnes * factor / W_PER_KW,
        }
    }
}

impl HeatLoad for RespirationLoad {
    fn kw(&self) -> f64 {
        self.kw
    }
}
