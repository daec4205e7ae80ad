//! Transmission load: heat conducted through walls, ceiling and floor
//!
//! Each surface conducts `q = U · A · ΔT`. ΔT is ambient minus room
//! temperature; a room warmer than its surroundings gains no heat and the
//! surface contributes zero rather than a credit.

use crate::constants::units::{kw_to_kj_per_day, W_PER_KW};
use crate::geometry::RoomAreas;
use crate::traits::HeatLoad;

/// U-factor of each surface group (W/m²·K)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SurfaceUFactors {
    pub walls: f64,
    pub ceiling: f64,
    pub floor: f64,
}

impl SurfaceUFactors {
    /// The same panel on every surface
    pub fn uniform(u: f64) -> Self {
        Self { walls: u, ceiling: u, floor: u }
    }
}

/// Conduction through one surface group
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SurfaceLoad {
    /// Surface area (m²)
    pub area: f64,
    /// U-factor (W/m²·K)
    pub u_factor: f64,
    /// Load (kW)
    pub kw: f64,
}

impl SurfaceLoad {
    /// `U · A · ΔT` in kW, zero when ΔT is not positive
    pub fn new(u_factor: f64, area: f64, temperature_difference: f64) -> Self {
        let dt = temperature_difference.max(0.0);
        Self {
            area,
            u_factor,
            kw: u_factor * area * dt / W_PER_KW,
        }
    }

    /// Heat conducted over a full day (kJ/day)
    pub fn kj_per_day(&self) -> f64 {
        kw_to_kj_per_day(self.kw)
    }
}

/// Transmission load of the whole room envelope
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TransmissionLoad {
    /// Ambient minus room temperature (K)
    pub temperature_difference: f64,
    pub walls: SurfaceLoad,
    pub ceiling: SurfaceLoad,
    pub floor: SurfaceLoad,
}

impl TransmissionLoad {
    /// Conduction through every surface of the room
    pub fn calculate(areas: &RoomAreas, u: SurfaceUFactors, temperature_difference: f64) -> Self {
        Self {
            temperature_difference,
            walls: SurfaceLoad::new(u.walls, areas.wall, temperature_difference),
            ceiling: SurfaceLoad::new(u.ceiling, areas.ceiling, temperature_difference),
            floor: SurfaceLoad::new(u.floor, areas.floor, temperature_difference),
        }
    }

    /// Sum of the three surfaces (kW)
    pub fn total(&self) -> f64 {
        self.walls.kw + self.ceiling.kw + self.floor.kw
    }

    /// Sum of the three surfaces over a day (kJ/day)
    pub fn total_kj_per_day(&self) -> f64 {
        kw_to_kj_per_day(self.total())
    }
}

impl HeatLoad for TransmissionLoad {
    fn kw(&self) -> f64 {
        self.total()
    }
}
