//! Infiltration loads: outside air entering the room
//!
//! ## Air change
//!
//! Warm air leaks in through seals and while goods are moved. It is expressed
//! as air changes per hour (ACH) of the room volume. Two methods are used:
//!
//! ```text
//! Sensible (cold rooms):
//!   ṁ = V · ρ · ACH                      kg/h
//!   Q = ṁ · cp_air · ΔT                  kJ/h, over the operating hours
//!
//! Enthalpy (freezers):
//!   V̇ = V · ACH                          m³/h
//!   Q = V̇ · Δh · hours                   kJ/day, Δh includes moisture
//! ```
//!
//! For freezers the infiltrated moisture freezes out on the coil, so part of
//! the enthalpy difference is latent. The sensible share is
//! `min(1, ρ · cp_air · ΔT / Δh)`.
//!
//! ## Door openings
//!
//! Cold-room doors use a heat-transfer rule scaled by how often the door is
//! opened; freezer doors use a fixed gain per square metre for each opening
//! plus anti-sweat heaters on large doors.

use crate::constants::design::{
    DOOR_HEATER_THRESHOLD_M2, DOOR_HEAT_W_PER_M2_K, DOOR_INFILTRATION_W_PER_M2,
    DOOR_OPENINGS_FULL_FRACTION, DOOR_OPEN_SECONDS,
};
use crate::constants::physics::{AIR_DENSITY_KG_PER_M3, AIR_SPECIFIC_HEAT_KJ_PER_KG_K};
use crate::constants::units::{
    daily_average, kw_to_kj_per_day, HOURS_PER_DAY, L_PER_M3, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    W_PER_KW,
};
use crate::traits::HeatLoad;

/// Air-change infiltration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AirChangeLoad {
    /// Air changes per hour (1/h)
    pub air_changes_per_hour: f64,
    /// Volume flow of infiltrated air (m³/h)
    pub volume_flow_m3_per_h: f64,
    /// Enthalpy removed per m³ of infiltrated air (kJ/m³)
    pub enthalpy_diff_kj_per_m3: f64,
    /// Heat removed per day (kJ/day)
    pub kj_per_day: f64,
    /// Average load (kW)
    pub kw: f64,
    /// Fraction of the load that is sensible (0-1)
    pub sensible_fraction: f64,
}

impl AirChangeLoad {
    /// Sensible-only method for rooms above freezing
    pub fn sensible(volume: f64, air_changes_per_hour: f64, temperature_difference: f64, operating_hours: f64) -> Self {
        let dt = temperature_difference.max(0.0);
        let mass_flow = volume * AIR_DENSITY_KG_PER_M3 * air_changes_per_hour;
        let kj_per_hour = mass_flow * AIR_SPECIFIC_HEAT_KJ_PER_KG_K * dt;
        let kj_per_day = kj_per_hour * operating_hours;
        Self {
            air_changes_per_hour,
            volume_flow_m3_per_h: volume * air_changes_per_hour,
            enthalpy_diff_kj_per_m3: AIR_DENSITY_KG_PER_M3 * AIR_SPECIFIC_HEAT_KJ_PER_KG_K * dt,
            kj_per_day,
            kw: kj_per_day / SECONDS_PER_DAY,
            sensible_fraction: 1.0,
        }
    }

    /// Enthalpy method including moisture, for freezers
    pub fn enthalpy(
        volume: f64,
        air_changes_per_hour: f64,
        enthalpy_diff_kj_per_m3: f64,
        temperature_difference: f64,
        operating_hours: f64,
    ) -> Self {
        let flow = volume * air_changes_per_hour;
        let kj_per_day = flow * enthalpy_diff_kj_per_m3 * operating_hours;
        Self {
            air_changes_per_hour,
            volume_flow_m3_per_h: flow,
            enthalpy_diff_kj_per_m3,
            kj_per_day,
            kw: kj_per_day / SECONDS_PER_DAY,
            sensible_fraction: sensible_fraction(temperature_difference, enthalpy_diff_kj_per_m3),
        }
    }

    /// Infiltrated air flow (L/s)
    pub fn air_flow_l_per_s(&self) -> f64 {
        self.volume_flow_m3_per_h * L_PER_M3 / SECONDS_PER_HOUR
    }

    pub fn sensible_kw(&self) -> f64 {
        self.kw * self.sensible_fraction
    }

    pub fn latent_kw(&self) -> f64 {
        self.kw - self.sensible_kw()
    }
}

impl HeatLoad for AirChangeLoad {
    fn kw(&self) -> f64 {
        self.kw
    }
}

/// Share of an enthalpy difference that is sensible heat
pub fn sensible_fraction(temperature_difference: f64, enthalpy_diff_kj_per_m3: f64) -> f64 {
    if enthalpy_diff_kj_per_m3 <= 0.0 {
        return 1.0;
    }
    let sensible = AIR_DENSITY_KG_PER_M3 * AIR_SPECIFIC_HEAT_KJ_PER_KG_K * temperature_difference.max(0.0);
    (sensible / enthalpy_diff_kj_per_m3).min(1.0)
}

/// Heat gain from opening the door, plus door heaters where fitted
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DoorLoad {
    /// Door clear opening (m²)
    pub door_area: f64,
    /// Door openings per day
    pub openings_per_day: f64,
    /// Infiltration through the open door (kW)
    pub infiltration_kw: f64,
    /// Anti-sweat door heaters (kW)
    pub heaters_kw: f64,
    /// Whether the door is large enough to need heaters
    pub heaters_required: bool,
}

impl DoorLoad {
    /// Cold-room rule: `A · ΔT · 50 W/m²K · (openings / 100)` over the operating hours
    pub fn cold_room(door_area: f64, temperature_difference: f64, openings_per_day: f64, operating_hours: f64) -> Self {
        let dt = temperature_difference.max(0.0);
        let operating_fraction = openings_per_day / DOOR_OPENINGS_FULL_FRACTION;
        let watts = door_area * dt * DOOR_HEAT_W_PER_M2_K * operating_fraction;
        Self {
            door_area,
            openings_per_day,
            infiltration_kw: watts * operating_hours / (W_PER_KW * HOURS_PER_DAY),
            heaters_kw: 0.0,
            heaters_required: false,
        }
    }

    /// Freezer rule: 1800 W/m² for 60 s per opening, heaters above 1.8 m²
    pub fn freezer(door_area: f64, openings_per_day: f64, heater_kw: f64, operating_hours: f64) -> Self {
        let kj_per_day = door_area * DOOR_INFILTRATION_W_PER_M2 * DOOR_OPEN_SECONDS * openings_per_day / W_PER_KW;
        let heaters_required = door_area > DOOR_HEATER_THRESHOLD_M2;
        let heaters_kw = if heaters_required {
            daily_average(heater_kw, operating_hours)
        } else {
            0.0
        };
        Self {
            door_area,
            openings_per_day,
            infiltration_kw: kj_per_day / SECONDS_PER_DAY,
            heaters_kw,
            heaters_required,
        }
    }

    /// Infiltration over a day (kJ/day)
    pub fn infiltration_kj_per_day(&self) -> f64 {
        kw_to_kj_per_day(self.infiltration_kw)
    }

    pub fn total(&self) -> f64 {
        self.infiltration_kw + self.heaters_kw
    }
}

impl HeatLoad for DoorLoad {
    fn kw(&self) -> f64 {
        self.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn sensible_air_change_for_cold_room() {
        // 72 m³, 0.3 ACH, ΔT 31 K, 24 h
        let load = AirChangeLoad::sensible(72.0, 0.3, 31.0, 24.0);
        let kj_per_hour = 72.0 * 1.2 * 0.3 * 1.006 * 31.0;
        assert!(close(load.kj_per_day, kj_per_hour * 24.0));
        assert!(close(load.kw, kj_per_hour / 3600.0));
        assert_eq!(load.latent_kw(), 0.0);
    }

    #[test]
    fn enthalpy_air_change_for_freezer() {
        // 30 m³, 0.5 ACH, 120.3 kJ/m³, 24 h
        let load = AirChangeLoad::enthalpy(30.0, 0.5, 120.3, 53.0, 24.0);
        assert!(close(load.volume_flow_m3_per_h, 15.0));
        assert!(close(load.air_flow_l_per_s(), 15.0 * 1000.0 / 3600.0));
        assert!(close(load.kj_per_day, 15.0 * 120.3 * 24.0));
        assert!(close(load.kw, 15.0 * 120.3 / 3600.0));

        let expected_fraction = 1.2 * 1.006 * 53.0 / 120.3;
        assert!(close(load.sensible_fraction, expected_fraction));
        assert!(close(load.sensible_kw() + load.latent_kw(), load.kw));
    }

    #[test]
    fn sensible_fraction_is_capped() {
        assert_eq!(sensible_fraction(200.0, 120.3), 1.0);
        assert_eq!(sensible_fraction(0.0, 120.3), 0.0);
        assert_eq!(sensible_fraction(10.0, 0.0), 1.0);
    }

    #[test]
    fn cold_room_door() {
        // 2.52 m² door, ΔT 31 K, 30 openings, 24 h
        let load = DoorLoad::cold_room(2.52, 31.0, 30.0, 24.0);
        assert!(close(load.infiltration_kw, 2.52 * 31.0 * 50.0 * 0.3 / 1000.0));
        assert_eq!(load.heaters_kw, 0.0);
    }

    #[test]
    fn small_freezer_door_has_no_heaters() {
        let load = DoorLoad::freezer(1.5, 15.0, 0.24, 24.0);
        assert!(!load.heaters_required);
        assert_eq!(load.heaters_kw, 0.0);
        // 1.5 m² * 1800 W * 60 s * 15 = 2430 kJ/day
        assert!(close(load.infiltration_kj_per_day(), 2430.0));
    }

    #[test]
    fn heater_threshold_is_exclusive() {
        let load = DoorLoad::freezer(1.8, 15.0, 0.24, 24.0);
        assert!(!load.heaters_required);
        assert_eq!(load.heaters_kw, 0.0);
        assert!(DoorLoad::freezer(1.81, 15.0, 0.24, 24.0).heaters_required);
    }

    #[test]
    fn large_freezer_door_gets_heaters() {
        let load = DoorLoad::freezer(2.4, 15.0, 0.24, 12.0);
        assert!(load.heaters_required);
        assert!(close(load.heaters_kw, 0.12));
        assert!(close(load.total(), load.infiltration_kw + 0.12));
    }
}
