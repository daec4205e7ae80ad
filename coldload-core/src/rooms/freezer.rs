//! Freezer: frozen storage with a daily intake of product
//!
//! Product is taken through all three cooling stages over the pull-down
//! time. Infiltration uses the enthalpy method, so the moisture it brings in
//! is reported as latent load alongside any steam humidifier, and the sensible
//! heat ratio (SHR) is used for coil selection.

use crate::catalog::{default_product, Product, ProductProperties, PropertyOverrides, StorageType};
use crate::constants::design::{AIR_CHANGES_FREEZER, SAFETY_FACTOR_STORAGE};
use crate::constants::physics::{AIR_ENTHALPY_DIFF_KJ_PER_M3, HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT};
use crate::errors::{check_finite, check_non_negative, check_positive, check_range, CalcResult};
use crate::geometry::{RoomAreas, RoomGeometry};
use crate::loads::{
    equipment_kw, fan_motors_kw, lighting_kw, occupancy_kw, AirChangeLoad, DoorLoad, HeaterGroup,
    LoadSummary, ProductLoad, SurfaceUFactors, TransmissionLoad,
};
use crate::lookup::InsulationMaterial;
use crate::sheet::{LoadSheet, Section};
use crate::traits::{HeatLoad, LoadCalculator, LoadReport, RoomKind};

use super::{
    check_daily_hours, design_temperature_difference, push_summary, resolve_properties,
    Construction, StorageCapacity,
};

/// Freezer description with every default resolved
#[derive(Debug, Clone, Copy)]
pub struct FreezerInput {
    pub geometry: RoomGeometry,
    pub door_openings_per_day: f64,
    /// Walls and ceiling share one thickness; the floor has its own
    pub construction: Construction,
    pub ambient_temp_c: f64,
    pub room_temp_c: f64,
    pub operating_hours: f64,
    pub pull_down_hours: f64,
    /// Reported only
    pub room_humidity_pct: f64,
    /// Evaporator air flow of one fan (CFM)
    pub air_flow_per_fan_cfm: f64,
    /// Steam humidifier rating (kW)
    pub steam_humidifier_kw: f64,
    pub product: &'static Product,
    pub overrides: PropertyOverrides,
    pub daily_load_kg: f64,
    pub incoming_temp_c: f64,
    pub outgoing_temp_c: f64,
    pub storage: StorageType,
    /// Rating of one evaporator fan motor (kW)
    pub fan_motor_kw: f64,
    pub fan_count: f64,
    pub fan_hours: f64,
    /// Anti-sweat door heaters, used on doors over 1.8 m² (kW)
    pub door_heater_kw: f64,
    pub tray_heater_kw: f64,
    pub peripheral_heater_kw: f64,
    pub people: f64,
    pub working_hours: f64,
    pub lighting_w: f64,
    pub equipment_w: f64,
}

impl Default for FreezerInput {
    fn default() -> Self {
        Self {
            geometry: RoomGeometry {
                length: 4.0,
                width: 3.0,
                height: 2.5,
                door_width: 1.0,
                door_height: 2.0,
            },
            door_openings_per_day: 15.0,
            construction: Construction::uniform(InsulationMaterial::Puf, 150.0),
            ambient_temp_c: 35.0,
            room_temp_c: -18.0,
            operating_hours: 24.0,
            pull_down_hours: 10.0,
            room_humidity_pct: 85.0,
            air_flow_per_fan_cfm: 2000.0,
            steam_humidifier_kw: 0.0,
            product: default_product(),
            overrides: PropertyOverrides::default(),
            daily_load_kg: 1000.0,
            incoming_temp_c: 25.0,
            outgoing_temp_c: -18.0,
            storage: StorageType::Boxed,
            fan_motor_kw: 0.37,
            fan_count: 6.0,
            fan_hours: 24.0,
            door_heater_kw: 0.24,
            tray_heater_kw: 2.0,
            peripheral_heater_kw: 0.0,
            people: 2.0,
            working_hours: 4.0,
            lighting_w: 150.0,
            equipment_w: 300.0,
        }
    }
}

/// Loads generated inside the freezer (kW)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FreezerInternalLoads {
    pub occupancy: f64,
    pub lighting: f64,
    pub equipment: f64,
    pub fan_motors: f64,
    pub tray_heaters: f64,
    pub peripheral_heaters: f64,
    /// Latent
    pub steam_humidifier: f64,
}

impl FreezerInternalLoads {
    pub fn total(&self) -> f64 {
        self.occupancy
            + self.lighting
            + self.equipment
            + self.fan_motors
            + self.tray_heaters
            + self.peripheral_heaters
            + self.steam_humidifier
    }
}

impl HeatLoad for FreezerInternalLoads {
    fn kw(&self) -> f64 {
        self.total()
    }
}

/// Freezer load breakdown
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FreezerReport {
    pub areas: RoomAreas,
    pub temperature_difference: f64,
    pub u_factors: SurfaceUFactors,
    pub product_name: &'static str,
    pub properties: ProductProperties,
    pub storage_type: StorageType,
    pub storage: StorageCapacity,
    pub room_humidity_pct: f64,
    pub transmission: TransmissionLoad,
    pub product: ProductLoad,
    pub air_change: AirChangeLoad,
    pub door: DoorLoad,
    pub internal: FreezerInternalLoads,
    /// Sensible part of the load before safety (kW)
    pub sensible_kw: f64,
    /// Moisture part of the load before safety (kW)
    pub latent_kw: f64,
    /// Evaporator air flow of all fans (CFM)
    pub total_air_flow_cfm: f64,
    pub summary: LoadSummary,
}

impl FreezerReport {
    /// Sensible heat ratio
    pub fn shr(&self) -> f64 {
        let total = self.sensible_kw + self.latent_kw;
        if total > 0.0 {
            self.sensible_kw / total
        } else {
            1.0
        }
    }
}

impl LoadReport for FreezerReport {
    fn final_kw(&self) -> f64 {
        self.summary.final_kw
    }

    fn final_tr(&self) -> f64 {
        self.summary.final_tr
    }

    fn sheet(&self) -> LoadSheet {
        let mut sheet = LoadSheet::new();
        let t = &self.transmission;
        sheet.line(Section::Transmission, "Walls", Some(t.walls.kj_per_day()), t.walls.kw);
        sheet.line(Section::Transmission, "Ceiling", Some(t.ceiling.kj_per_day()), t.ceiling.kw);
        sheet.line(Section::Transmission, "Floor", Some(t.floor.kj_per_day()), t.floor.kw);
        sheet.total(Section::Transmission, "Total transmission", Some(t.total_kj_per_day()), t.total());

        let p = &self.product;
        sheet.line(Section::Product, "Sensible above freezing", Some(p.sensible_above_kj), p.sensible_above_kw());
        sheet.line(Section::Product, "Latent heat of freezing", Some(p.latent_kj), p.latent_kw());
        sheet.line(Section::Product, "Sensible below freezing", Some(p.sensible_below_kj), p.sensible_below_kw());
        sheet.total(Section::Product, "Total product", Some(p.total_kj()), p.total());

        sheet.line(Section::AirChange, "Air change", Some(self.air_change.kj_per_day), self.air_change.kw);

        sheet.line(
            Section::Door,
            "Door infiltration",
            Some(self.door.infiltration_kj_per_day()),
            self.door.infiltration_kw,
        );
        sheet.line(Section::Door, "Door heaters", None, self.door.heaters_kw);

        let i = &self.internal;
        sheet.line(Section::Internal, "Occupancy", None, i.occupancy);
        sheet.line(Section::Internal, "Lighting", None, i.lighting);
        sheet.line(Section::Internal, "Equipment", None, i.equipment);
        sheet.line(Section::Internal, "Fan motors", None, i.fan_motors);
        sheet.line(Section::Internal, "Steam humidifier", None, i.steam_humidifier);

        sheet.line(Section::Heaters, "Tray heaters", None, i.tray_heaters);
        sheet.line(Section::Heaters, "Peripheral heaters", None, i.peripheral_heaters);

        sheet.line(Section::Summary, "Sensible", None, self.sensible_kw);
        sheet.line(Section::Summary, "Latent", None, self.latent_kw);
        push_summary(&mut sheet, &self.summary);
        sheet
    }
}

/// Calculator for frozen storage rooms
#[derive(Debug, Clone, Copy, Default)]
pub struct FreezerCalculator;

impl LoadCalculator for FreezerCalculator {
    type Input = FreezerInput;
    type Report = FreezerReport;

    fn kind(&self) -> RoomKind {
        RoomKind::Freezer
    }

    fn safety_factor(&self) -> f64 {
        SAFETY_FACTOR_STORAGE
    }

    fn calculate(&self, input: &FreezerInput) -> CalcResult<FreezerReport> {
        input.geometry.validate()?;
        let dt = design_temperature_difference(input.ambient_temp_c, input.room_temp_c)?;
        let operating_hours = check_daily_hours("operating_hours", input.operating_hours)?;
        let working_hours = check_daily_hours("working_hours", input.working_hours)?;
        let fan_hours = check_daily_hours("fan_hours", input.fan_hours)?;
        let pull_down_hours = check_positive("pull_down_hours", input.pull_down_hours)?;
        let humidity = check_range("room_humidity", input.room_humidity_pct, HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT)?;
        let openings = check_non_negative("door_openings", input.door_openings_per_day)?;
        let mass = check_non_negative("daily_load", input.daily_load_kg)?;
        let t_in = check_finite("incoming_temp", input.incoming_temp_c)?;
        let t_out = check_finite("outgoing_temp", input.outgoing_temp_c)?;
        let fan_kw = check_non_negative("fan_motor_rating", input.fan_motor_kw)?;
        let fan_count = check_non_negative("fan_count", input.fan_count)?;
        let air_flow = check_non_negative("air_flow_per_fan", input.air_flow_per_fan_cfm)?;
        let humidifier_kw = check_non_negative("steam_humidifier", input.steam_humidifier_kw)?;
        let door_heater_kw = check_non_negative("door_heater", input.door_heater_kw)?;
        let tray_kw = check_non_negative("tray_heater", input.tray_heater_kw)?;
        let peripheral_kw = check_non_negative("peripheral_heater", input.peripheral_heater_kw)?;
        let people = check_non_negative("people", input.people)?;
        let lighting_w = check_non_negative("lighting", input.lighting_w)?;
        let equipment_w = check_non_negative("equipment", input.equipment_w)?;
        let properties = resolve_properties(input.product, &input.overrides)?;

        let areas = input.geometry.areas();
        let u = input.construction.u_factors()?;

        let transmission = TransmissionLoad::calculate(&areas, u, dt);
        let product = ProductLoad::three_stage(mass, &properties, t_in, t_out, pull_down_hours);
        let air_change = AirChangeLoad::enthalpy(
            areas.volume,
            AIR_CHANGES_FREEZER,
            AIR_ENTHALPY_DIFF_KJ_PER_M3,
            dt,
            operating_hours,
        );
        let door = DoorLoad::freezer(areas.door, openings, door_heater_kw, operating_hours);
        let internal = FreezerInternalLoads {
            occupancy: occupancy_kw(people, working_hours),
            lighting: lighting_kw(lighting_w, operating_hours),
            equipment: equipment_kw(equipment_w, operating_hours),
            fan_motors: fan_motors_kw(fan_kw, fan_count, fan_hours),
            tray_heaters: HeaterGroup::single(tray_kw).average_kw(operating_hours),
            peripheral_heaters: HeaterGroup::single(peripheral_kw).average_kw(operating_hours),
            steam_humidifier: HeaterGroup::single(humidifier_kw).average_kw(operating_hours),
        };

        let summary = LoadSummary::aggregate(
            &[&transmission, &product, &air_change, &door, &internal],
            self.safety_factor(),
        )?;

        // Door air carries the same moisture share as air-change air
        let door_latent = door.infiltration_kw * (1.0 - air_change.sensible_fraction);
        let latent_kw = air_change.latent_kw() + door_latent + internal.steam_humidifier;
        let sensible_kw = (summary.total_before_safety_kw - latent_kw).max(0.0);

        let maximum = areas.volume * properties.density * properties.storage_efficiency * input.storage.factor();
        let storage = StorageCapacity::new(maximum, mass);
        if storage.is_overloaded() {
            log_warn!("Daily load {} kg exceeds freezer capacity {:.0} kg", mass, storage.maximum_kg);
        }

        Ok(FreezerReport {
            areas,
            temperature_difference: dt,
            u_factors: u,
            product_name: input.product.name,
            properties,
            storage_type: input.storage,
            storage,
            room_humidity_pct: humidity,
            transmission,
            product,
            air_change,
            door,
            internal,
            sensible_kw,
            latent_kw,
            total_air_flow_cfm: air_flow * fan_count,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn default_report() -> FreezerReport {
        FreezerCalculator.calculate(&FreezerInput::default()).unwrap()
    }

    #[test]
    fn default_transmission() {
        let r = default_report();
        assert_eq!(r.temperature_difference, 53.0);
        // 35 m² walls, 12 m² ceiling and floor, PUF 150 mm
        assert!(close(r.transmission.total(), 0.153 * 59.0 * 53.0 / 1000.0));
    }

    #[test]
    fn product_passes_all_three_stages() {
        let r = default_report();
        // 1000 kg from 25 to -18 °C, Tf = -2 °C
        assert!(close(r.product.sensible_above_kj, 1000.0 * 3.5 * 27.0));
        assert!(close(r.product.latent_kj, 1000.0 * 250.0));
        assert!(close(r.product.sensible_below_kj, 1000.0 * 1.8 * 16.0));
        assert_eq!(r.product.hours, 10.0);
    }

    #[test]
    fn small_door_has_no_heaters() {
        let r = default_report();
        assert_eq!(r.door.door_area, 2.0);
        assert!(r.door.heaters_required);

        let input = FreezerInput {
            geometry: RoomGeometry { door_width: 0.9, door_height: 1.9, ..FreezerInput::default().geometry },
            ..FreezerInput::default()
        };
        let r = FreezerCalculator.calculate(&input).unwrap();
        assert!(!r.door.heaters_required);
        assert_eq!(r.door.heaters_kw, 0.0);
    }

    #[test]
    fn internal_loads() {
        let r = default_report();
        assert!(close(r.internal.fan_motors, 0.37 * 6.0));
        assert!(close(r.internal.tray_heaters, 2.0));
        assert!(close(r.internal.occupancy, 2.0 * 0.407 * 4.0 / 24.0));
        assert_eq!(r.internal.steam_humidifier, 0.0);
        assert_eq!(r.total_air_flow_cfm, 12_000.0);
    }

    #[test]
    fn humidifier_is_latent() {
        let base = default_report();
        let input = FreezerInput { steam_humidifier_kw: 1.2, ..FreezerInput::default() };
        let r = FreezerCalculator.calculate(&input).unwrap();
        assert!(close(r.latent_kw - base.latent_kw, 1.2));
        assert!(close(r.sensible_kw, base.sensible_kw));
        assert!(r.shr() < base.shr());
    }

    #[test]
    fn sensible_and_latent_add_up() {
        let r = default_report();
        assert!(close(r.sensible_kw + r.latent_kw, r.summary.total_before_safety_kw));
        assert!(r.shr() > 0.0 && r.shr() < 1.0);
    }

    #[test]
    fn humidity_out_of_range() {
        let input = FreezerInput { room_humidity_pct: 120.0, ..FreezerInput::default() };
        assert!(FreezerCalculator.calculate(&input).is_err());
    }
}
