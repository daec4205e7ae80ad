//! Cold room: chilled storage above freezing
//!
//! The product is only cooled, never frozen, so the product load is the
//! sensible heat between the incoming and outgoing temperatures removed over
//! the pull-down time. Fresh produce adds respiration heat.

use crate::catalog::{default_product, Product, ProductProperties, PropertyOverrides, StorageType};
use crate::constants::design::{AIR_CHANGES_COLD_ROOM, SAFETY_FACTOR_STORAGE};
use crate::errors::{check_finite, check_non_negative, check_positive, CalcResult};
use crate::geometry::{RoomAreas, RoomGeometry};
use crate::loads::{
    equipment_kw, lighting_kw, occupancy_kw, AirChangeLoad, ColdRoomHeaters, DoorLoad,
    LoadSummary, ProductLoad, RespirationLoad, TransmissionLoad,
};
use crate::lookup::InsulationMaterial;
use crate::sheet::{LoadSheet, Section};
use crate::traits::{HeatLoad, LoadCalculator, LoadReport, RoomKind};

use super::{
    check_daily_hours, design_temperature_difference, push_summary, resolve_properties,
    Construction, StorageCapacity,
};

/// Cold room description with every default resolved
#[derive(Debug, Clone, Copy)]
pub struct ColdRoomInput {
    pub geometry: RoomGeometry,
    pub door_openings_per_day: f64,
    pub construction: Construction,
    pub ambient_temp_c: f64,
    pub room_temp_c: f64,
    /// Hours per day the plant runs
    pub operating_hours: f64,
    /// Hours allowed to cool the daily intake
    pub pull_down_hours: f64,
    pub product: &'static Product,
    pub overrides: PropertyOverrides,
    /// Product brought in per day (kg)
    pub daily_load_kg: f64,
    pub incoming_temp_c: f64,
    pub outgoing_temp_c: f64,
    pub storage: StorageType,
    pub people: f64,
    pub working_hours: f64,
    pub lighting_w: f64,
    pub equipment_w: f64,
}

impl Default for ColdRoomInput {
    fn default() -> Self {
        Self {
            geometry: RoomGeometry {
                length: 6.0,
                width: 4.0,
                height: 3.0,
                door_width: 1.2,
                door_height: 2.1,
            },
            door_openings_per_day: 30.0,
            construction: Construction::uniform(InsulationMaterial::Puf, 100.0),
            ambient_temp_c: 35.0,
            room_temp_c: 4.0,
            operating_hours: 24.0,
            pull_down_hours: 8.0,
            product: default_product(),
            overrides: PropertyOverrides::default(),
            daily_load_kg: 3000.0,
            incoming_temp_c: 25.0,
            outgoing_temp_c: 4.0,
            storage: StorageType::Palletized,
            people: 3.0,
            working_hours: 8.0,
            lighting_w: 300.0,
            equipment_w: 750.0,
        }
    }
}

/// People, lights and equipment (kW)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MiscLoads {
    pub occupancy: f64,
    pub lighting: f64,
    pub equipment: f64,
}

impl MiscLoads {
    pub fn total(&self) -> f64 {
        self.occupancy + self.lighting + self.equipment
    }
}

impl HeatLoad for MiscLoads {
    fn kw(&self) -> f64 {
        self.total()
    }
}

/// Cold room load breakdown
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColdRoomReport {
    pub areas: RoomAreas,
    /// Ambient minus room temperature (K)
    pub temperature_difference: f64,
    /// Panel U-factor used on every surface (W/m²·K)
    pub u_factor: f64,
    pub product_name: &'static str,
    pub properties: ProductProperties,
    pub storage_type: StorageType,
    pub storage: StorageCapacity,
    pub transmission: TransmissionLoad,
    pub product: ProductLoad,
    pub respiration: RespirationLoad,
    pub air_change: AirChangeLoad,
    pub door: DoorLoad,
    pub misc: MiscLoads,
    pub heaters: ColdRoomHeaters,
    pub summary: LoadSummary,
}

impl LoadReport for ColdRoomReport {
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

        sheet.line(Section::Product, "Sensible heat", Some(self.product.total_kj()), self.product.total());
        sheet.line(Section::Product, "Respiration", None, self.respiration.kw);

        sheet.line(Section::AirChange, "Air change", Some(self.air_change.kj_per_day), self.air_change.kw);
        sheet.line(
            Section::Door,
            "Door opening",
            Some(self.door.infiltration_kj_per_day()),
            self.door.infiltration_kw,
        );

        sheet.line(Section::Internal, "Occupancy", None, self.misc.occupancy);
        sheet.line(Section::Internal, "Lighting", None, self.misc.lighting);
        sheet.line(Section::Internal, "Equipment", None, self.misc.equipment);

        sheet.line(Section::Heaters, "Peripheral heaters", None, self.heaters.peripheral);
        sheet.line(Section::Heaters, "Tray heater", None, self.heaters.tray);

        push_summary(&mut sheet, &self.summary);
        sheet
    }
}

/// Calculator for chilled rooms
#[derive(Debug, Clone, Copy, Default)]
pub struct ColdRoomCalculator;

impl LoadCalculator for ColdRoomCalculator {
    type Input = ColdRoomInput;
    type Report = ColdRoomReport;

    fn kind(&self) -> RoomKind {
        RoomKind::ColdRoom
    }

    fn safety_factor(&self) -> f64 {
        SAFETY_FACTOR_STORAGE
    }

    fn calculate(&self, input: &ColdRoomInput) -> CalcResult<ColdRoomReport> {
        input.geometry.validate()?;
        let dt = design_temperature_difference(input.ambient_temp_c, input.room_temp_c)?;
        let operating_hours = check_daily_hours("operating_hours", input.operating_hours)?;
        let working_hours = check_daily_hours("working_hours", input.working_hours)?;
        let pull_down_hours = check_positive("pull_down_hours", input.pull_down_hours)?;
        let openings = check_non_negative("door_openings", input.door_openings_per_day)?;
        let mass = check_non_negative("daily_load", input.daily_load_kg)?;
        let t_in = check_finite("incoming_temp", input.incoming_temp_c)?;
        let t_out = check_finite("outgoing_temp", input.outgoing_temp_c)?;
        let people = check_non_negative("people", input.people)?;
        let lighting_w = check_non_negative("lighting", input.lighting_w)?;
        let equipment_w = check_non_negative("equipment", input.equipment_w)?;
        let properties = resolve_properties(input.product, &input.overrides)?;

        let areas = input.geometry.areas();
        let u = input.construction.u_factors()?;

        let transmission = TransmissionLoad::calculate(&areas, u, dt);
        let product = ProductLoad::sensible_only(
            mass,
            properties.specific_heat_above,
            t_in,
            t_out,
            pull_down_hours,
        );
        let respiration = RespirationLoad::calculate(mass, &input.product.respiration, input.room_temp_c);
        let air_change = AirChangeLoad::sensible(areas.volume, AIR_CHANGES_COLD_ROOM, dt, operating_hours);
        let door = DoorLoad::cold_room(areas.door, dt, openings, operating_hours);
        let misc = MiscLoads {
            occupancy: occupancy_kw(people, working_hours),
            lighting: lighting_kw(lighting_w, operating_hours),
            equipment: equipment_kw(equipment_w, operating_hours),
        };
        let heaters = ColdRoomHeaters::for_door(areas.door, operating_hours);

        let summary = LoadSummary::aggregate(
            &[&transmission, &product, &respiration, &air_change, &door, &misc, &heaters],
            self.safety_factor(),
        )?;

        let maximum = areas.volume * properties.density * properties.storage_efficiency * input.storage.factor();
        let storage = StorageCapacity::new(maximum, mass);
        if storage.is_overloaded() {
            log_warn!(
                "Daily load {} kg exceeds cold room capacity {:.0} kg",
                mass,
                storage.maximum_kg
            );
        }

        Ok(ColdRoomReport {
            areas,
            temperature_difference: dt,
            u_factor: u.walls,
            product_name: input.product.name,
            properties,
            storage_type: input.storage,
            storage,
            transmission,
            product,
            respiration,
            air_change,
            door,
            misc,
            heaters,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_product;
    use crate::errors::CalcError;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn default_room_components() {
        let r = ColdRoomCalculator.calculate(&ColdRoomInput::default()).unwrap();

        assert_eq!(r.temperature_difference, 31.0);
        assert_eq!(r.u_factor, 0.230);
        // 60 m² walls, 24 m² ceiling and floor
        assert!(close(r.transmission.walls.kw, 0.230 * 60.0 * 31.0 / 1000.0));
        assert!(close(r.transmission.total(), 0.230 * 108.0 * 31.0 / 1000.0));

        // 3000 kg x 3.5 x 21 K over 8 h
        assert!(close(r.product.total(), 3000.0 * 3.5 * 21.0 / (8.0 * 3600.0)));
        assert_eq!(r.respiration.kw, 0.0);

        assert!(close(r.misc.occupancy, 0.407));
        assert!(close(r.misc.lighting, 0.3));
        assert!(close(r.misc.equipment, 0.75));
        assert!(close(r.heaters.total(), 0.252 + 0.5));
    }

    #[test]
    fn summary_applies_ten_percent() {
        let r = ColdRoomCalculator.calculate(&ColdRoomInput::default()).unwrap();
        let sum = r.transmission.total()
            + r.product.total()
            + r.respiration.kw
            + r.air_change.kw
            + r.door.total()
            + r.misc.total()
            + r.heaters.total();
        assert!(close(r.summary.total_before_safety_kw, sum));
        assert!(close(r.summary.final_kw, sum * 1.10));
    }

    #[test]
    fn storage_capacity_uses_packing() {
        let r = ColdRoomCalculator.calculate(&ColdRoomInput::default()).unwrap();
        // 72 m³ x 500 kg/m³ x 0.70 x 0.75
        assert!(close(r.storage.maximum_kg, 18_900.0));
        assert!(close(r.storage.utilization_pct, 3000.0 / 18_900.0 * 100.0));
    }

    #[test]
    fn apples_respire() {
        let input = ColdRoomInput {
            product: find_product("Apples").unwrap(),
            ..ColdRoomInput::default()
        };
        let r = ColdRoomCalculator.calculate(&input).unwrap();
        // 4 °C between 0 and 5: 12 + 13 x 0.8 = 22.4 W/t, 3 t
        assert!(close(r.respiration.factor_w_per_tonne, 22.4));
        assert!(close(r.respiration.kw, 3.0 * 22.4 / 1000.0));
    }

    #[test]
    fn zero_inputs_are_honoured() {
        let input = ColdRoomInput {
            people: 0.0,
            lighting_w: 0.0,
            door_openings_per_day: 0.0,
            daily_load_kg: 0.0,
            ..ColdRoomInput::default()
        };
        let r = ColdRoomCalculator.calculate(&input).unwrap();
        assert_eq!(r.misc.occupancy, 0.0);
        assert_eq!(r.misc.lighting, 0.0);
        assert_eq!(r.door.infiltration_kw, 0.0);
        assert_eq!(r.product.total(), 0.0);
    }

    #[test]
    fn zero_pull_down_rejected() {
        let input = ColdRoomInput { pull_down_hours: 0.0, ..ColdRoomInput::default() };
        let err = ColdRoomCalculator.calculate(&input).unwrap_err();
        assert!(matches!(err, CalcError::NonPositive { field: "pull_down_hours", .. }));
    }

    #[test]
    fn sheet_ends_with_design_load() {
        let r = ColdRoomCalculator.calculate(&ColdRoomInput::default()).unwrap();
        let sheet = r.sheet();
        let last = sheet.lines().last().unwrap();
        assert_eq!(last.label, "Design load");
        assert!(last.is_total);
        assert_eq!(last.kw, r.final_kw());
    }
}
