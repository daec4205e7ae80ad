//! Blast freezer: a batch of product frozen within a fixed cycle time
//!
//! The whole batch passes through the three cooling stages within the batch
//! time, so the product load usually dominates. The room runs with a high
//! air-change rate and four groups of electric heaters.

use crate::catalog::{default_product, Product, ProductProperties, PropertyOverrides};
use crate::constants::design::{AIR_CHANGES_BLAST_FREEZER, SAFETY_FACTOR_BLAST};
use crate::constants::physics::AIR_ENTHALPY_DIFF_KJ_PER_M3;
use crate::constants::units::{daily_average, kw_to_tr};
use crate::errors::{check_finite, check_non_negative, check_positive, CalcResult};
use crate::geometry::{RoomAreas, RoomGeometry};
use crate::loads::{
    occupancy_kw, AirChangeLoad, HeaterGroup, LoadSummary, ProductLoad, SurfaceUFactors,
    TransmissionLoad,
};
use crate::lookup::InsulationMaterial;
use crate::sheet::{LoadSheet, Section};
use crate::traits::{HeatLoad, LoadCalculator, LoadReport, RoomKind};

use super::{
    check_daily_hours, design_temperature_difference, push_summary, resolve_properties,
    Construction, StorageCapacity,
};

/// Electric heater groups fitted to a blast freezer
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BlastHeaters {
    pub peripheral: HeaterGroup,
    pub door: HeaterGroup,
    pub tray: HeaterGroup,
    pub drain: HeaterGroup,
}

impl BlastHeaters {
    /// Connected load of all groups (kW)
    pub fn installed_kw(&self) -> f64 {
        self.peripheral.installed_kw()
            + self.door.installed_kw()
            + self.tray.installed_kw()
            + self.drain.installed_kw()
    }
}

impl Default for BlastHeaters {
    fn default() -> Self {
        Self {
            peripheral: HeaterGroup::new(1.0, 1.5),
            door: HeaterGroup::new(1.0, 0.27),
            tray: HeaterGroup::new(1.0, 2.2),
            drain: HeaterGroup::new(1.0, 0.04),
        }
    }
}

/// Blast freezer description with every default resolved
#[derive(Debug, Clone, Copy)]
pub struct BlastFreezerInput {
    pub geometry: RoomGeometry,
    pub construction: Construction,
    pub ambient_temp_c: f64,
    pub room_temp_c: f64,
    /// Hours per freezing cycle
    pub batch_hours: f64,
    pub operating_hours: f64,
    pub product: &'static Product,
    pub overrides: PropertyOverrides,
    /// Product frozen per batch (kg)
    pub batch_mass_kg: f64,
    pub incoming_temp_c: f64,
    pub outgoing_temp_c: f64,
    /// Loading density of the room (kg/m³)
    pub storage_density_kg_per_m3: f64,
    pub people: f64,
    pub working_hours: f64,
    pub lighting_kw: f64,
    pub fan_kw: f64,
    pub heaters: BlastHeaters,
}

impl Default for BlastFreezerInput {
    fn default() -> Self {
        Self {
            geometry: RoomGeometry {
                length: 5.0,
                width: 5.0,
                height: 3.5,
                door_width: 2.1,
                door_height: 2.1,
            },
            construction: Construction::uniform(InsulationMaterial::Puf, 150.0),
            ambient_temp_c: 43.0,
            room_temp_c: -35.0,
            batch_hours: 8.0,
            operating_hours: 24.0,
            product: default_product(),
            overrides: PropertyOverrides::default(),
            batch_mass_kg: 2000.0,
            incoming_temp_c: -5.0,
            outgoing_temp_c: -30.0,
            storage_density_kg_per_m3: 100.0,
            people: 2.0,
            working_hours: 4.0,
            lighting_kw: 0.1,
            fan_kw: 0.37,
            heaters: BlastHeaters::default(),
        }
    }
}

/// Loads generated inside the blast freezer (kW)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BlastInternalLoads {
    pub occupancy: f64,
    pub lighting: f64,
    pub fans: f64,
    pub peripheral_heaters: f64,
    pub door_heaters: f64,
    pub tray_heaters: f64,
    pub drain_heaters: f64,
}

impl BlastInternalLoads {
    pub fn heaters_total(&self) -> f64 {
        self.peripheral_heaters + self.door_heaters + self.tray_heaters + self.drain_heaters
    }

    pub fn total(&self) -> f64 {
        self.occupancy + self.lighting + self.fans + self.heaters_total()
    }
}

impl HeatLoad for BlastInternalLoads {
    fn kw(&self) -> f64 {
        self.total()
    }
}

/// Connected equipment ratings for plant selection (kW)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EquipmentSummary {
    pub fan_kw: f64,
    pub heater_kw: f64,
    pub lighting_kw: f64,
    /// Heat of the people, averaged over the day
    pub people_kw: f64,
}

/// Each component in tons of refrigeration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComponentTonnage {
    pub transmission: f64,
    pub product: f64,
    pub air_change: f64,
    pub internal: f64,
}

/// Blast freezer load breakdown
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BlastFreezerReport {
    pub areas: RoomAreas,
    pub temperature_difference: f64,
    pub u_factors: SurfaceUFactors,
    pub product_name: &'static str,
    pub properties: ProductProperties,
    pub storage: StorageCapacity,
    pub transmission: TransmissionLoad,
    pub product: ProductLoad,
    pub air_change: AirChangeLoad,
    pub internal: BlastInternalLoads,
    pub equipment: EquipmentSummary,
    pub tonnage: ComponentTonnage,
    pub summary: LoadSummary,
}

impl LoadReport for BlastFreezerReport {
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

        // Product energies are per batch, not per day
        let p = &self.product;
        sheet.line(Section::Product, "Sensible above freezing", None, p.sensible_above_kw());
        sheet.line(Section::Product, "Latent heat of freezing", None, p.latent_kw());
        sheet.line(Section::Product, "Sensible below freezing", None, p.sensible_below_kw());
        sheet.total(Section::Product, "Total product", None, p.total());

        sheet.line(Section::AirChange, "Air change", Some(self.air_change.kj_per_day), self.air_change.kw);

        let i = &self.internal;
        sheet.line(Section::Internal, "Occupancy", None, i.occupancy);
        sheet.line(Section::Internal, "Lighting", None, i.lighting);
        sheet.line(Section::Internal, "Fans", None, i.fans);

        sheet.line(Section::Heaters, "Peripheral heaters", None, i.peripheral_heaters);
        sheet.line(Section::Heaters, "Door heaters", None, i.door_heaters);
        sheet.line(Section::Heaters, "Tray heaters", None, i.tray_heaters);
        sheet.line(Section::Heaters, "Drain heaters", None, i.drain_heaters);
        sheet.total(Section::Heaters, "Total heaters", None, i.heaters_total());

        push_summary(&mut sheet, &self.summary);
        sheet
    }
}

/// Calculator for batch blast freezers
#[derive(Debug, Clone, Copy, Default)]
pub struct BlastFreezerCalculator;

impl LoadCalculator for BlastFreezerCalculator {
    type Input = BlastFreezerInput;
    type Report = BlastFreezerReport;

    fn kind(&self) -> RoomKind {
        RoomKind::BlastFreezer
    }

    fn safety_factor(&self) -> f64 {
        SAFETY_FACTOR_BLAST
    }

    fn calculate(&self, input: &BlastFreezerInput) -> CalcResult<BlastFreezerReport> {
        input.geometry.validate()?;
        let dt = design_temperature_difference(input.ambient_temp_c, input.room_temp_c)?;
        let operating_hours = check_daily_hours("operating_hours", input.operating_hours)?;
        let working_hours = check_daily_hours("working_hours", input.working_hours)?;
        let batch_hours = check_positive("batch_hours", input.batch_hours)?;
        let mass = check_non_negative("batch_mass", input.batch_mass_kg)?;
        let t_in = check_finite("incoming_temp", input.incoming_temp_c)?;
        let t_out = check_finite("outgoing_temp", input.outgoing_temp_c)?;
        let density = check_non_negative("storage_density", input.storage_density_kg_per_m3)?;
        let people = check_non_negative("people", input.people)?;
        let lighting_kw = check_non_negative("lighting", input.lighting_kw)?;
        let fan_kw = check_non_negative("fan", input.fan_kw)?;
        for group in [
            &input.heaters.peripheral,
            &input.heaters.door,
            &input.heaters.tray,
            &input.heaters.drain,
        ] {
            check_non_negative("heater_quantity", group.quantity)?;
            check_non_negative("heater_capacity", group.capacity_kw)?;
        }
        let properties = resolve_properties(input.product, &input.overrides)?;

        let areas = input.geometry.areas();
        let u = input.construction.u_factors()?;

        let transmission = TransmissionLoad::calculate(&areas, u, dt);
        let product = ProductLoad::three_stage(mass, &properties, t_in, t_out, batch_hours);
        let air_change = AirChangeLoad::enthalpy(
            areas.volume,
            AIR_CHANGES_BLAST_FREEZER,
            AIR_ENTHALPY_DIFF_KJ_PER_M3,
            dt,
            operating_hours,
        );
        let heaters = &input.heaters;
        let internal = BlastInternalLoads {
            occupancy: occupancy_kw(people, working_hours),
            lighting: daily_average(lighting_kw, operating_hours),
            fans: daily_average(fan_kw, operating_hours),
            peripheral_heaters: heaters.peripheral.average_kw(operating_hours),
            door_heaters: heaters.door.average_kw(operating_hours),
            tray_heaters: heaters.tray.average_kw(operating_hours),
            drain_heaters: heaters.drain.average_kw(operating_hours),
        };

        let summary = LoadSummary::aggregate(
            &[&transmission, &product, &air_change, &internal],
            self.safety_factor(),
        )?;

        let storage = StorageCapacity::new(areas.volume * density, mass);
        if storage.is_overloaded() {
            log_warn!("Batch of {} kg exceeds blast freezer capacity {:.0} kg", mass, storage.maximum_kg);
        }

        Ok(BlastFreezerReport {
            areas,
            temperature_difference: dt,
            u_factors: u,
            product_name: input.product.name,
            properties,
            storage,
            equipment: EquipmentSummary {
                fan_kw,
                heater_kw: heaters.installed_kw(),
                lighting_kw,
                people_kw: internal.occupancy,
            },
            tonnage: ComponentTonnage {
                transmission: kw_to_tr(transmission.total()),
                product: kw_to_tr(product.total()),
                air_change: kw_to_tr(air_change.kw),
                internal: kw_to_tr(internal.total()),
            },
            transmission,
            product,
            air_change,
            internal,
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

    fn default_report() -> BlastFreezerReport {
        BlastFreezerCalculator.calculate(&BlastFreezerInput::default()).unwrap()
    }

    #[test]
    fn frozen_product_only_sensible_below() {
        // -5 to -30 °C is entirely below Tf = -2 °C
        let r = default_report();
        assert_eq!(r.product.sensible_above_kj, 0.0);
        assert_eq!(r.product.latent_kj, 0.0);
        assert!(close(r.product.sensible_below_kj, 2000.0 * 1.8 * 25.0));
        assert!(close(r.product.total(), 90_000.0 / (8.0 * 3600.0)));
    }

    #[test]
    fn warm_product_is_frozen_within_batch() {
        let input = BlastFreezerInput { incoming_temp_c: 10.0, ..BlastFreezerInput::default() };
        let r = BlastFreezerCalculator.calculate(&input).unwrap();
        assert!(close(r.product.sensible_above_kj, 2000.0 * 3.5 * 12.0));
        assert!(close(r.product.latent_kj, 2000.0 * 250.0));
        assert!(close(r.product.sensible_below_kj, 2000.0 * 1.8 * 28.0));
    }

    #[test]
    fn air_change_one_per_hour() {
        let r = default_report();
        // 87.5 m³ x 1.0 ACH x 120.3 kJ/m³ x 24 h
        assert!(close(r.air_change.kj_per_day, 87.5 * 120.3 * 24.0));
        assert!(close(r.air_change.kw, 87.5 * 120.3 / 3600.0));
    }

    #[test]
    fn heaters_and_equipment() {
        let r = default_report();
        assert!(close(r.internal.heaters_total(), 1.5 + 0.27 + 2.2 + 0.04));
        assert!(close(r.equipment.heater_kw, 4.01));
        // 2 people x 0.407 kW for 4 of 24 hours
        assert!(close(r.equipment.people_kw, 2.0 * 0.407 * 4.0 / 24.0));
        assert!(close(r.equipment.people_kw, r.internal.occupancy));
        assert!(close(r.internal.fans, 0.37));
    }

    #[test]
    fn five_percent_safety() {
        let r = default_report();
        assert!(close(r.summary.final_kw, r.summary.total_before_safety_kw * 1.05));
        let tonnage = r.tonnage.transmission + r.tonnage.product + r.tonnage.air_change + r.tonnage.internal;
        assert!(close(tonnage, r.summary.total_before_safety_tr()));
    }

    #[test]
    fn storage_from_density() {
        assert_eq!(BlastFreezerInput::default().storage_density_kg_per_m3, 100.0);
        let r = default_report();
        assert!(close(r.storage.maximum_kg, 8750.0));
        assert!(close(r.storage.utilization_pct, 2000.0 / 8750.0 * 100.0));
        assert!(!r.storage.is_overloaded());
    }

    #[test]
    fn zero_batch_time_rejected() {
        let input = BlastFreezerInput { batch_hours: 0.0, ..BlastFreezerInput::default() };
        assert_eq!(BlastFreezerCalculator.calculate(&input).unwrap_err().field(), "batch_hours");
    }
}
