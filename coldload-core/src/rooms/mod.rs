//! Room Load Calculators
//!
//! One calculator per room kind. Each takes a fully resolved input (every
//! default already applied) and returns a report with every component, the
//! summary after the safety factor, and a flattened [`LoadSheet`] view.
//!
//! | Room          | Product model       | Air change        | Safety |
//! |---------------|---------------------|-------------------|--------|
//! | Cold room     | sensible only       | sensible, 0.3 ACH | 1.10   |
//! | Freezer       | three-stage         | enthalpy, 0.5 ACH | 1.10   |
//! | Blast freezer | three-stage / batch | enthalpy, 1.0 ACH | 1.05   |
//!
//! [`calculate`] dispatches on a [`RoomInput`] when the kind is only known at
//! runtime (e.g. from an input document).

mod blast_freezer;
mod cold_room;
mod freezer;

pub use blast_freezer::{
    BlastFreezerCalculator, BlastFreezerInput, BlastFreezerReport, BlastHeaters,
    BlastInternalLoads, ComponentTonnage, EquipmentSummary,
};
pub use cold_room::{ColdRoomCalculator, ColdRoomInput, ColdRoomReport, MiscLoads};
pub use freezer::{FreezerCalculator, FreezerInput, FreezerInternalLoads, FreezerReport};

use crate::catalog::{Product, ProductProperties, PropertyOverrides};
use crate::constants::physics::{AMBIENT_TEMP_MAX_C, ROOM_TEMP_MIN_C};
use crate::constants::units::HOURS_PER_DAY;
use crate::errors::{check_non_negative, check_positive, check_range, CalcResult};
use crate::loads::SurfaceUFactors;
use crate::lookup::{InsulationMaterial, UFactorTable};
use crate::sheet::{LoadSheet, Section};
use crate::loads::LoadSummary;
use crate::traits::{LoadCalculator, LoadReport, RoomKind};

/// Insulated panel construction of the room envelope
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Construction {
    pub material: InsulationMaterial,
    /// Wall panel thickness (mm)
    pub wall_thickness_mm: f64,
    /// Ceiling panel thickness (mm)
    pub ceiling_thickness_mm: f64,
    /// Floor insulation thickness (mm)
    pub floor_thickness_mm: f64,
}

impl Construction {
    /// Same material and thickness on every surface
    pub fn uniform(material: InsulationMaterial, thickness_mm: f64) -> Self {
        Self {
            material,
            wall_thickness_mm: thickness_mm,
            ceiling_thickness_mm: thickness_mm,
            floor_thickness_mm: thickness_mm,
        }
    }

    /// U-factor of each surface from the standard panel table
    ///
    /// Thicknesses missing from the table fall back to 0.25 W/m²·K.
    pub fn u_factors(&self) -> CalcResult<SurfaceUFactors> {
        let table = UFactorTable::STANDARD;
        let walls = check_positive("wall_thickness", self.wall_thickness_mm)?;
        let ceiling = check_positive("ceiling_thickness", self.ceiling_thickness_mm)?;
        let floor = check_positive("floor_thickness", self.floor_thickness_mm)?;
        Ok(SurfaceUFactors {
            walls: table.u_factor(self.material, walls),
            ceiling: table.u_factor(self.material, ceiling),
            floor: table.u_factor(self.material, floor),
        })
    }
}

/// How much of the room the intake occupies
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StorageCapacity {
    /// Largest mass the room holds (kg)
    pub maximum_kg: f64,
    /// Mass brought in (kg)
    pub stored_kg: f64,
    /// `stored / maximum` (%)
    pub utilization_pct: f64,
}

impl StorageCapacity {
    pub fn new(maximum_kg: f64, stored_kg: f64) -> Self {
        let utilization_pct = if maximum_kg > 0.0 {
            stored_kg / maximum_kg * 100.0
        } else {
            0.0
        };
        Self { maximum_kg, stored_kg, utilization_pct }
    }

    /// More product than the room can hold
    pub fn is_overloaded(&self) -> bool {
        self.utilization_pct > 100.0
    }
}

/// Ambient minus room temperature after range checks
pub(crate) fn design_temperature_difference(ambient_c: f64, room_c: f64) -> CalcResult<f64> {
    let ambient = check_range("ambient_temp", ambient_c, ROOM_TEMP_MIN_C, AMBIENT_TEMP_MAX_C)?;
    let room = check_range("room_temp", room_c, ROOM_TEMP_MIN_C, AMBIENT_TEMP_MAX_C)?;
    if ambient < room {
        log_warn!("Ambient {} °C is below room {} °C; envelope gains set to zero", ambient, room);
    }
    Ok(ambient - room)
}

/// Hours per day, 0 to 24 inclusive
pub(crate) fn check_daily_hours(field: &'static str, hours: f64) -> CalcResult<f64> {
    check_range(field, hours, 0.0, HOURS_PER_DAY)
}

/// Catalog properties with the user's overrides applied
pub(crate) fn resolve_properties(
    product: &Product,
    overrides: &PropertyOverrides,
) -> CalcResult<ProductProperties> {
    let props = product.properties.with_overrides(overrides);
    check_non_negative("specific_heat_above", props.specific_heat_above)?;
    check_non_negative("specific_heat_below", props.specific_heat_below)?;
    check_non_negative("latent_heat", props.latent_heat)?;
    Ok(props)
}

/// Append the three summary lines shared by every report
pub(crate) fn push_summary(sheet: &mut LoadSheet, summary: &LoadSummary) {
    sheet.total(Section::Summary, "Total before safety", None, summary.total_before_safety_kw);
    sheet.line(Section::Summary, "Safety margin", None, summary.safety_load_kw);
    sheet.total(Section::Summary, "Design load", None, summary.final_kw);
}

/// Input for any room kind
#[derive(Debug, Clone, Copy)]
pub enum RoomInput {
    ColdRoom(ColdRoomInput),
    Freezer(FreezerInput),
    BlastFreezer(BlastFreezerInput),
}

impl RoomInput {
    /// Default input of a room kind
    pub fn defaults(kind: RoomKind) -> Self {
        match kind {
            RoomKind::ColdRoom => Self::ColdRoom(ColdRoomInput::default()),
            RoomKind::Freezer => Self::Freezer(FreezerInput::default()),
            RoomKind::BlastFreezer => Self::BlastFreezer(BlastFreezerInput::default()),
        }
    }

    pub fn kind(&self) -> RoomKind {
        match self {
            Self::ColdRoom(_) => RoomKind::ColdRoom,
            Self::Freezer(_) => RoomKind::Freezer,
            Self::BlastFreezer(_) => RoomKind::BlastFreezer,
        }
    }
}

/// Report for any room kind
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum RoomReport {
    ColdRoom(ColdRoomReport),
    Freezer(FreezerReport),
    BlastFreezer(BlastFreezerReport),
}

impl RoomReport {
    pub fn kind(&self) -> RoomKind {
        match self {
            Self::ColdRoom(_) => RoomKind::ColdRoom,
            Self::Freezer(_) => RoomKind::Freezer,
            Self::BlastFreezer(_) => RoomKind::BlastFreezer,
        }
    }

    pub fn summary(&self) -> &LoadSummary {
        match self {
            Self::ColdRoom(r) => &r.summary,
            Self::Freezer(r) => &r.summary,
            Self::BlastFreezer(r) => &r.summary,
        }
    }
}

impl LoadReport for RoomReport {
    fn final_kw(&self) -> f64 {
        self.summary().final_kw
    }

    fn final_tr(&self) -> f64 {
        self.summary().final_tr
    }

    fn sheet(&self) -> LoadSheet {
        match self {
            Self::ColdRoom(r) => r.sheet(),
            Self::Freezer(r) => r.sheet(),
            Self::BlastFreezer(r) => r.sheet(),
        }
    }
}

/// Run the calculator matching the input's room kind
pub fn calculate(input: &RoomInput) -> CalcResult<RoomReport> {
    let report = match input {
        RoomInput::ColdRoom(i) => RoomReport::ColdRoom(ColdRoomCalculator.calculate(i)?),
        RoomInput::Freezer(i) => RoomReport::Freezer(FreezerCalculator.calculate(i)?),
        RoomInput::BlastFreezer(i) => RoomReport::BlastFreezer(BlastFreezerCalculator.calculate(i)?),
    };
    log_debug!(
        "{}: {:.3} kW before safety, {:.3} kW design",
        report.kind().title(),
        report.summary().total_before_safety_kw,
        report.summary().final_kw
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    #[test]
    fn construction_uses_table_values() {
        let u = Construction::uniform(InsulationMaterial::Puf, 100.0).u_factors().unwrap();
        assert_eq!(u, SurfaceUFactors::uniform(0.230));
    }

    #[test]
    fn odd_thickness_falls_back() {
        let u = Construction::uniform(InsulationMaterial::Eps, 90.0).u_factors().unwrap();
        assert_eq!(u.walls, 0.25);
    }

    #[test]
    fn zero_thickness_rejected() {
        let err = Construction::uniform(InsulationMaterial::Puf, 0.0).u_factors().unwrap_err();
        assert_eq!(err.field(), "wall_thickness");
    }

    #[test]
    fn utilisation_of_empty_room() {
        let storage = StorageCapacity::new(0.0, 100.0);
        assert_eq!(storage.utilization_pct, 0.0);
        assert!(StorageCapacity::new(1000.0, 1500.0).is_overloaded());
    }

    #[test]
    fn hours_limited_to_one_day() {
        assert!(check_daily_hours("operating_hours", 24.0).is_ok());
        assert!(matches!(
            check_daily_hours("operating_hours", 25.0),
            Err(CalcError::OutOfRange { field: "operating_hours", .. })
        ));
    }

    #[test]
    fn dispatch_matches_kind() {
        for kind in RoomKind::ALL {
            let report = calculate(&RoomInput::defaults(kind)).unwrap();
            assert_eq!(report.kind(), kind);
            assert!(report.final_kw() > 0.0);
            assert_eq!(report.sheet().find("Design load").map(|l| l.kw), Some(report.final_kw()));
        }
    }
}
