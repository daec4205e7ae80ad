//! Lookup Tables for Thermal Properties
//!
//! ## Motivation
//!
//! Two inputs of the load formulas come from tables rather than from the user:
//!
//! - the **U-factor** of an insulated panel, which depends on the insulation
//!   material and the panel thickness;
//! - the **respiration heat** of fresh produce, which depends on the storage
//!   temperature.
//!
//! Designers read both from printed tables. This module holds those tables and
//! the interpolation rules used between their entries.
//!
//! ## Physics Background
//!
//! ### Panel U-factor
//!
//! For a sandwich panel the insulation core dominates the thermal resistance,
//! so the U-factor is close to the conductivity divided by the thickness:
//!
//! ```text
//! U ≈ k / t
//!
//! Where:
//! - k = core conductivity (W/m·K): PUF 0.023, XPS 0.029, EPS 0.036, Rockwool 0.040
//! - t = core thickness (m)
//! ```
//!
//! The table stores the rounded values panel manufacturers publish for the
//! standard thicknesses.
//!
//! ### Respiration
//!
//! Fruit and vegetables keep respiring in storage and release heat. The rate
//! roughly doubles every 5 °C, and tables quote it at 0, 5 and 10 °C:
//!
//! ```text
//! t <= 0        f(0)
//! 0 < t <= 5    f(0) + (f(5) - f(0)) · t/5
//! 5 < t <= 10   f(5) + (f(10) - f(5)) · (t-5)/5
//! t > 10        f(10)
//! ```
//!
//! ## Table Design
//!
//! Tables are `const` data indexed by small enums, so lookups are
//! allocation-free and usable without `std`. Unknown keys fall back to a
//! documented default and log a warning instead of failing the calculation.

use crate::constants::design::DEFAULT_U_FACTOR;

/// Result type for lookup operations
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors that can occur during lookup operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupError {
    /// Input was clamped to table bounds
    InputClamped { original: f64, clamped: f64 },
    /// Key not present in the table
    UnknownKey,
}

/// Insulation core material of the room panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InsulationMaterial {
    /// Polyurethane foam
    #[cfg_attr(feature = "serde", serde(rename = "PUF"))]
    Puf,
    /// Expanded polystyrene
    #[cfg_attr(feature = "serde", serde(rename = "EPS"))]
    Eps,
    /// Extruded polystyrene
    #[cfg_attr(feature = "serde", serde(rename = "XPS"))]
    Xps,
    /// Mineral wool
    Rockwool,
}

impl InsulationMaterial {
    /// Every material, in table row order
    pub const ALL: [Self; 4] = [Self::Puf, Self::Eps, Self::Xps, Self::Rockwool];

    /// Display name as used in input documents
    pub fn name(&self) -> &'static str {
        match self {
            Self::Puf => "PUF",
            Self::Eps => "EPS",
            Self::Xps => "XPS",
            Self::Rockwool => "Rockwool",
        }
    }

    /// Parse a material name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }

    fn row(&self) -> usize {
        match self {
            Self::Puf => 0,
            Self::Eps => 1,
            Self::Xps => 2,
            Self::Rockwool => 3,
        }
    }
}

impl Default for InsulationMaterial {
    fn default() -> Self {
        Self::Puf
    }
}

/// Standard panel thicknesses (mm), table column order
pub const INSULATION_THICKNESSES_MM: [u16; 8] = [50, 60, 75, 80, 100, 125, 150, 200];

/// U-factors (W/m²·K) per material row and thickness column
const U_FACTOR_VALUES: [[f64; 8]; 4] = [
    // PUF
    [0.460, 0.383, 0.307, 0.288, 0.230, 0.184, 0.153, 0.115],
    // EPS
    [0.720, 0.600, 0.480, 0.450, 0.360, 0.288, 0.240, 0.180],
    // XPS
    [0.580, 0.483, 0.387, 0.363, 0.290, 0.232, 0.193, 0.145],
    // Rockwool
    [0.800, 0.667, 0.533, 0.500, 0.400, 0.320, 0.267, 0.200],
];

/// Panel U-factor table
///
/// Memory: 32 f64 values, 256 bytes
pub struct UFactorTable {
    thicknesses: &'static [u16; 8],
    values: &'static [[f64; 8]; 4],
}

impl UFactorTable {
    /// Manufacturer values for the standard thicknesses
    pub const STANDARD: Self = Self {
        thicknesses: &INSULATION_THICKNESSES_MM,
        values: &U_FACTOR_VALUES,
    };

    /// Thicknesses covered by the table (mm)
    pub fn thicknesses(&self) -> &'static [u16; 8] {
        self.thicknesses
    }

    /// U-factor for a listed thickness, `UnknownKey` otherwise
    pub fn exact(&self, material: InsulationMaterial, thickness_mm: f64) -> LookupResult<f64> {
        self.thicknesses
            .iter()
            .position(|&t| libm::fabs(t as f64 - thickness_mm) < 1e-6)
            .map(|col| self.values[material.row()][col])
            .ok_or(LookupError::UnknownKey)
    }

    /// U-factor for a listed thickness, falling back to the default U-factor
    pub fn u_factor(&self, material: InsulationMaterial, thickness_mm: f64) -> f64 {
        match self.exact(material, thickness_mm) {
            Ok(u) => u,
            Err(_) => {
                log_warn!(
                    "No U-factor for {} at {} mm, using {} W/m²K",
                    material.name(),
                    thickness_mm,
                    DEFAULT_U_FACTOR
                );
                DEFAULT_U_FACTOR
            }
        }
    }

    /// U-factor interpolated between neighbouring thicknesses
    ///
    /// Thicknesses outside the table are clamped to the nearest end and
    /// reported with a warning.
    pub fn interpolate(&self, material: InsulationMaterial, thickness_mm: f64) -> f64 {
        match self.interpolate_checked(material, thickness_mm) {
            Ok(u) => u,
            Err(LookupError::InputClamped { original, clamped }) => {
                log_warn!(
                    "U-factor lookup: thickness clamped ({} mm -> {} mm)",
                    original,
                    clamped
                );
                self.interpolate_within(material, clamped)
            }
            Err(LookupError::UnknownKey) => {
                log_warn!(
                    "No U-factor for {} at {} mm, using {} W/m²K",
                    material.name(),
                    thickness_mm,
                    DEFAULT_U_FACTOR
                );
                DEFAULT_U_FACTOR
            }
        }
    }

    /// Interpolated U-factor, `InputClamped` when the thickness is off-table
    pub fn interpolate_checked(
        &self,
        material: InsulationMaterial,
        thickness_mm: f64,
    ) -> LookupResult<f64> {
        if !thickness_mm.is_finite() {
            return Err(LookupError::UnknownKey);
        }
        let (clamped, was_clamped) = self.clamp_thickness(thickness_mm);
        if was_clamped {
            return Err(LookupError::InputClamped {
                original: thickness_mm,
                clamped,
            });
        }
        Ok(self.interpolate_within(material, clamped))
    }

    /// Clamp thickness to table bounds
    fn clamp_thickness(&self, thickness_mm: f64) -> (f64, bool) {
        let min = self.thicknesses[0] as f64;
        let max = self.thicknesses[self.thicknesses.len() - 1] as f64;
        if thickness_mm < min {
            (min, true)
        } else if thickness_mm > max {
            (max, true)
        } else {
            (thickness_mm, false)
        }
    }

    /// Linear interpolation for a thickness already inside the table
    fn interpolate_within(&self, material: InsulationMaterial, thickness_mm: f64) -> f64 {
        let row = &self.values[material.row()];
        for col in 0..self.thicknesses.len() - 1 {
            let lo = self.thicknesses[col] as f64;
            let hi = self.thicknesses[col + 1] as f64;
            if thickness_mm >= lo && thickness_mm <= hi {
                let frac = (thickness_mm - lo) / (hi - lo);
                return row[col] + (row[col + 1] - row[col]) * frac;
            }
        }
        row[row.len() - 1]
    }
}

/// Respiration heat of stored produce (W/tonne) at 0, 5 and 10 °C
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RespirationCurve {
    /// Heat at 0 °C and below
    pub at_0c: f64,
    /// Heat at 5 °C
    pub at_5c: f64,
    /// Heat at 10 °C and above
    pub at_10c: f64,
}

impl RespirationCurve {
    /// Produce that does not respire (packaged goods, frozen food)
    pub const NONE: Self = Self { at_0c: 0.0, at_5c: 0.0, at_10c: 0.0 };

    /// Build a curve from its three table points
    pub const fn new(at_0c: f64, at_5c: f64, at_10c: f64) -> Self {
        Self { at_0c, at_5c, at_10c }
    }

    /// Respiration factor at `temp_c`, piecewise linear and flat outside 0-10 °C
    pub fn factor_at(&self, temp_c: f64) -> f64 {
        if temp_c <= 0.0 {
            self.at_0c
        } else if temp_c <= 5.0 {
            self.at_0c + (self.at_5c - self.at_0c) * (temp_c / 5.0)
        } else if temp_c <= 10.0 {
            self.at_5c + (self.at_10c - self.at_5c) * ((temp_c - 5.0) / 5.0)
        } else {
            self.at_10c
        }
    }

    /// True when the produce gives off no heat at any temperature
    pub fn is_inert(&self) -> bool {
        self.at_0c == 0.0 && self.at_5c == 0.0 && self.at_10c == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        libm::fabs(a - b) < 1e-9
    }

    #[test]
    fn exact_u_factor() {
        let table = UFactorTable::STANDARD;
        assert!(close(table.u_factor(InsulationMaterial::Puf, 100.0), 0.230));
        assert!(close(table.u_factor(InsulationMaterial::Eps, 150.0), 0.240));
    }

    #[test]
    fn unknown_thickness_falls_back() {
        let table = UFactorTable::STANDARD;
        assert_eq!(table.exact(InsulationMaterial::Puf, 90.0), Err(LookupError::UnknownKey));
        assert!(close(table.u_factor(InsulationMaterial::Puf, 90.0), DEFAULT_U_FACTOR));
    }

    #[test]
    fn interpolation_between_columns() {
        let table = UFactorTable::STANDARD;
        // Halfway between 100 mm (0.230) and 125 mm (0.184)
        let u = table.interpolate(InsulationMaterial::Puf, 112.5);
        assert!(close(u, 0.207));
        // Exact columns interpolate to the table value
        assert!(close(table.interpolate(InsulationMaterial::Xps, 75.0), 0.387));
    }

    #[test]
    fn interpolation_clamps_off_table() {
        let table = UFactorTable::STANDARD;
        assert_eq!(
            table.interpolate_checked(InsulationMaterial::Puf, 300.0),
            Err(LookupError::InputClamped { original: 300.0, clamped: 200.0 })
        );
        assert!(close(table.interpolate(InsulationMaterial::Puf, 300.0), 0.115));
        assert!(close(table.interpolate(InsulationMaterial::Puf, 10.0), 0.460));
    }

    #[test]
    fn non_finite_thickness_uses_default() {
        let table = UFactorTable::STANDARD;
        assert_eq!(
            table.interpolate_checked(InsulationMaterial::Eps, f64::NAN),
            Err(LookupError::UnknownKey)
        );
        assert!(close(table.interpolate(InsulationMaterial::Eps, f64::NAN), DEFAULT_U_FACTOR));
        assert!(close(table.interpolate(InsulationMaterial::Eps, f64::INFINITY), DEFAULT_U_FACTOR));
    }

    #[test]
    fn thicker_panels_insulate_better() {
        let table = UFactorTable::STANDARD;
        for material in InsulationMaterial::ALL {
            let mut previous = f64::MAX;
            for &t in table.thicknesses() {
                let u = table.u_factor(material, t as f64);
                assert!(u < previous, "{} at {} mm", material.name(), t);
                previous = u;
            }
        }
    }

    #[test]
    fn material_names() {
        assert_eq!(InsulationMaterial::from_name("puf"), Some(InsulationMaterial::Puf));
        assert_eq!(InsulationMaterial::from_name(" Rockwool "), Some(InsulationMaterial::Rockwool));
        assert_eq!(InsulationMaterial::from_name("cork"), None);
    }

    #[test]
    fn respiration_interpolation() {
        let apples = RespirationCurve::new(12.0, 25.0, 48.0);
        assert!(close(apples.factor_at(-2.0), 12.0));
        assert!(close(apples.factor_at(0.0), 12.0));
        assert!(close(apples.factor_at(2.5), 18.5));
        assert!(close(apples.factor_at(5.0), 25.0));
        assert!(close(apples.factor_at(7.5), 36.5));
        assert!(close(apples.factor_at(10.0), 48.0));
        assert!(close(apples.factor_at(15.0), 48.0));
    }

    #[test]
    fn inert_curve() {
        assert!(RespirationCurve::NONE.is_inert());
        assert_eq!(RespirationCurve::NONE.factor_at(4.0), 0.0);
        assert!(!RespirationCurve::new(1.0, 2.0, 3.0).is_inert());
    }
}
