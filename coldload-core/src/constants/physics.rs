//! Physical Constants for coldload
//!
//! Properties of air and water used by the infiltration and product load
//! formulas. Values are taken at conditions typical of cold-store design
//! (sea level, roughly 0-35 °C), which is the accuracy the formulas need.

// ===== AIR PROPERTIES =====

/// Density of air used for infiltration mass flow (kg/m³).
///
/// Rounded design value. Cold air is denser (1.29 kg/m³ at 0 °C) and warm
/// ambient air lighter (1.15 kg/m³ at 35 °C); the design value sits between.
///
/// Source: ASHRAE Refrigeration Handbook, infiltration load method
pub const AIR_DENSITY_KG_PER_M3: f64 = 1.2;

/// Specific heat capacity of dry air (kJ/kg·K).
///
/// Used for the sensible part of infiltration loads.
///
/// Source: NIST Chemistry WebBook
pub const AIR_SPECIFIC_HEAT_KJ_PER_KG_K: f64 = 1.006;

/// Enthalpy difference between ambient and room air per unit volume (kJ/m³).
///
/// Design value for freezer and blast-freezer infiltration, equivalent to
/// 0.1203 kJ/L. Includes both the sensible and the latent (moisture) part of
/// cooling and drying the infiltrated air.
pub const AIR_ENTHALPY_DIFF_KJ_PER_M3: f64 = 120.3;

/// The same enthalpy difference expressed per litre (kJ/L).
pub const AIR_ENTHALPY_DIFF_KJ_PER_L: f64 = AIR_ENTHALPY_DIFF_KJ_PER_M3 / 1000.0;

// ===== TEMPERATURE LIMITS =====

/// Absolute zero in Celsius (°C).
///
/// No temperature input may go below this.
///
/// Source: NIST Special Publication 330 (2019)
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// Coldest room temperature the formulas are meant for (°C).
///
/// Blast freezers run to about -40 °C; deep-freeze storage rarely below -60 °C.
pub const ROOM_TEMP_MIN_C: f64 = -60.0;

/// Warmest ambient temperature the formulas are meant for (°C).
pub const AMBIENT_TEMP_MAX_C: f64 = 60.0;

/// Relative humidity bounds (%).
pub const HUMIDITY_MIN_PCT: f64 = 0.0;
/// Saturated air.
pub const HUMIDITY_MAX_PCT: f64 = 100.0;
