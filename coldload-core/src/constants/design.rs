//! Design Constants for Cold-Store Load Calculations
//!
//! Rule-of-thumb values used by refrigeration designers when a quantity is
//! not measured for the specific room. Each constant names the room type(s)
//! that use it.

// ===== SAFETY FACTORS =====

/// Safety factor for cold rooms and storage freezers (+10%).
pub const SAFETY_FACTOR_STORAGE: f64 = 1.10;

/// Safety factor for blast freezers (+5%).
///
/// Blast freezer loads are dominated by the product, which is specified
/// precisely per batch, so a smaller margin is used.
pub const SAFETY_FACTOR_BLAST: f64 = 1.05;

/// Largest safety factor accepted by the aggregation step.
pub const SAFETY_FACTOR_MAX: f64 = 2.0;

// ===== AIR CHANGES =====

/// Air changes per hour for a cold room (1/h).
pub const AIR_CHANGES_COLD_ROOM: f64 = 0.3;

/// Air changes per hour for a storage freezer (1/h).
pub const AIR_CHANGES_FREEZER: f64 = 0.5;

/// Air changes per hour for a blast freezer (1/h).
///
/// Loading trolleys in and out of the tunnel each batch.
pub const AIR_CHANGES_BLAST_FREEZER: f64 = 1.0;

// ===== PEOPLE =====

/// Heat given off by one person working in a refrigerated room (kW).
///
/// Grows as the room gets colder because of heavier activity and clothing;
/// 0.407 kW corresponds to roughly -20 °C.
///
/// Source: ASHRAE Refrigeration Handbook, occupancy heat equivalent table
pub const PERSON_HEAT_KW: f64 = 0.407;

// ===== DOORS =====

/// Door heat transfer coefficient for cold-room doors (W/m²·K).
pub const DOOR_HEAT_W_PER_M2_K: f64 = 50.0;

/// Door openings per day that correspond to an operating fraction of 1.0.
pub const DOOR_OPENINGS_FULL_FRACTION: f64 = 100.0;

/// Heat gain through an open freezer door (W/m² of clear opening).
pub const DOOR_INFILTRATION_W_PER_M2: f64 = 1800.0;

/// Time the door stands open per opening (s).
pub const DOOR_OPEN_SECONDS: f64 = 60.0;

/// Door clear opening above which anti-sweat door heaters are fitted (m²).
pub const DOOR_HEATER_THRESHOLD_M2: f64 = 1.8;

// ===== HEATERS =====

/// Peripheral (door frame) heater rating for cold rooms (W/m² of door).
pub const PERIPHERAL_HEATER_W_PER_M2: f64 = 100.0;

/// Drain-pan (tray) heater rating for cold rooms (W).
pub const TRAY_HEATER_W: f64 = 500.0;

// ===== CONSTRUCTION =====

/// U-factor used when the insulation material or thickness is unknown (W/m²·K).
pub const DEFAULT_U_FACTOR: f64 = 0.25;
