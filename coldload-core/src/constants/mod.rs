//! Constants for coldload Core
//!
//! Centralised, documented constants used by the load formulas. All numeric
//! values live here so the formulas read as engineering equations, not magic
//! numbers.
//!
//! ## Organization
//!
//! - **Physics**: air properties and temperature limits
//! - **Units**: kW / TR / BTU/h conversions and time bases
//! - **Design**: rule-of-thumb values (air changes, people, doors, heaters,
//!   safety factors)
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include the unit in the constant name
//! 3. Name the room types that use a design value in its documentation

/// Air properties and temperature limits.
pub mod physics;

/// Unit conversions and time bases.
pub mod units;

/// Design rules of thumb for cold stores.
pub mod design;

pub use physics::{
    AIR_DENSITY_KG_PER_M3, AIR_SPECIFIC_HEAT_KJ_PER_KG_K, AIR_ENTHALPY_DIFF_KJ_PER_M3,
};

pub use units::{
    KW_PER_TR, BTU_PER_HOUR_PER_KW, SECONDS_PER_DAY, HOURS_PER_DAY,
};

pub use design::{
    SAFETY_FACTOR_STORAGE, SAFETY_FACTOR_BLAST, PERSON_HEAT_KW, DEFAULT_U_FACTOR,
};
