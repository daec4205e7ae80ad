//! Core load-calculation engine for coldload
//!
//! Computes the refrigeration cooling load of cold rooms, freezers and blast
//! freezers from room geometry, design conditions and product intake.
//!
//! Key constraints:
//! - Pure arithmetic, no I/O
//! - No heap allocation (builds without `std`)
//! - Every component reported as a 24-hour average in kW
//!
//! ```
//! use coldload_core::{LoadCalculator, LoadReport};
//! use coldload_core::rooms::{FreezerCalculator, FreezerInput};
//!
//! let report = FreezerCalculator.calculate(&FreezerInput::default())?;
//!
//! // Size the plant
//! assert!(report.final_tr() > 0.0);
//! assert!(report.shr() > 0.0 && report.shr() <= 1.0);
//! # Ok::<(), coldload_core::CalcError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

// Logging goes through these so the crate still builds with the `log`
// feature disabled.
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

pub mod catalog;
pub mod constants;
pub mod errors;
pub mod geometry;
pub mod loads;
pub mod lookup;
pub mod rooms;
pub mod sheet;
pub mod traits;

// Public API
pub use errors::{CalcError, CalcResult};
pub use geometry::{RoomAreas, RoomGeometry};
pub use rooms::{
    calculate, BlastFreezerCalculator, BlastFreezerInput, BlastFreezerReport, ColdRoomCalculator,
    ColdRoomInput, ColdRoomReport, FreezerCalculator, FreezerInput, FreezerReport, RoomInput,
    RoomReport,
};
pub use sheet::{LoadLine, LoadSheet, Section};
pub use traits::{HeatLoad, LoadCalculator, LoadReport, RoomKind};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
