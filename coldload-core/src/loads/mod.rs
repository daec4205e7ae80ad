//! Refrigeration Load Components
//!
//! ## Overview
//!
//! A cold store's refrigeration plant must remove every watt of heat that
//! enters the room. Designers split that heat into independent components,
//! compute each from a closed-form rule, and add them:
//!
//! | Component     | Heat source                                   | Module          |
//! |---------------|-----------------------------------------------|-----------------|
//! | Transmission  | Conduction through walls, ceiling, floor      | `transmission`  |
//! | Product       | Cooling (and freezing) incoming goods         | `product`       |
//! | Respiration   | Living produce giving off heat                | `respiration`   |
//! | Air change    | Warm, moist air leaking in                    | `infiltration`  |
//! | Door opening  | Air exchange while the door is open           | `infiltration`  |
//! | Internal      | People, lights, fans, equipment, heaters      | `internal`      |
//!
//! The sum is multiplied by a safety factor in [`summary`].
//!
//! ## Units
//!
//! Every component is reported as a 24-hour average in kW. Components that
//! run for part of the day (people, lights, heaters) are scaled by
//! `hours / 24`; energies that must be removed within a pull-down or batch
//! time (product) are divided by that time.
//!
//! ## Usage Example
//!
//! ```rust
//! use coldload_core::geometry::RoomGeometry;
//! use coldload_core::loads::{LoadSummary, SurfaceUFactors, TransmissionLoad};
//! use coldload_core::traits::HeatLoad;
//!
//! let areas = RoomGeometry::new(6.0, 4.0, 3.0, 1.2, 2.1)?.areas();
//! let transmission = TransmissionLoad::calculate(&areas, SurfaceUFactors::uniform(0.23), 31.0);
//!
//! let summary = LoadSummary::aggregate(&[&transmission as &dyn HeatLoad], 1.1)?;
//! assert!(summary.final_kw > transmission.total());
//! # Ok::<(), coldload_core::CalcError>(())
//! ```

mod infiltration;
mod internal;
mod product;
mod respiration;
mod summary;
mod transmission;

pub use infiltration::{sensible_fraction, AirChangeLoad, DoorLoad};
pub use internal::{
    equipment_kw, fan_motors_kw, lighting_kw, occupancy_kw, ColdRoomHeaters, HeaterGroup,
};
pub use product::ProductLoad;
pub use respiration::RespirationLoad;
pub use summary::LoadSummary;
pub use transmission::{SurfaceLoad, SurfaceUFactors, TransmissionLoad};
