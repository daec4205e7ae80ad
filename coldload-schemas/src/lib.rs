//! Input Documents for coldload
//!
//! ## Overview
//!
//! The calculators in `coldload-core` take fully resolved inputs. This crate
//! sits in front of them and deals with what people actually type:
//!
//! 1. **Documents**: one serde document per room kind, grouped into `room`,
//!    `conditions`, `product` and `equipment` sections. Every field is
//!    optional.
//! 2. **Lenient numbers**: numbers may be written as strings; anything that
//!    does not parse counts as missing and takes the room default. Zero is a
//!    value, not a missing field.
//! 3. **Presets**: worked examples embedded in the binary and indexed once.
//!
//! Documents are JSON or TOML, tagged with `kind`:
//!
//! ```toml
//! kind = "freezer"
//!
//! [room]
//! length = 6
//! wall_thickness = 125
//!
//! [product]
//! name = "Fish"
//! daily_load = "800"
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use coldload_core::rooms::calculate;
//! use coldload_schemas::{CalculationRequest, PRESETS};
//!
//! let mut request = PRESETS.get("freezer-default")?.request.clone();
//! request.apply_assignment("conditions.room_temp=-22")?;
//!
//! let report = calculate(&request.into_input())?;
//! assert!(report.summary().final_kw > 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod documents;
pub mod lenient;
pub mod presets;

pub use documents::{
    BlastFreezerDocument, CalculationRequest, ColdRoomDocument, DocumentFormat, FreezerDocument,
    RoomDocument,
};
pub use presets::{Preset, PresetRegistry, PRESETS};

/// Document and preset errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported input format: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("{field} does not apply to a {kind}")]
    NotApplicable { field: String, kind: &'static str },

    #[error("Document is a {found}, expected a {expected}")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Expected key=value, got: {0}")]
    InvalidAssignment(String),

    #[error("Preset not found: {0}")]
    UnknownPreset(String),
}
