//! Core traits for load calculators
//!
//! These traits define the interface every room calculator implements.
//! Keep them simple - a calculator is a pure function from input to report.

use crate::errors::CalcResult;
use crate::sheet::LoadSheet;

/// Kind of refrigerated room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RoomKind {
    /// Chilled storage above freezing
    ColdRoom,
    /// Frozen storage
    Freezer,
    /// Batch freezing of warm product
    BlastFreezer,
}

impl RoomKind {
    /// Every room kind
    pub const ALL: [Self; 3] = [Self::ColdRoom, Self::Freezer, Self::BlastFreezer];

    /// Identifier used in documents and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Self::ColdRoom => "cold-room",
            Self::Freezer => "freezer",
            Self::BlastFreezer => "blast-freezer",
        }
    }

    /// Human-readable title
    pub fn title(&self) -> &'static str {
        match self {
            Self::ColdRoom => "Cold Room",
            Self::Freezer => "Freezer",
            Self::BlastFreezer => "Blast Freezer",
        }
    }

    /// Parse an identifier; `_` and spaces are accepted in place of `-`
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL.iter().copied().find(|k| {
            k.id().len() == id.len()
                && k
                    .id()
                    .bytes()
                    .zip(id.bytes())
                    .all(|(a, b)| a == b.to_ascii_lowercase() || (a == b'-' && (b == b'_' || b == b' ')))
        })
    }
}

/// A single heat load, expressed as a 24-hour average in kW
pub trait HeatLoad {
    /// Load in kW
    fn kw(&self) -> f64;
}

impl HeatLoad for f64 {
    fn kw(&self) -> f64 {
        *self
    }
}

/// Room load calculator - implement this for each room kind
pub trait LoadCalculator {
    /// Room, conditions and product description
    type Input;

    /// Component breakdown and summary
    type Report: LoadReport;

    /// Which room kind this calculator handles
    fn kind(&self) -> RoomKind;

    /// Multiplier applied to the summed load
    fn safety_factor(&self) -> f64;

    /// Compute the cooling load
    fn calculate(&self, input: &Self::Input) -> CalcResult<Self::Report>;
}

/// Common view of every room report
pub trait LoadReport {
    /// Final load including the safety factor (kW)
    fn final_kw(&self) -> f64;

    /// Final load in tons of refrigeration
    fn final_tr(&self) -> f64;

    /// Flattened line-by-line breakdown for display
    fn sheet(&self) -> LoadSheet;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_kind_ids_round_trip() {
        for kind in RoomKind::ALL {
            assert_eq!(RoomKind::from_id(kind.id()), Some(kind));
        }
    }

    #[test]
    fn room_kind_accepts_variants() {
        assert_eq!(RoomKind::from_id("Blast_Freezer"), Some(RoomKind::BlastFreezer));
        assert_eq!(RoomKind::from_id("cold room"), Some(RoomKind::ColdRoom));
        assert_eq!(RoomKind::from_id("chiller"), None);
    }

    #[test]
    fn plain_kw_is_a_heat_load() {
        assert_eq!(2.5f64.kw(), 2.5);
    }
}
