//! Room geometry: surface areas and volume of a rectangular cold room

use crate::errors::{check_positive, CalcResult};

/// Inside dimensions of a rectangular room and its door (metres)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoomGeometry {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub door_width: f64,
    pub door_height: f64,
}

/// Derived surface areas (m²) and volume (m³)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoomAreas {
    /// All four walls
    pub wall: f64,
    pub ceiling: f64,
    pub floor: f64,
    /// Door clear opening
    pub door: f64,
    pub volume: f64,
}

impl RoomGeometry {
    /// Build a geometry, rejecting zero, negative and non-finite dimensions
    pub fn new(
        length: f64,
        width: f64,
        height: f64,
        door_width: f64,
        door_height: f64,
    ) -> CalcResult<Self> {
        let geometry = Self { length, width, height, door_width, door_height };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Check every dimension is finite and positive
    pub fn validate(&self) -> CalcResult<()> {
        check_positive("length", self.length)?;
        check_positive("width", self.width)?;
        check_positive("height", self.height)?;
        check_positive("door_width", self.door_width)?;
        check_positive("door_height", self.door_height)?;
        Ok(())
    }

    /// Surface areas and volume
    pub fn areas(&self) -> RoomAreas {
        let floor = self.length * self.width;
        RoomAreas {
            wall: 2.0 * (self.length * self.height) + 2.0 * (self.width * self.height),
            ceiling: floor,
            floor,
            door: self.door_area(),
            volume: self.volume(),
        }
    }

    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    pub fn door_area(&self) -> f64 {
        self.door_width * self.door_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    #[test]
    fn areas_of_cold_room() {
        let g = RoomGeometry::new(6.0, 4.0, 3.0, 1.2, 2.1).unwrap();
        let a = g.areas();
        assert_eq!(a.wall, 60.0);
        assert_eq!(a.ceiling, 24.0);
        assert_eq!(a.floor, 24.0);
        assert_eq!(a.volume, 72.0);
        assert!((a.door - 2.52).abs() < 1e-12);
    }

    #[test]
    fn rejects_flat_room() {
        let err = RoomGeometry::new(6.0, 4.0, 0.0, 1.2, 2.1).unwrap_err();
        assert_eq!(err, CalcError::NonPositive { field: "height", value: 0.0 });
    }

    #[test]
    fn rejects_nan_door() {
        let err = RoomGeometry::new(6.0, 4.0, 3.0, f64::NAN, 2.1).unwrap_err();
        assert_eq!(err, CalcError::InvalidValue { field: "door_width" });
    }
}
