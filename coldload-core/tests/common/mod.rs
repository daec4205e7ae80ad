//! Common fixtures and assertion helpers for integration tests
//!
//! This module provides:
//! - Room inputs for the rooms used across several tests
//! - Tolerance-based float assertions

#![allow(dead_code)]

use coldload_core::catalog::find_product;
use coldload_core::geometry::RoomGeometry;
use coldload_core::rooms::{BlastFreezerInput, ColdRoomInput, FreezerInput};

/// Relative tolerance for load comparisons
pub const REL_TOLERANCE: f64 = 1e-9;

/// Assert two loads agree within `REL_TOLERANCE` (absolute near zero)
pub fn assert_close(actual: f64, expected: f64, what: &str) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= REL_TOLERANCE * scale,
        "{what}: expected {expected}, got {actual}"
    );
}

/// A produce cold room holding apples at 2 °C
pub fn apple_store() -> ColdRoomInput {
    ColdRoomInput {
        geometry: RoomGeometry {
            length: 10.0,
            width: 8.0,
            height: 4.0,
            door_width: 1.5,
            door_height: 2.4,
        },
        room_temp_c: 2.0,
        outgoing_temp_c: 2.0,
        incoming_temp_c: 20.0,
        daily_load_kg: 8000.0,
        product: find_product("Apples").expect("apples in catalog"),
        ..ColdRoomInput::default()
    }
}

/// An ice-cream hardening store
pub fn ice_cream_freezer() -> FreezerInput {
    FreezerInput {
        room_temp_c: -25.0,
        outgoing_temp_c: -25.0,
        incoming_temp_c: -6.0,
        product: find_product("Ice Cream").expect("ice cream in catalog"),
        ..FreezerInput::default()
    }
}

/// A poultry blast freezer taking fresh product
pub fn poultry_blast() -> BlastFreezerInput {
    BlastFreezerInput {
        incoming_temp_c: 4.0,
        outgoing_temp_c: -18.0,
        product: find_product("Poultry").expect("poultry in catalog"),
        ..BlastFreezerInput::default()
    }
}
