//! Property tests for invariants that hold for every valid room

mod common;

use coldload_core::loads::{LoadSummary, ProductLoad, TransmissionLoad, SurfaceUFactors};
use coldload_core::catalog::PRODUCTS;
use coldload_core::geometry::RoomGeometry;
use coldload_core::{ColdRoomCalculator, ColdRoomInput, FreezerCalculator, FreezerInput, LoadCalculator};
use proptest::prelude::*;

use common::assert_close;

proptest! {
    #[test]
    fn final_is_total_times_factor(total in 0.0f64..1.0e4, factor in 1.0f64..2.0) {
        let s = LoadSummary::from_total(total, factor).unwrap();
        assert_close(s.final_kw, total * factor, "final");
        assert_close(s.safety_load_kw + s.total_before_safety_kw, s.final_kw, "margin");
    }

    #[test]
    fn product_stages_never_negative(
        idx in 0usize..PRODUCTS.len(),
        t_in in -40.0f64..40.0,
        t_out in -40.0f64..40.0,
        mass in 0.0f64..10_000.0,
    ) {
        let load = ProductLoad::three_stage(mass, &PRODUCTS[idx].properties, t_in, t_out, 8.0);
        prop_assert!(load.sensible_above_kj >= 0.0);
        prop_assert!(load.latent_kj >= 0.0);
        prop_assert!(load.sensible_below_kj >= 0.0);
        if t_out >= t_in {
            prop_assert_eq!(load.total_kj(), 0.0);
        }
    }

    #[test]
    fn transmission_grows_with_temperature_difference(
        length in 1.0f64..30.0,
        width in 1.0f64..30.0,
        height in 2.0f64..10.0,
        dt in 0.0f64..80.0,
        extra in 0.1f64..20.0,
    ) {
        let areas = RoomGeometry::new(length, width, height, 1.0, 2.0).unwrap().areas();
        let u = SurfaceUFactors::uniform(0.23);
        let low = TransmissionLoad::calculate(&areas, u, dt).total();
        let high = TransmissionLoad::calculate(&areas, u, dt + extra).total();
        prop_assert!(high > low);
    }

    #[test]
    fn cold_room_load_rises_with_ambient(ambient in 5.0f64..50.0, step in 0.5f64..10.0) {
        let base = ColdRoomInput { ambient_temp_c: ambient, ..ColdRoomInput::default() };
        let hotter = ColdRoomInput { ambient_temp_c: ambient + step, ..base };
        let a = ColdRoomCalculator.calculate(&base).unwrap();
        let b = ColdRoomCalculator.calculate(&hotter).unwrap();
        prop_assert!(b.summary.final_kw > a.summary.final_kw);
    }

    #[test]
    fn freezer_components_non_negative(
        room in -40.0f64..-5.0,
        mass in 0.0f64..5000.0,
        openings in 0.0f64..200.0,
    ) {
        let input = FreezerInput {
            room_temp_c: room,
            outgoing_temp_c: room,
            daily_load_kg: mass,
            door_openings_per_day: openings,
            ..FreezerInput::default()
        };
        let r = FreezerCalculator.calculate(&input).unwrap();
        prop_assert!(r.transmission.total() >= 0.0);
        prop_assert!(r.product.total() >= 0.0);
        prop_assert!(r.door.total() >= 0.0);
        prop_assert!(r.latent_kw >= 0.0 && r.sensible_kw >= 0.0);
        prop_assert!(r.shr() >= 0.0 && r.shr() <= 1.0);
    }
}
