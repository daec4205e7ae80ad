//! Internal loads: people, lights, motors and heaters inside the room
//!
//! Every item is a power that runs for part of the day. Each is reported as
//! its 24-hour average so it can be added to the other loads:
//!
//! ```text
//! q_avg = P · hours / 24
//! ```

use crate::constants::design::{PERIPHERAL_HEATER_W_PER_M2, PERSON_HEAT_KW, TRAY_HEATER_W};
use crate::constants::units::{daily_average, W_PER_KW};

/// People working in the room (kW)
pub fn occupancy_kw(people: f64, working_hours: f64) -> f64 {
    daily_average(people * PERSON_HEAT_KW, working_hours)
}

/// Lighting given in watts (kW)
pub fn lighting_kw(watts: f64, operating_hours: f64) -> f64 {
    daily_average(watts / W_PER_KW, operating_hours)
}

/// Other equipment given in watts (kW)
pub fn equipment_kw(watts: f64, operating_hours: f64) -> f64 {
    daily_average(watts / W_PER_KW, operating_hours)
}

/// Evaporator fan motors (kW)
pub fn fan_motors_kw(rating_kw: f64, count: f64, fan_hours: f64) -> f64 {
    daily_average(rating_kw * count, fan_hours)
}

/// A set of identical electric heaters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HeaterGroup {
    /// Number of heaters
    pub quantity: f64,
    /// Rating of one heater (kW)
    pub capacity_kw: f64,
}

impl HeaterGroup {
    pub fn new(quantity: f64, capacity_kw: f64) -> Self {
        Self { quantity, capacity_kw }
    }

    /// A single heater of the given rating
    pub fn single(capacity_kw: f64) -> Self {
        Self::new(1.0, capacity_kw)
    }

    /// Connected load of the group (kW)
    pub fn installed_kw(&self) -> f64 {
        self.quantity * self.capacity_kw
    }

    /// Average load when energised for `hours` per day (kW)
    pub fn average_kw(&self, hours: f64) -> f64 {
        daily_average(self.installed_kw(), hours)
    }
}

/// Fixed heaters of a cold room sized from the door
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColdRoomHeaters {
    /// Door-frame heaters (kW)
    pub peripheral: f64,
    /// Drain-pan heater (kW)
    pub tray: f64,
}

impl ColdRoomHeaters {
    /// 100 W per m² of door for the frame plus a 500 W tray heater
    pub fn for_door(door_area: f64, operating_hours: f64) -> Self {
        let peripheral_w = door_area * PERIPHERAL_HEATER_W_PER_M2;
        Self {
            peripheral: daily_average(peripheral_w / W_PER_KW, operating_hours),
            tray: daily_average(TRAY_HEATER_W / W_PER_KW, operating_hours),
        }
    }

    pub fn total(&self) -> f64 {
        self.peripheral + self.tray
    }
}

impl crate::traits::HeatLoad for ColdRoomHeaters {
    fn kw(&self) -> f64 {
        self.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn three_people_for_a_shift() {
        // 3 * 0.407 kW * 8 / 24
        assert!(close(occupancy_kw(3.0, 8.0), 0.407));
    }

    #[test]
    fn lights_and_equipment_in_watts() {
        assert!(close(lighting_kw(300.0, 24.0), 0.3));
        assert!(close(equipment_kw(750.0, 12.0), 0.375));
    }

    #[test]
    fn fans_run_part_time() {
        assert!(close(fan_motors_kw(0.37, 6.0, 24.0), 2.22));
        assert!(close(fan_motors_kw(0.37, 6.0, 12.0), 1.11));
    }

    #[test]
    fn heater_group() {
        let group = HeaterGroup::new(2.0, 1.5);
        assert_eq!(group.installed_kw(), 3.0);
        assert!(close(group.average_kw(8.0), 1.0));
        assert_eq!(HeaterGroup::default().average_kw(24.0), 0.0);
    }

    #[test]
    fn cold_room_heaters_from_door() {
        let heaters = ColdRoomHeaters::for_door(2.52, 24.0);
        assert!(close(heaters.peripheral, 0.252));
        assert!(close(heaters.tray, 0.5));
        assert!(close(heaters.total(), 0.752));
    }
}
