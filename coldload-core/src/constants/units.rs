//! Unit Conversion Constants
//!
//! Refrigeration capacity is quoted in three units depending on the audience:
//! kW (SI), tons of refrigeration (TR, equipment catalogues) and BTU/h
//! (North American practice). The engine computes kW and converts at the end.

/// Kilowatts per ton of refrigeration (kW/TR).
///
/// One TR is the heat absorbed by melting one short ton of ice in 24 hours:
/// 12 000 BTU/h = 3.517 kW.
pub const KW_PER_TR: f64 = 3.517;

/// Watts per ton of refrigeration (W/TR).
pub const W_PER_TR: f64 = KW_PER_TR * 1000.0;

/// BTU per hour per kilowatt (BTU/h per kW).
///
/// Rounded design value (exact: 3412.142).
pub const BTU_PER_HOUR_PER_KW: f64 = 3412.0;

/// Watts per kilowatt.
pub const W_PER_KW: f64 = 1000.0;

/// Litres per cubic metre.
pub const L_PER_M3: f64 = 1000.0;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Hours per day. Loads are averaged over this period.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = SECONDS_PER_HOUR * HOURS_PER_DAY;

/// Cubic feet per minute in one cubic metre per hour.
pub const CFM_PER_M3_PER_HOUR: f64 = 0.588_578;

/// Convert a steady load in kW to TR
pub fn kw_to_tr(kw: f64) -> f64 {
    kw / KW_PER_TR
}

/// Convert a load in TR to kW
pub fn tr_to_kw(tr: f64) -> f64 {
    tr * KW_PER_TR
}

/// Convert a steady load in kW to BTU/h
pub fn kw_to_btu_per_hour(kw: f64) -> f64 {
    kw * BTU_PER_HOUR_PER_KW
}

/// Energy delivered in one day by a steady load (kW -> kJ/day)
pub fn kw_to_kj_per_day(kw: f64) -> f64 {
    kw * SECONDS_PER_DAY
}

/// Steady load equivalent to an energy spread over `hours` (kJ -> kW)
///
/// Returns 0 for a non-positive duration; callers validate durations first.
pub fn kj_over_hours_to_kw(kj: f64, hours: f64) -> f64 {
    if hours <= 0.0 {
        return 0.0;
    }
    kj / (hours * SECONDS_PER_HOUR)
}

/// Scale a load that runs `hours` per day to its 24-hour average
pub fn daily_average(kw: f64, hours: f64) -> f64 {
    kw * hours / HOURS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        libm::fabs(a - b) < 1e-9
    }

    #[test]
    fn tr_round_trip_is_consistent() {
        assert!(close(kw_to_tr(KW_PER_TR), 1.0));
        assert!(close(tr_to_kw(2.0), 7.034));
    }

    #[test]
    fn btu_conversion() {
        assert!(close(kw_to_btu_per_hour(1.0), 3412.0));
    }

    #[test]
    fn energy_spread_over_hours() {
        // 36 000 kJ over 10 hours is 1 kW
        assert!(close(kj_over_hours_to_kw(36_000.0, 10.0), 1.0));
        assert_eq!(kj_over_hours_to_kw(36_000.0, 0.0), 0.0);
    }

    #[test]
    fn half_day_runs_at_half_average() {
        assert!(close(daily_average(2.0, 12.0), 1.0));
        assert!(close(kw_to_kj_per_day(1.0), 86_400.0));
    }
}
