//! Speed conversions between meters per second and kilometers per hour.
//!
//! `1 m/s = 3600 m/h = 3.6 km/h`, so both directions are a linear scale by
//! [`KMH_PER_MPS`]. Non-finite inputs propagate through IEEE-754 arithmetic.

/// Kilometers per hour in one meter per second.
pub const KMH_PER_MPS: f64 = 3.6;

/// Convert a speed in m/s to km/h.
#[must_use]
pub const fn meters_per_second_to_kmh(speed_mps: f64) -> f64 {
    speed_mps * KMH_PER_MPS
}

/// Convert a speed in km/h to m/s.
#[must_use]
pub const fn kmh_to_meters_per_second(speed_kmh: f64) -> f64 {
    speed_kmh / KMH_PER_MPS
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    use super::{kmh_to_meters_per_second, meters_per_second_to_kmh};

    #[rstest]
    #[case(10.0, 36.0)]
    #[case(0.0, 0.0)]
    #[case(-5.0, -18.0)]
    #[case(30.0, 108.0)]
    fn mps_to_kmh_scales_by_three_point_six(#[case] mps: f64, #[case] kmh: f64) {
        assert_relative_eq!(meters_per_second_to_kmh(mps), kmh);
    }

    #[test]
    fn kmh_to_mps_inverts_highway_speed() {
        assert_relative_eq!(kmh_to_meters_per_second(108.0), 30.0);
        assert_relative_eq!(kmh_to_meters_per_second(-36.0), -10.0);
    }

    #[test]
    fn nan_propagates() {
        assert!(meters_per_second_to_kmh(f64::NAN).is_nan());
        assert!(kmh_to_meters_per_second(f64::INFINITY).is_infinite());
    }

    proptest! {
        #[test]
        fn kmh_round_trip_is_identity(x in -1.0e9f64..1.0e9) {
            let back = meters_per_second_to_kmh(kmh_to_meters_per_second(x));
            prop_assert!((back - x).abs() <= 1e-9 * x.abs().max(1.0));
        }
    }
}
