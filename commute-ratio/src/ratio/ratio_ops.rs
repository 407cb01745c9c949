/// transit duration divided by driving duration. a driving duration that is
/// zero (no route) or not a positive number yields NaN, never a division by zero.
pub fn transit_to_drive_ratio(transit_duration: f64, driving_duration: f64) -> f64 {
    if driving_duration > 0.0 {
        transit_duration / driving_duration
    } else {
        f64::NAN
    }
}

#[cfg(test)]
mod tests {
    use super::transit_to_drive_ratio;

    #[test]
    fn test_ratio() {
        assert_eq!(transit_to_drive_ratio(1200.0, 600.0), 2.0);
        assert_eq!(transit_to_drive_ratio(0.0, 600.0), 0.0);
        assert_eq!(transit_to_drive_ratio(450.0, 600.0), 0.75);
    }

    #[test]
    fn test_zero_driving_duration_is_nan() {
        assert!(transit_to_drive_ratio(600.0, 0.0).is_nan());
        assert!(transit_to_drive_ratio(0.0, 0.0).is_nan());
        assert!(transit_to_drive_ratio(600.0, -0.0).is_nan());
        assert!(transit_to_drive_ratio(600.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_never_infinite_for_non_negative_driving() {
        for d in [0.0, 1e-300, 1.0, 60.0, 3600.0] {
            for t in [0.0, 1.0, 600.0, 7200.0] {
                let r = transit_to_drive_ratio(t, d);
                assert!(r.is_nan() || (r >= 0.0 && r != f64::NEG_INFINITY), "t={t} d={d}");
            }
        }
    }
}
