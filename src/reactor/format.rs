const SUFFIXES: [(f64, &str); 4] = [
    (1e12, "T"),
    (1e9, "B"),
    (1e6, "M"),
    (1e3, "K"),
];

/// Format a temperature for display.
///
/// Below 1000 the value is rounded to a whole number with no suffix. Above
/// that the largest matching power of 1000 (K, M, B, T) is used with one
/// decimal place. Everything from 10^12 upward stays in T, so the Planck
/// temperature renders as a very long T figure.
pub fn format_temperature(temp: f64) -> String {
    SUFFIXES
        .iter()
        .find(|(scale, _)| temp >= *scale)
        .map(|(scale, suffix)| format!("{:.1}{}", temp / scale, suffix))
        .unwrap_or_else(|| format!("{:.0}", temp))
}

/// Formatted temperature with the degree sign, as shown in the header and readout
pub fn format_celsius(temp: f64) -> String {
    format!("{}°C", format_temperature(temp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_thousand_has_no_suffix() {
        assert_eq!(format_temperature(0.0), "0");
        assert_eq!(format_temperature(20.0), "20");
        assert_eq!(format_temperature(999.0), "999");
        assert_eq!(format_temperature(512.3), "512");
    }

    #[test]
    fn test_suffix_boundaries() {
        assert_eq!(format_temperature(1000.0), "1.0K");
        assert_eq!(format_temperature(20_000.0), "20.0K");
        assert_eq!(format_temperature(999_000.0), "999.0K");
        assert_eq!(format_temperature(1_500_000.0), "1.5M");
        assert_eq!(format_temperature(2_300_000_000.0), "2.3B");
        assert_eq!(format_temperature(4.2e12), "4.2T");
        assert_eq!(format_temperature(16_750.0), "16.8K");
        assert_eq!(format_temperature(999.5), "1000");
    }

    #[test]
    fn test_planck_temperature_stays_in_trillions() {
        let s = format_temperature(1.417e32);
        assert!(s.ends_with('T'), "expected T suffix, got {}", s);
        let value: f64 = s.trim_end_matches('T').parse().unwrap();
        assert!(
            ((value - 1.417e20) / 1.417e20).abs() < 1e-9,
            "Planck temperature should render as ~1.417e20 T, got {}",
            s
        );
    }

    #[test]
    fn test_celsius_reading() {
        assert_eq!(format_celsius(20.0), "20°C");
        assert_eq!(format_celsius(20_000.0), "20.0K°C");
    }
}
