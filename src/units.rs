//! Temperature unit conversions shared by the daily and hourly record types.
//!
//! Both record constructors must agree on the exact formula, so this is the
//! single implementation for the whole crate.

/// Converts a temperature in degrees Fahrenheit to degrees Celsius.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) / 1.8
}

/// Converts a temperature in degrees Celsius to degrees Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_known_values() {
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
    }

    #[test]
    fn round_trip_is_exact_without_rounding() {
        for f in [-40.0, 0.0, 32.0, 60.0, 98.6, 212.0] {
            assert_eq!(celsius_to_fahrenheit(fahrenheit_to_celsius(f)), f);
        }
    }

    #[test]
    fn negative_forty_is_the_fixed_point() {
        assert_eq!(fahrenheit_to_celsius(-40.0), -40.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }
}
