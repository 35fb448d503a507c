//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing.

/// Parse and validate a requested number of shorts (at least 1).
pub fn parse_num_shorts(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid count"))?;

    if value == 0 {
        return Err("number of shorts must be at least 1".to_string());
    }

    Ok(value)
}

/// Parse and validate a strictly positive, finite number of seconds.
pub fn parse_positive_seconds(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(format!("seconds must be a positive number, got {value}"));
    }

    Ok(value)
}

/// Parse and validate a bounded float value.
///
/// # Arguments
///
/// * `s` - The string to parse
/// * `min` - Minimum allowed value (inclusive)
/// * `max` - Maximum allowed value (inclusive)
/// * `name` - Name of the parameter for error messages
pub fn parse_bounded_float(s: &str, min: f64, max: f64, name: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(min..=max).contains(&value) {
        return Err(format!(
            "{name} must be between {min} and {max}, got {value}"
        ));
    }

    Ok(value)
}

/// Parse and validate a minimum clip duration (1 to 600 seconds).
pub fn parse_min_duration(s: &str) -> Result<f64, String> {
    parse_bounded_float(s, 1.0, 600.0, "minimum duration")
}
