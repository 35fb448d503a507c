//! Configuration validation.

use crate::config::Config;
use crate::constants::scoring;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_selection(config)?;
    validate_candidates(config)?;
    validate_weights(config)?;
    validate_extract(config)?;
    Ok(())
}

fn invalid(message: String) -> Error {
    Error::ConfigValidation { message }
}

fn check_unit(name: &str, value: f64) -> Result<()> {
    if !(scoring::MIN..=scoring::MAX).contains(&value) {
        return Err(invalid(format!(
            "{name} must be between {} and {}, got {value}",
            scoring::MIN,
            scoring::MAX
        )));
    }
    Ok(())
}

/// Validate selection settings.
fn validate_selection(config: &Config) -> Result<()> {
    let selection = &config.selection;

    if selection.num_shorts == 0 {
        return Err(invalid("num_shorts must be at least 1".to_string()));
    }

    if selection.min_duration.is_nan() || selection.min_duration < 1.0 {
        return Err(invalid(format!(
            "min_duration must be at least 1 second, got {}",
            selection.min_duration
        )));
    }

    check_unit("overlap_threshold", selection.overlap_threshold)?;
    check_unit("footprint_threshold", selection.footprint_threshold)?;

    if selection.min_separation_floor.is_nan() || selection.min_separation_floor < 0.0 {
        return Err(invalid(format!(
            "min_separation_floor must be non-negative, got {}",
            selection.min_separation_floor
        )));
    }

    if selection.region_count == 0 {
        return Err(invalid("region_count must be at least 1".to_string()));
    }

    Ok(())
}

/// Validate candidate window settings.
fn validate_candidates(config: &Config) -> Result<()> {
    let candidates = &config.candidates;

    if candidates.step_size == 0 {
        return Err(invalid("step_size must be at least 1".to_string()));
    }

    if candidates.window_sizes.is_empty() {
        return Err(invalid("window_sizes must not be empty".to_string()));
    }

    if candidates.window_sizes.contains(&0) {
        return Err(invalid("window_sizes must all be positive".to_string()));
    }

    if candidates.max_candidates == 0 {
        return Err(invalid("max_candidates must be at least 1".to_string()));
    }

    Ok(())
}

/// Validate analyzer weights.
fn validate_weights(config: &Config) -> Result<()> {
    let weights = &config.weights;
    for (name, value) in [
        ("video", weights.video),
        ("audio", weights.audio),
        ("text", weights.text),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(format!(
                "weights.{name} must be non-negative, got {value}"
            )));
        }
    }

    if weights.video + weights.audio + weights.text <= 0.0 {
        return Err(invalid("at least one weight must be positive".to_string()));
    }

    Ok(())
}

/// Validate extraction settings.
fn validate_extract(config: &Config) -> Result<()> {
    let extract = &config.extract;

    if extract.threads == 0 {
        return Err(invalid("extract.threads must be at least 1".to_string()));
    }

    for (name, value) in [
        ("video_codec", &extract.video_codec),
        ("audio_codec", &extract.audio_codec),
        ("preset", &extract.preset),
        ("container", &extract.container),
    ] {
        if value.trim().is_empty() {
            return Err(invalid(format!("extract.{name} must not be empty")));
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_threshold_out_of_range() {
        let mut config = Config::default();
        config.selection.overlap_threshold = 1.5;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.selection.footprint_threshold = -0.1;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_num_shorts() {
        let mut config = Config::default();
        config.selection.num_shorts = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_min_duration() {
        let mut config = Config::default();
        config.selection.min_duration = 0.5;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_window_sizes() {
        let mut config = Config::default();
        config.candidates.window_sizes = vec![];
        assert!(validate_config(&config).is_err());

        config.candidates.window_sizes = vec![15, 0];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_step_and_regions() {
        let mut config = Config::default();
        config.candidates.step_size = 0;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.selection.region_count = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_weights() {
        let mut config = Config::default();
        config.weights.audio = -0.2;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.weights.video = 0.0;
        config.weights.audio = 0.0;
        config.weights.text = 0.0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("at least one weight"));
    }

    #[test]
    fn test_validate_zero_threads() {
        let mut config = Config::default();
        config.extract.threads = 0;
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { .. })
        ));
    }
}
