use crate::utils::error::{BaroError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BaroError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BaroError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BaroError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_volume(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BaroError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Volume must be a positive number of mL".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_pressure(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BaroError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Absolute pressure must be a positive number of atm".to_string(),
        });
    }
    Ok(())
}

/// Parses a `name=value` pair as used by `--volume lungs=4500`.
pub fn parse_key_value_pair(field_name: &str, pair: &str) -> Result<(String, f64)> {
    let (name, raw) = pair.split_once('=').ok_or_else(|| BaroError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: pair.to_string(),
        reason: "Expected NAME=VALUE".to_string(),
    })?;

    validate_non_empty_string(field_name, name)?;

    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| BaroError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: pair.to_string(),
            reason: format!("'{}' is not a number", raw),
        })?;
    validate_positive_volume(field_name, value)?;

    Ok((name.trim().to_string(), value))
}
