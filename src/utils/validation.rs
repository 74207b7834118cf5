use crate::utils::error::{RentalError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RentalError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_rate(field_name: &str, value: f64) -> Result<()> {
    if value.is_nan() || value <= 0.0 {
        return Err(RentalError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be greater than 0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if value.is_nan() || value < 0.0 {
        return Err(RentalError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must not be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_rental_days(days: u32) -> Result<()> {
    if days == 0 {
        return Err(RentalError::InvalidArgument {
            field: "days".to_string(),
            value: days.to_string(),
            reason: "Rental duration must be at least 1 day".to_string(),
        });
    }
    Ok(())
}
