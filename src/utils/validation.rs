use crate::utils::error::{LocatorError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(LocatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LocatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| LocatorError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_distinct_paths(field_a: &str, a: &str, field_b: &str, b: &str) -> Result<()> {
    if std::path::Path::new(a) == std::path::Path::new(b) {
        return Err(LocatorError::InvalidConfigValueError {
            field: field_b.to_string(),
            value: b.to_string(),
            reason: format!("Must differ from {}", field_a),
        });
    }
    Ok(())
}
