use crate::utils::error::{Result, SendError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> SendError {
    SendError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Rejects empty paths and paths with NUL bytes.
pub fn validate_device_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid("path", path, "Device path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid("path", path, "Device path contains null bytes"));
    }
    Ok(())
}

pub fn validate_baud_rate(baud_rate: u32) -> Result<()> {
    if baud_rate == 0 {
        return Err(invalid("baud_rate", baud_rate, "Baud rate must be nonzero"));
    }
    Ok(())
}
