use std::fmt::{Display, Formatter};

use crate::error::ValidationError;

/// Normalized two-letter region identifier, e.g. `NY`.
///
/// Only produced by [`validate_region`], so holding one means the value is exactly
/// two ASCII uppercase letters.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct RegionCode(String);

impl RegionCode {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for RegionCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trims and uppercases raw user input, then checks it is a two-letter code.
pub fn validate_region(raw: &str) -> Result<RegionCode, ValidationError> {
    let normalized = raw.trim().to_uppercase();

    if normalized.is_empty() {
        return Err(ValidationError::Missing);
    }

    if normalized.len() != 2 || !normalized.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidFormat { normalized });
    }

    Ok(RegionCode(normalized))
}
