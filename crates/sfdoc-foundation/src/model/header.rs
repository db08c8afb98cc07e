//! Header property schema shared by configuration and rendering

use serde::{Deserialize, Serialize};

/// Placeholder token resolved to the configured username.
pub const USERNAME_TOKEN: &str = "$username";
/// Placeholder token resolved to the formatted current date.
pub const DATE_TOKEN: &str = "$date";
/// Placeholder token resolved to the document's file name.
pub const FILENAME_TOKEN: &str = "$filename";

/// One configured header property: a display name plus a default value.
///
/// Values may embed placeholder tokens (`$username`, `$date`, `$filename`),
/// matched case-insensitively when a header is rendered. A property whose
/// value is exactly `$username` or `$date` is additionally rewritten on
/// every save by the field updater.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderProperty {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl HeaderProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Whether the updater rewrites this property with the username on save.
    pub fn is_username_backed(&self) -> bool {
        self.value == USERNAME_TOKEN
    }

    /// Whether the updater rewrites this property with the date on save.
    pub fn is_date_backed(&self) -> bool {
        self.value == DATE_TOKEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_field_detection_requires_exact_token() {
        assert!(HeaderProperty::new("Last Modified By", "$username").is_username_backed());
        assert!(HeaderProperty::new("Last Modified On", "$date").is_date_backed());

        // Embedded or decorated tokens render once but are not rewritten on save.
        assert!(!HeaderProperty::new("Author", "team: $username").is_username_backed());
        assert!(!HeaderProperty::new("Created", "$date ").is_date_backed());
        assert!(!HeaderProperty::new("Group", "").is_username_backed());
    }
}
