use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::PropsError;

/// The Clay button styles. Follows the bootstrap coloring scheme.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DisplayType {
    #[default]
    Primary,
    Secondary,
    Link,
    Success,
    Warning,
    Danger,
    Info,
    Unstyled,
}

impl DisplayType {
    /// Parse the lowercase style name used by Clay (`"primary"`, `"danger"`, ...).
    pub fn from_name(name: &str) -> Result<Self, PropsError> {
        name.parse()
            .map_err(|_| PropsError::UnknownDisplayType(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_is_primary() {
        assert_eq!(DisplayType::default(), DisplayType::Primary);
    }

    #[test]
    fn test_names_are_lowercase() {
        assert_eq!(DisplayType::Secondary.to_string(), "secondary");
        assert_eq!(DisplayType::Unstyled.as_ref(), "unstyled");

        for display_type in DisplayType::iter() {
            let name = display_type.to_string();
            assert_eq!(DisplayType::from_name(&name), Ok(display_type));
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert_eq!(
            DisplayType::from_name("fancy"),
            Err(PropsError::UnknownDisplayType("fancy".to_string()))
        );
        // Clay names are case sensitive
        assert!(DisplayType::from_name("Primary").is_err());
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&DisplayType::Danger).unwrap();
        assert_eq!(json, "\"danger\"");

        let parsed: DisplayType = serde_json::from_str("\"info\"").unwrap();
        assert_eq!(parsed, DisplayType::Info);
    }
}
