use serde::{Deserialize, Serialize};

use crate::{MiscAttrs, PropsError};

/// Class of the wrapper put around each child of a spaced group.
pub const GROUP_ITEM_CLASS: &str = "btn-group-item";

/// The named props of a Clay button group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupOptions {
    /// Adds spacing between the buttons of the group.
    pub spaced: bool,
    /// Stacks the buttons vertically.
    pub vertical: bool,
    /// The ARIA role of the group container. Passed through as-is.
    pub role: String,
    /// Extra classes, rendered in front of the Clay classes.
    #[serde(alias = "className")]
    pub class: String,
    /// Text that replaces the group's children.
    #[serde(skip)]
    pub children: Option<String>,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            spaced: false,
            vertical: false,
            role: "group".to_string(),
            class: String::new(),
            children: None,
        }
    }
}

impl GroupOptions {
    /// See [`crate::ButtonOptions::merge`].
    pub fn merge(mut self, misc: &MiscAttrs) -> Result<(Self, MiscAttrs), PropsError> {
        let mut rest = MiscAttrs::new();

        for (key, value) in misc {
            match key.as_str() {
                "spaced" => self.spaced = value.expect_bool(key)?,
                "vertical" => self.vertical = value.expect_bool(key)?,
                "role" => self.role = value.expect_text(key)?.to_string(),
                "class" | "className" => self.class = value.expect_text(key)?.to_string(),
                "children" => self.children = Some(value.expect_children(key)?),
                _ => rest.insert(key.clone(), value.clone()),
            }
        }

        Ok((self, rest))
    }

    pub fn classes(&self) -> Vec<String> {
        let mut classes: Vec<String> = self.class.split_whitespace().map(String::from).collect();

        if self.vertical {
            classes.push("btn-group-vertical".to_string());
        } else {
            classes.push("btn-group".to_string());
        }

        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttrValue;

    #[test]
    fn test_defaults() {
        let options = GroupOptions::default();
        assert_eq!(options.role, "group");
        assert_eq!(options.classes(), vec!["btn-group"]);
    }

    #[test]
    fn test_vertical_class() {
        let options = GroupOptions {
            vertical: true,
            ..GroupOptions::default()
        };
        assert_eq!(options.classes(), vec!["btn-group-vertical"]);
    }

    #[test]
    fn test_role_is_verbatim() {
        let mut misc = MiscAttrs::new();
        misc.insert("role", "Tool Bar ");
        misc.insert("aria-label", "Actions");

        let (merged, rest) = GroupOptions::default().merge(&misc).unwrap();
        assert_eq!(merged.role, "Tool Bar ");
        assert_eq!(rest.len(), 1);
        assert!(rest.get("aria-label").is_some());
    }

    #[test]
    fn test_misc_overrides_flags() {
        let options = GroupOptions {
            spaced: true,
            ..GroupOptions::default()
        };
        let misc: MiscAttrs = [("spaced", false), ("vertical", true)].into_iter().collect();

        let (merged, _) = options.merge(&misc).unwrap();
        assert!(!merged.spaced);
        assert!(merged.vertical);
    }

    #[test]
    fn test_class_and_children_overrides() {
        let options = GroupOptions {
            class: "actions".to_string(),
            ..GroupOptions::default()
        };
        let mut misc = MiscAttrs::new();
        misc.insert("className", "toolbar");
        misc.insert("children", AttrValue::Null);

        let (merged, rest) = options.merge(&misc).unwrap();
        assert!(rest.is_empty());
        assert_eq!(merged.classes(), vec!["toolbar", "btn-group"]);
        assert_eq!(merged.children.as_deref(), Some(""));
    }

    #[test]
    fn test_role_must_be_text() {
        let misc: MiscAttrs = [("role", true)].into_iter().collect();
        assert!(matches!(
            GroupOptions::default().merge(&misc),
            Err(PropsError::InvalidAttr { .. })
        ));
    }
}
