use serde::{Deserialize, Serialize};

use crate::{DisplayType, MiscAttrs, PropsError};

/// The named props of a Clay button. For details, check the docs:
/// https://clayui.com/docs/components/button/api.html
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonOptions {
    /// Flag to indicate if button is used within an alert component.
    pub alert: bool,
    /// Flag to indicate if the button should be borderless.
    pub borderless: bool,
    /// Renders the button as a block element.
    pub block: bool,
    /// Determines how the button is displayed.
    pub display_type: DisplayType,
    /// Flag to indicate if button should be monospaced.
    pub monospaced: bool,
    /// Flag to indicate if the button needs to have an outline.
    pub outline: bool,
    /// Indicates button should be a small variant.
    pub small: bool,
    /// The `type` attribute of the underlying `<button>`.
    #[serde(rename = "type")]
    pub button_type: String,
    /// Extra classes, rendered in front of the Clay classes.
    #[serde(alias = "className")]
    pub class: String,
    /// Text that replaces the rendered children.
    #[serde(skip)]
    pub children: Option<String>,
    /// Drop the click handler passed alongside these options.
    #[serde(skip)]
    pub remove_on_click: bool,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            alert: false,
            borderless: false,
            block: false,
            display_type: DisplayType::Primary,
            monospaced: false,
            outline: false,
            small: false,
            button_type: "button".to_string(),
            class: String::new(),
            children: None,
            remove_on_click: false,
        }
    }
}

impl ButtonOptions {
    /// Fold misc attributes onto these options, in order, last write wins.
    ///
    /// Returns the merged options plus the attributes that are not button props;
    /// those belong on the rendered element as plain DOM attributes. `class` and
    /// `className` add to the Clay classes, `children` replaces the content and
    /// a `null` `onClick` removes the handler.
    pub fn merge(mut self, misc: &MiscAttrs) -> Result<(Self, MiscAttrs), PropsError> {
        let mut rest = MiscAttrs::new();

        for (key, value) in misc {
            match key.as_str() {
                "alert" => self.alert = value.expect_bool(key)?,
                "borderless" => self.borderless = value.expect_bool(key)?,
                "block" => self.block = value.expect_bool(key)?,
                "monospaced" => self.monospaced = value.expect_bool(key)?,
                "outline" => self.outline = value.expect_bool(key)?,
                "small" => self.small = value.expect_bool(key)?,
                "displayType" | "display_type" => {
                    self.display_type = DisplayType::from_name(value.expect_text(key)?)?
                }
                "type" => self.button_type = value.expect_text(key)?.to_string(),
                "class" | "className" => self.class = value.expect_text(key)?.to_string(),
                "children" => self.children = Some(value.expect_children(key)?),
                "onClick" | "on_click" => {
                    value.expect_handler_removal(key)?;
                    self.remove_on_click = true;
                }
                _ => rest.insert(key.clone(), value.clone()),
            }
        }

        Ok((self, rest))
    }

    /// The Clay class list for these options.
    pub fn classes(&self) -> Vec<String> {
        let mut classes: Vec<String> = self.class.split_whitespace().map(String::from).collect();
        classes.push("btn".to_string());

        if self.alert {
            classes.push("alert-btn".into());
        }

        if self.block {
            classes.push("btn-block".into());
        }

        if self.monospaced {
            classes.push("btn-monospaced".into());
        }

        if self.borderless {
            classes.push("btn-outline-borderless".into());
        }

        if self.small {
            classes.push("btn-sm".into());
        }

        if self.outline || self.borderless {
            classes.push(format!("btn-outline-{}", self.display_type));
        } else {
            classes.push(format!("btn-{}", self.display_type));
        }

        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttrValue;

    #[test]
    fn test_default_classes() {
        let options = ButtonOptions::default();
        assert_eq!(options.classes(), vec!["btn", "btn-primary"]);
        assert_eq!(options.button_type, "button");
    }

    #[test]
    fn test_all_flags_classes() {
        let options = ButtonOptions {
            alert: true,
            block: true,
            monospaced: true,
            small: true,
            display_type: DisplayType::Danger,
            ..ButtonOptions::default()
        };
        assert_eq!(
            options.classes(),
            vec![
                "btn",
                "alert-btn",
                "btn-block",
                "btn-monospaced",
                "btn-sm",
                "btn-danger"
            ]
        );
    }

    #[test]
    fn test_outline_and_borderless_classes() {
        let outline = ButtonOptions {
            outline: true,
            display_type: DisplayType::Secondary,
            ..ButtonOptions::default()
        };
        assert_eq!(outline.classes(), vec!["btn", "btn-outline-secondary"]);

        let borderless = ButtonOptions {
            borderless: true,
            ..ButtonOptions::default()
        };
        assert_eq!(
            borderless.classes(),
            vec!["btn", "btn-outline-borderless", "btn-outline-primary"]
        );
    }

    #[test]
    fn test_misc_overrides_named_props() {
        let options = ButtonOptions {
            alert: true,
            ..ButtonOptions::default()
        };
        let misc: MiscAttrs = [("alert", AttrValue::Bool(false))].into_iter().collect();

        let (merged, rest) = options.merge(&misc).unwrap();
        assert!(!merged.alert);
        assert!(rest.is_empty());
        assert!(!merged.classes().contains(&"alert-btn".to_string()));
    }

    #[test]
    fn test_misc_last_write_wins() {
        let mut misc = MiscAttrs::new();
        misc.insert("displayType", "success");
        misc.insert("display_type", "warning");
        misc.insert("type", "submit");

        let (merged, _) = ButtonOptions::default().merge(&misc).unwrap();
        assert_eq!(merged.display_type, DisplayType::Warning);
        assert_eq!(merged.button_type, "submit");
    }

    #[test]
    fn test_unknown_keys_pass_through_in_order() {
        let mut misc = MiscAttrs::new();
        misc.add_attribute("title", "Save");
        misc.insert("small", true);
        misc.add_boolean_attribute("disabled");
        misc.insert("tabindex", 2);

        let (merged, rest) = ButtonOptions::default().merge(&misc).unwrap();
        assert!(merged.small);

        let keys: Vec<&str> = rest.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["title", "disabled", "tabindex"]);
    }

    #[test]
    fn test_class_adds_to_clay_classes() {
        let mut misc = MiscAttrs::new();
        misc.insert("class", "my-btn");
        misc.insert("className", "toolbar-btn wide");

        let (merged, rest) = ButtonOptions::default().merge(&misc).unwrap();
        assert!(rest.is_empty());
        assert_eq!(
            merged.classes(),
            vec!["toolbar-btn", "wide", "btn", "btn-primary"]
        );
    }

    #[test]
    fn test_children_and_on_click_are_not_dom_attrs() {
        let mut misc = MiscAttrs::new();
        misc.insert("children", "Override");
        misc.insert("onClick", AttrValue::Null);
        misc.add_attribute("title", "kept");

        let (merged, rest) = ButtonOptions::default().merge(&misc).unwrap();
        assert_eq!(merged.children.as_deref(), Some("Override"));
        assert!(merged.remove_on_click);

        let keys: Vec<&str> = rest.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["title"]);
    }

    #[test]
    fn test_on_click_cannot_be_set_from_attrs() {
        let misc: MiscAttrs = [("onClick", "alert(1)")].into_iter().collect();
        assert!(matches!(
            ButtonOptions::default().merge(&misc),
            Err(PropsError::InvalidAttr { .. })
        ));
    }

    #[test]
    fn test_invalid_display_type_in_misc() {
        let misc: MiscAttrs = [("displayType", "sparkly")].into_iter().collect();
        assert_eq!(
            ButtonOptions::default().merge(&misc),
            Err(PropsError::UnknownDisplayType("sparkly".to_string()))
        );
    }

    #[test]
    fn test_wrong_value_kind_for_known_key() {
        let misc: MiscAttrs = [("block", "yes")].into_iter().collect();
        assert_eq!(
            ButtonOptions::default().merge(&misc),
            Err(PropsError::InvalidAttr {
                key: "block".to_string(),
                expected: "boolean",
            })
        );
    }

    #[test]
    fn test_deserialize_camel_case() {
        let options: ButtonOptions =
            serde_json::from_str(r#"{"displayType": "link", "outline": true, "type": "reset"}"#)
                .unwrap();
        assert_eq!(options.display_type, DisplayType::Link);
        assert!(options.outline);
        assert_eq!(options.button_type, "reset");
        assert_eq!(options.children, None);
        assert!(!options.alert);
    }
}
