use clay_shared::MiscAttrs;
use web_sys::Element;

use crate::error::AdapterError;

/// Resolve a mount point by element id.
pub fn mount_point(id: &str) -> Result<Element, AdapterError> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .ok_or_else(|| AdapterError::MountPointNotFound(id.to_string()))
}

/// Write misc attributes onto an element. Attributes whose value has no DOM
/// representation (`false`, `null`) are removed instead.
pub fn apply_attributes(element: &Element, attrs: &MiscAttrs) -> Result<(), AdapterError> {
    for (key, value) in attrs {
        match value.dom_value() {
            Some(dom_value) => element
                .set_attribute(key, &dom_value)
                .map_err(AdapterError::dom)?,
            None => element.remove_attribute(key).map_err(AdapterError::dom)?,
        }
    }
    Ok(())
}

/// Remove the given attributes from an element.
pub fn remove_attributes<'a>(
    element: &Element,
    keys: impl IntoIterator<Item = &'a str>,
) -> Result<(), AdapterError> {
    for key in keys {
        element.remove_attribute(key).map_err(AdapterError::dom)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn detached_div() -> Element {
        gloo::utils::document().create_element("div").unwrap()
    }

    #[wasm_bindgen_test]
    fn test_apply_attributes_sets_and_removes() {
        let element = detached_div();
        element.set_attribute("hidden", "").unwrap();

        let mut attrs = MiscAttrs::new();
        attrs.add_attribute("title", "Save");
        attrs.add_boolean_attribute("disabled");
        attrs.insert("hidden", false);
        attrs.insert("tabindex", 3);

        apply_attributes(&element, &attrs).unwrap();

        assert_eq!(element.get_attribute("title").as_deref(), Some("Save"));
        assert_eq!(element.get_attribute("disabled").as_deref(), Some(""));
        assert_eq!(element.get_attribute("tabindex").as_deref(), Some("3"));
        assert!(!element.has_attribute("hidden"));
    }

    #[wasm_bindgen_test]
    fn test_invalid_attribute_name_is_an_error() {
        let element = detached_div();
        let attrs: MiscAttrs = [("not valid", "x")].into_iter().collect();

        assert!(matches!(
            apply_attributes(&element, &attrs),
            Err(AdapterError::Dom(_))
        ));
    }

    #[wasm_bindgen_test]
    fn test_remove_attributes() {
        let element = detached_div();
        element.set_attribute("title", "x").unwrap();
        element.set_attribute("role", "y").unwrap();

        remove_attributes(&element, ["title"]).unwrap();
        assert!(!element.has_attribute("title"));
        assert!(element.has_attribute("role"));
    }

    #[wasm_bindgen_test]
    fn test_missing_mount_point() {
        assert_eq!(
            mount_point("no-such-node"),
            Err(AdapterError::MountPointNotFound("no-such-node".to_string()))
        );
    }
}
