use std::cell::RefCell;
use std::rc::Rc;

use clay_shared::MiscAttrs;
use web_sys::Element;
use yew::prelude::*;

use crate::dom::{apply_attributes, remove_attributes};
use crate::logging::Logger;

/// Write misc attributes onto the element behind `node_ref` after every render.
///
/// Keys written by a previous render that are missing from `attrs` are removed,
/// so the element always carries exactly the current set.
#[hook]
pub fn use_misc_attrs(node_ref: NodeRef, attrs: MiscAttrs, component: &'static str) {
    let applied: Rc<RefCell<Vec<String>>> = use_mut_ref(Vec::new);

    use_effect(move || {
        let Some(element) = node_ref.cast::<Element>() else {
            return;
        };

        let mut applied = applied.borrow_mut();
        let stale = applied
            .iter()
            .filter(|key| attrs.get(key.as_str()).is_none())
            .map(String::as_str);

        let result = remove_attributes(&element, stale).and_then(|_| apply_attributes(&element, &attrs));
        if let Err(e) = result {
            Logger::error_with_component(component, &format!("Failed to apply attributes: {e}"));
        }

        *applied = attrs.iter().map(|(key, _)| key.clone()).collect();
    });
}
