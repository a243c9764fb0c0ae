//! `wasm-bindgen` exports for JavaScript hosts. The generated `.d.ts` mirrors the
//! Rust entry points with JS-friendly argument types.

use clay_shared::{DisplayType, MiscAttrs};
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::{html, Callback, Html};

use crate::config::{configure, AdapterConfig};
use crate::logging::Logger;
use crate::mount;

fn text_children(children: Option<String>) -> Html {
    match children {
        Some(text) => html! { {text} },
        None => Html::default(),
    }
}

fn js_callback(function: Option<js_sys::Function>) -> Option<Callback<()>> {
    function.map(|function| {
        Callback::from(move |_| {
            if let Err(e) = function.call0(&JsValue::NULL) {
                Logger::error_with_component("bindings", &format!("onClick threw: {e:?}"));
            }
        })
    })
}

/// Accepts a plain object, `undefined` or `null`.
fn misc_attrs_from_js(value: &JsValue) -> Result<MiscAttrs, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(MiscAttrs::new());
    }

    let json = js_sys::JSON::stringify(value)
        .map_err(|_| JsError::new("miscAttrs could not be serialized"))?;
    let json = String::from(json);

    Ok(MiscAttrs::from_json(&json)?)
}

#[wasm_bindgen(js_name = render_clay_button)]
#[allow(clippy::too_many_arguments)]
pub fn render_clay_button_js(
    node: Element,
    alert: bool,
    borderless: bool,
    block: bool,
    display_type: &str,
    monospaced: bool,
    outline: bool,
    small: bool,
    children: Option<String>,
    on_click: Option<js_sys::Function>,
    misc_attrs: JsValue,
) -> Result<(), JsError> {
    let display_type = DisplayType::from_name(display_type)?;
    let misc_attrs = misc_attrs_from_js(&misc_attrs)?;

    mount::render_clay_button(
        &node,
        alert,
        borderless,
        block,
        display_type,
        monospaced,
        outline,
        small,
        text_children(children),
        js_callback(on_click),
        misc_attrs,
    )?;
    Ok(())
}

#[wasm_bindgen(js_name = render_clay_button_group)]
pub fn render_clay_button_group_js(
    node: Element,
    spaced: bool,
    vertical: bool,
    role: &str,
    children: Option<String>,
    misc_attrs: JsValue,
) -> Result<(), JsError> {
    let misc_attrs = misc_attrs_from_js(&misc_attrs)?;

    mount::render_clay_button_group(
        &node,
        spaced,
        vertical,
        role,
        text_children(children),
        misc_attrs,
    )?;
    Ok(())
}

#[wasm_bindgen(js_name = unmount_clay)]
pub fn unmount_js(node: Element) -> bool {
    mount::unmount(&node)
}

#[wasm_bindgen(js_name = set_clay_logging)]
pub fn set_logging_js(enable_logging: bool) {
    configure(AdapterConfig { enable_logging });
}
