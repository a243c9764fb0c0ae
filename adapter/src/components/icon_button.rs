use clay_shared::MiscAttrs;
use yew::prelude::*;

use super::{ClayButton, ClayButtonProps, ClayIcon};

/// Props for ClayButtonWithIcon. For details, check the docs:
/// [https://clayui.com/docs/components/button/api.html#buttonwithicon]
#[derive(Debug, Properties, PartialEq, Clone)]
pub struct ClayButtonWithIconProps {
    /// Path to the spritemap that contains your SVG icons.
    #[prop_or_default]
    pub spritemap: String,

    /// String identifying the SVG from the spritemap that you want to render.
    pub symbol: String,

    /// Icon buttons are monospaced unless this is `Some(false)`.
    #[prop_or_default]
    pub monospaced: Option<bool>,

    /// Props passed down to the wrapped ClayButton. Its `monospaced` and
    /// `children` are replaced.
    #[prop_or_else(default_button_props)]
    pub button: ClayButtonProps,

    /// Attributes for the underlying SVG of the icon.
    #[prop_or_default]
    pub icon_attrs: MiscAttrs,
}

fn default_button_props() -> ClayButtonProps {
    yew::props!(ClayButtonProps {})
}

#[function_component(ClayButtonWithIcon)]
pub fn clay_button_with_icon(props: &ClayButtonWithIconProps) -> Html {
    let button = ClayButtonProps {
        monospaced: props.monospaced.unwrap_or(true),
        children: html! {
            <ClayIcon
                spritemap={props.spritemap.clone()}
                symbol={props.symbol.clone()}
                misc_attrs={props.icon_attrs.clone()}
            />
        },
        ..props.button.clone()
    };

    html! { <ClayButton ..button /> }
}
