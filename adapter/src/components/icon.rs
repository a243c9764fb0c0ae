use clay_shared::{AttrValue, MiscAttrs};
use yew::prelude::*;

use crate::hooks::use_misc_attrs;

/// Props for ClayIcon. For details, check the docs:
/// https://clayui.com/docs/components/icon/api.html
#[derive(Debug, Properties, PartialEq, Clone)]
pub struct ClayIconProps {
    /// Path to the spritemap holding the SVG icons.
    #[prop_or_default]
    pub spritemap: String,
    /// Id of the icon inside the spritemap.
    pub symbol: String,
    /// Extra classes, rendered in front of the lexicon classes.
    #[prop_or_default]
    pub class: String,
    #[prop_or_default]
    pub misc_attrs: MiscAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

#[function_component(ClayIcon)]
pub fn clay_icon(props: &ClayIconProps) -> Html {
    let mut extra_class = props.class.clone();
    let mut attrs = MiscAttrs::new();
    for (key, value) in &props.misc_attrs {
        match (key.as_str(), value) {
            ("class" | "className", AttrValue::Text(text)) => extra_class = text.clone(),
            _ => attrs.insert(key.clone(), value.clone()),
        }
    }

    use_misc_attrs(props.node_ref.clone(), attrs, "clay-icon");

    let class = classes!(
        extra_class,
        "lexicon-icon",
        format!("lexicon-icon-{}", props.symbol)
    );
    let href = format!("{}#{}", props.spritemap, props.symbol);

    html! {
        <svg
            class={class}
            key={props.symbol.clone()}
            ref={props.node_ref.clone()}
            role="presentation"
        >
            <use href={href} />
        </svg>
    }
}
