use clay_shared::{ButtonOptions, DisplayType, MiscAttrs};
use yew::prelude::*;

use crate::hooks::use_misc_attrs;
use crate::logging::Logger;

/// Props for ClayButton. For details, check the docs:
/// https://clayui.com/docs/components/button/api.html
#[derive(Debug, Properties, PartialEq, Clone)]
pub struct ClayButtonProps {
    /// Flag to indicate if button is used within an alert component.
    #[prop_or_default]
    pub alert: bool,

    /// Flag to indicate if the button should be borderless.
    #[prop_or_default]
    pub borderless: bool,

    /// Renders the button as a block element.
    #[prop_or_default]
    pub block: bool,

    /// Determines how the button is displayed. Follows bootstrap coloring scheme.
    #[prop_or_default]
    pub display_type: DisplayType,

    /// Flag to indicate if button should be monospaced.
    #[prop_or_default]
    pub monospaced: bool,

    /// Flag to indicate if the button needs to have an outline.
    #[prop_or_default]
    pub outline: bool,

    /// Indicates button should be a small variant.
    #[prop_or_default]
    pub small: bool,

    #[prop_or(String::from("button"))]
    pub button_type: String,

    /// Extra classes, rendered in front of the Clay classes.
    #[prop_or_default]
    pub class: String,

    #[prop_or_default]
    pub children: Html,

    #[prop_or_default]
    pub on_click: Option<Callback<()>>,

    /// A catchall to pass anything not specified here to the underlying element.
    /// Keys matching a prop above override it.
    #[prop_or_default]
    pub misc_attrs: MiscAttrs,

    #[prop_or_default]
    pub node_ref: NodeRef,
}

impl ClayButtonProps {
    /// The named props, before misc attributes are applied.
    pub fn options(&self) -> ButtonOptions {
        ButtonOptions {
            alert: self.alert,
            borderless: self.borderless,
            block: self.block,
            display_type: self.display_type,
            monospaced: self.monospaced,
            outline: self.outline,
            small: self.small,
            button_type: self.button_type.clone(),
            class: self.class.clone(),
            children: None,
            remove_on_click: false,
        }
    }
}

/// A Yew implementation of ClayButton. For more info, check the documentation:
/// [https://clayui.com/docs/components/button.html]
#[function_component(ClayButton)]
pub fn clay_button(props: &ClayButtonProps) -> Html {
    let (options, extra_attrs) = match props.options().merge(&props.misc_attrs) {
        Ok(merged) => merged,
        Err(e) => {
            Logger::warn_with_component("clay-button", &format!("Ignoring misc attributes: {e}"));
            (props.options(), MiscAttrs::new())
        }
    };

    use_misc_attrs(props.node_ref.clone(), extra_attrs, "clay-button");

    let onclick = props
        .on_click
        .clone()
        .filter(|_| !options.remove_on_click)
        .map(|on_click| Callback::from(move |_: MouseEvent| on_click.emit(())));

    let children = match options.children.clone() {
        Some(text) => html! { {text} },
        None => props.children.clone(),
    };

    html! {
        <button
            class={classes!(options.classes())}
            type={options.button_type.clone()}
            ref={props.node_ref.clone()}
            {onclick}
        >
            {children}
        </button>
    }
}
