use clay_shared::{GroupOptions, MiscAttrs, GROUP_ITEM_CLASS};
use yew::prelude::*;
use yew::virtual_dom::VNode;

use crate::hooks::use_misc_attrs;
use crate::logging::Logger;

/// Props for ClayButton.Group. For details, check the docs:
/// https://clayui.com/docs/components/button/api.html
#[derive(Debug, Properties, PartialEq, Clone)]
pub struct ClayButtonGroupProps {
    #[prop_or_default]
    pub spaced: bool,
    #[prop_or_default]
    pub vertical: bool,
    #[prop_or(String::from("group"))]
    pub role: String,
    /// Extra classes, rendered in front of the Clay classes.
    #[prop_or_default]
    pub class: String,
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub misc_attrs: MiscAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

impl ClayButtonGroupProps {
    pub fn options(&self) -> GroupOptions {
        GroupOptions {
            spaced: self.spaced,
            vertical: self.vertical,
            role: self.role.clone(),
            class: self.class.clone(),
            children: None,
        }
    }
}

/// Top-level nodes of a children fragment.
fn child_nodes(children: &Html) -> Vec<Html> {
    match children {
        VNode::VList(list) => list.iter().cloned().collect(),
        node => vec![node.clone()],
    }
}

/// A wrapper around ClayButton.Group.
#[function_component(ClayButtonGroup)]
pub fn clay_button_group(props: &ClayButtonGroupProps) -> Html {
    let (options, extra_attrs) = match props.options().merge(&props.misc_attrs) {
        Ok(merged) => merged,
        Err(e) => {
            Logger::warn_with_component(
                "clay-button-group",
                &format!("Ignoring misc attributes: {e}"),
            );
            (props.options(), MiscAttrs::new())
        }
    };

    use_misc_attrs(props.node_ref.clone(), extra_attrs, "clay-button-group");

    let children = match options.children.clone() {
        Some(text) => html! { {text} },
        None => props.children.clone(),
    };

    let children = if options.spaced {
        child_nodes(&children)
            .into_iter()
            .enumerate()
            .map(|(key, child)| {
                html! { <div class={GROUP_ITEM_CLASS} key={key}>{child}</div> }
            })
            .collect::<Html>()
    } else {
        children
    };

    html! {
        <div
            class={classes!(options.classes())}
            role={options.role.clone()}
            ref={props.node_ref.clone()}
        >
            {children}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_nodes_flattens_fragment() {
        let children = html! {
            <>
                <span>{"a"}</span>
                <span>{"b"}</span>
            </>
        };
        assert_eq!(child_nodes(&children).len(), 2);
    }

    #[test]
    fn test_child_nodes_single_node() {
        let children = html! { <span>{"only"}</span> };
        assert_eq!(child_nodes(&children).len(), 1);
    }
}
