use std::cell::RefCell;

use clay_shared::{ButtonOptions, DisplayType, GroupOptions, MiscAttrs};
use web_sys::Element;
use yew::{function_component, html, AppHandle, Callback, Html, NodeRef, Properties, Renderer};

use crate::components::{
    ClayButton, ClayButtonGroup, ClayButtonGroupProps, ClayButtonProps, ClayButtonWithIcon,
    ClayButtonWithIconProps,
};
use crate::error::AdapterError;
use crate::logging::Logger;

/// What a mount point currently shows.
#[derive(Debug, Clone, PartialEq)]
enum MountedContent {
    Button(ClayButtonProps),
    ButtonGroup(ClayButtonGroupProps),
    ButtonWithIcon(ClayButtonWithIconProps),
}

#[derive(Debug, Properties, Clone, PartialEq)]
struct MountRootProps {
    content: MountedContent,
}

/// Root of every app mounted by this module. Switching content between renders
/// goes through Yew's diff, so a node only ever hosts one app.
#[function_component(MountRoot)]
fn mount_root(props: &MountRootProps) -> Html {
    match props.content.clone() {
        MountedContent::Button(button) => html! { <ClayButton ..button /> },
        MountedContent::ButtonGroup(group) => html! { <ClayButtonGroup ..group /> },
        MountedContent::ButtonWithIcon(button) => html! { <ClayButtonWithIcon ..button /> },
    }
}

// Apps stay alive until `unmount` is called for their node; a node that is
// dropped from the document without it keeps its app and the node itself.
thread_local! {
    static MOUNTS: RefCell<Vec<(Element, AppHandle<MountRoot>)>> = const { RefCell::new(Vec::new()) };
}

/// Render `content` into `node`. A node that already hosts an app gets new
/// props; otherwise a fresh app is created and Yew clears the node first.
fn mount(node: &Element, content: MountedContent, component: &'static str) {
    let props = MountRootProps { content };

    let props = MOUNTS.with(|mounts| {
        let mut mounts = mounts.borrow_mut();
        match mounts.iter_mut().find(|(mounted, _)| *mounted == *node) {
            Some((_, handle)) => {
                handle.update(props);
                None
            }
            None => Some(props),
        }
    });

    let Some(props) = props else {
        Logger::debug_with_component(component, "Updated existing app at mount point");
        return;
    };

    let handle = Renderer::<MountRoot>::with_root_and_props(node.clone(), props).render();
    MOUNTS.with(|mounts| mounts.borrow_mut().push((node.clone(), handle)));

    Logger::info_with_component(component, "Mounted");
}

/// Destroy the app rendered into `node` by one of the render functions.
/// Returns `false` if nothing was mounted there.
///
/// Call this before discarding a node: the app and the node are otherwise
/// kept alive. The teardown is committed on Yew's scheduler, so a node that is
/// unmounted must not be rendered into again within the same task.
pub fn unmount(node: &Element) -> bool {
    let mounted = MOUNTS.with(|mounts| {
        let mut mounts = mounts.borrow_mut();
        mounts
            .iter()
            .position(|(mounted, _)| *mounted == *node)
            .map(|index| mounts.remove(index))
    });

    match mounted {
        Some((_, handle)) => {
            handle.destroy();
            true
        }
        None => false,
    }
}

/// Number of apps currently mounted by this module.
pub fn mounted_count() -> usize {
    MOUNTS.with(|mounts| mounts.borrow().len())
}

/// Render a Clay button into `node`, replacing its content.
///
/// `misc_attrs` is merged after the named props, so a key such as `alert`
/// overrides the `alert` argument, `children` replaces `children` and a `null`
/// `onClick` drops `on_click`. Props are validated before the DOM is touched;
/// an unknown display type is returned as an error.
#[allow(clippy::too_many_arguments)]
pub fn render_clay_button(
    node: &Element,
    alert: bool,
    borderless: bool,
    block: bool,
    display_type: DisplayType,
    monospaced: bool,
    outline: bool,
    small: bool,
    children: Html,
    on_click: Option<Callback<()>>,
    misc_attrs: MiscAttrs,
) -> Result<(), AdapterError> {
    let options = ButtonOptions {
        alert,
        borderless,
        block,
        display_type,
        monospaced,
        outline,
        small,
        ..ButtonOptions::default()
    };
    let (options, misc_attrs) = options.merge(&misc_attrs)?;

    let props = button_props(options, children, on_click, misc_attrs);
    mount(node, MountedContent::Button(props), "clay-button");
    Ok(())
}

/// Render a Clay button group into `node`, replacing its content.
pub fn render_clay_button_group(
    node: &Element,
    spaced: bool,
    vertical: bool,
    role: &str,
    children: Html,
    misc_attrs: MiscAttrs,
) -> Result<(), AdapterError> {
    let options = GroupOptions {
        spaced,
        vertical,
        role: role.to_string(),
        ..GroupOptions::default()
    };
    let (options, misc_attrs) = options.merge(&misc_attrs)?;

    let props = ClayButtonGroupProps {
        spaced: options.spaced,
        vertical: options.vertical,
        role: options.role,
        class: options.class,
        children: text_or(options.children, children),
        misc_attrs,
        node_ref: NodeRef::default(),
    };

    mount(node, MountedContent::ButtonGroup(props), "clay-button-group");
    Ok(())
}

/// Render an icon-only Clay button into `node`, replacing its content.
/// The button is monospaced unless `misc_attrs` says otherwise.
pub fn render_clay_button_with_icon(
    node: &Element,
    spritemap: &str,
    symbol: &str,
    options: ButtonOptions,
    on_click: Option<Callback<()>>,
    misc_attrs: MiscAttrs,
) -> Result<(), AdapterError> {
    let explicit_monospaced = misc_attrs.get("monospaced").is_some();
    let (options, misc_attrs) = options.merge(&misc_attrs)?;
    let monospaced = Some(!explicit_monospaced || options.monospaced);

    let props = ClayButtonWithIconProps {
        spritemap: spritemap.to_string(),
        symbol: symbol.to_string(),
        monospaced,
        button: button_props(options, Html::default(), on_click, misc_attrs),
        icon_attrs: MiscAttrs::new(),
    };

    mount(node, MountedContent::ButtonWithIcon(props), "clay-button-with-icon");
    Ok(())
}

fn text_or(text: Option<String>, children: Html) -> Html {
    match text {
        Some(text) => html! { {text} },
        None => children,
    }
}

fn button_props(
    options: ButtonOptions,
    children: Html,
    on_click: Option<Callback<()>>,
    misc_attrs: MiscAttrs,
) -> ClayButtonProps {
    ClayButtonProps {
        alert: options.alert,
        borderless: options.borderless,
        block: options.block,
        display_type: options.display_type,
        monospaced: options.monospaced,
        outline: options.outline,
        small: options.small,
        button_type: options.button_type,
        class: options.class,
        children: text_or(options.children, children),
        on_click: on_click.filter(|_| !options.remove_on_click),
        misc_attrs,
        node_ref: NodeRef::default(),
    }
}
