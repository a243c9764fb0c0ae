use web_sys::Element;
use yew::prelude::*;
use yew_clay_button::{
    configure, render_clay_button, AdapterConfig, ClayButton, ClayButtonGroup,
    ClayButtonWithIcon, DisplayType, MiscAttrs,
};

const CONTAINER_CLASS: &str = "mt-5 py-3 border";
const SPRITEMAP: &str = "https://cdn.jsdelivr.net/npm/@clayui/css/lib/images/icons/icons.svg";

#[function_component(DisplayTypes)]
fn display_types() -> Html {
    let display_types = [
        DisplayType::Primary,
        DisplayType::Secondary,
        DisplayType::Link,
        DisplayType::Success,
        DisplayType::Warning,
        DisplayType::Danger,
        DisplayType::Info,
        DisplayType::Unstyled,
    ];

    html! {
        <div class={CONTAINER_CLASS}>
            <h2>{"Button"}</h2>
            {for display_types.into_iter().map(|display_type| html! {
                <ClayButton {display_type}>{format!("Button {display_type}")}</ClayButton>
            })}
            <ClayButton outline=true display_type={DisplayType::Secondary}>{"Outline"}</ClayButton>
            <ClayButton borderless=true>{"Borderless"}</ClayButton>
            <ClayButton small=true>{"Small"}</ClayButton>
        </div>
    }
}

#[function_component(Groups)]
fn groups() -> Html {
    let mut toolbar_attrs = MiscAttrs::new();
    toolbar_attrs.add_attribute("aria-label", "Formatting");

    html! {
        <div class={CONTAINER_CLASS}>
            <h2>{"Button Group"}</h2>
            <ClayButtonGroup>
                <ClayButton>{"This"}</ClayButton>
                <ClayButton display_type={DisplayType::Secondary}>{"is"}</ClayButton>
                <ClayButton>{"a"}</ClayButton>
                <ClayButton display_type={DisplayType::Secondary}>{"button"}</ClayButton>
                <ClayButton>{"group."}</ClayButton>
            </ClayButtonGroup>
            <ClayButtonGroup spaced=true role="toolbar" misc_attrs={toolbar_attrs}>
                <ClayButton>{"Bold"}</ClayButton>
                <ClayButton>{"Italic"}</ClayButton>
            </ClayButtonGroup>
        </div>
    }
}

#[function_component(Counter)]
fn counter() -> Html {
    let clicks = use_state(|| 0u32);
    let on_click = {
        let clicks = clicks.clone();
        Callback::from(move |_: ()| clicks.set(*clicks + 1))
    };

    html! {
        <div class={CONTAINER_CLASS}>
            <h2>{"Icons and callbacks"}</h2>
            <ClayButtonWithIcon spritemap={SPRITEMAP} symbol="plus" />
            <ClayButton {on_click}>{format!("Clicked {} times", *clicks)}</ClayButton>
        </div>
    }
}

/// Mounts a button through the imperative entry point instead of `html!`.
#[function_component(Imperative)]
fn imperative() -> Html {
    let host = use_node_ref();

    {
        let host = host.clone();
        use_effect_with((), move |_| {
            let Some(node) = host.cast::<Element>() else {
                return;
            };

            let mut misc_attrs = MiscAttrs::new();
            misc_attrs.insert("alert", false);
            misc_attrs.add_attribute("title", "Mounted with render_clay_button");

            let result = render_clay_button(
                &node,
                true,
                false,
                true,
                DisplayType::Info,
                false,
                false,
                false,
                html! { {"Imperative"} },
                None,
                misc_attrs,
            );
            if let Err(e) = result {
                gloo::console::error!(format!("Failed to render button: {e}"));
            }
        });
    }

    html! {
        <div class={CONTAINER_CLASS}>
            <h2>{"Imperative mount"}</h2>
            <div ref={host} />
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="container">
            <DisplayTypes />
            <Groups />
            <Counter />
            <Imperative />
        </div>
    }
}

fn main() {
    configure(AdapterConfig {
        enable_logging: true,
    });
    yew::Renderer::<App>::new().render();
}
