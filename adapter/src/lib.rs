//! Yew rendition of the Clay button widgets, plus entry points that mount them
//! into an arbitrary DOM node.
//!
//! ```ignore
//! let node = yew_clay_button::mount_point("save")?;
//! yew_clay_button::render_clay_button(
//!     &node, false, false, false, DisplayType::Primary, false, false, false,
//!     html! { {"Save"} }, None, MiscAttrs::new(),
//! )?;
//! ```

#[cfg(feature = "js")]
mod bindings;
mod components;
mod config;
mod dom;
mod error;
mod hooks;
mod logging;
mod mount;

pub use clay_shared::{AttrValue, ButtonOptions, DisplayType, GroupOptions, MiscAttrs, PropsError};
pub use components::{
    ClayButton, ClayButtonGroup, ClayButtonGroupProps, ClayButtonProps, ClayButtonWithIcon,
    ClayButtonWithIconProps, ClayIcon, ClayIconProps,
};
pub use config::{configure, current_config, AdapterConfig};
pub use dom::mount_point;
pub use error::AdapterError;
pub use hooks::use_misc_attrs;
pub use logging::Logger;
pub use mount::{
    mounted_count, render_clay_button, render_clay_button_group, render_clay_button_with_icon,
    unmount,
};
