mod button;
mod button_group;
mod icon;
mod icon_button;

pub use button::{ClayButton, ClayButtonProps};
pub use button_group::{ClayButtonGroup, ClayButtonGroupProps};
pub use icon::{ClayIcon, ClayIconProps};
pub use icon_button::{ClayButtonWithIcon, ClayButtonWithIconProps};
