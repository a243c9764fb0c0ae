//! Browser-free prop model for the Clay button adapter.
//!
//! Everything here is plain data: the named button and button-group props, the
//! open-ended `miscAttrs` override map, and the rules for folding the latter into
//! the former. The Yew crate turns the result into DOM.

mod attrs;
mod button;
mod display_type;
mod error;
mod group;

pub use attrs::{AttrValue, MiscAttrs};
pub use button::ButtonOptions;
pub use display_type::DisplayType;
pub use error::PropsError;
pub use group::{GroupOptions, GROUP_ITEM_CLASS};
