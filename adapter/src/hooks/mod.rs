mod use_misc_attrs;

pub use use_misc_attrs::use_misc_attrs;
