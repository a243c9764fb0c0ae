use thiserror::Error;

/// Errors raised while turning caller-supplied props into renderable options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropsError {
    /// The display type is not one of the Clay button styles.
    #[error("unknown display type: {0:?}")]
    UnknownDisplayType(String),

    /// A recognized misc attribute carried the wrong kind of value.
    #[error("attribute `{key}` expects a {expected} value")]
    InvalidAttr { key: String, expected: &'static str },

    /// Misc attributes supplied as JSON that is not a flat object of scalars.
    #[error("malformed misc attributes: {0}")]
    MalformedAttrs(String),
}
