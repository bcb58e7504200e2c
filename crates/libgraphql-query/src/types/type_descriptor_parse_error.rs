use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TypeDescriptorParseError {
    #[error(
        "Invalid type name `{type_name}` in type notation `{notation}`. Type \
        names must match /[_A-Za-z][_0-9A-Za-z]*/."
    )]
    InvalidTypeName {
        notation: String,
        type_name: String,
    },

    #[error("No type name was found in type notation `{0}`.")]
    MissingTypeName(String),

    #[error(
        "Type notation `{0}` marks a list element as non-null. Only the \
        outer-most type may be non-null."
    )]
    NonNullListElement(String),

    #[error("Type notation `{0}` applies non-null (`!`) more than once.")]
    NestedNonNull(String),

    #[error("Type notation `{0}` has unbalanced list brackets.")]
    UnbalancedBrackets(String),
}
