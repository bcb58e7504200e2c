use crate::ast;
use crate::types::build_raw_type;
use crate::types::RawTypeDescriptor;
use crate::types::TypeDescriptorParseError;

/// A compact description of a GraphQL type reference as used by a variable
/// definition.
///
/// Non-nullability may only be applied to a [`RawTypeDescriptor`], so a
/// non-null type wrapping another non-null type cannot be expressed.
///
/// Compact (JSON) notation:
///
/// | Notation        | GraphQL  |
/// |-----------------|----------|
/// | `"ID"`          | `ID`     |
/// | `["ID"]`        | `[ID]`   |
/// | `["ID", "!"]`   | `ID!`    |
/// | `[["ID"], "!"]` | `[ID]!`  |
///
/// The same descriptors can be parsed from (and printed as) GraphQL type
/// notation with [`str::parse()`] and [`std::fmt::Display`].
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize)]
#[serde(from = "TypeDescriptorRepr")]
pub enum TypeDescriptor {
    NonNull(RawTypeDescriptor),
    Nullable(RawTypeDescriptor),
}
impl TypeDescriptor {
    /// A nullable list of the named type (`[name]`).
    pub fn list(name: impl Into<String>) -> Self {
        Self::Nullable(RawTypeDescriptor::list_of(
            RawTypeDescriptor::named(name),
        ))
    }

    /// A nullable named type (`name`).
    pub fn named(name: impl Into<String>) -> Self {
        Self::Nullable(RawTypeDescriptor::named(name))
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Mark this descriptor as non-null. Already non-null descriptors are
    /// returned unchanged.
    pub fn non_null(self) -> Self {
        match self {
            Self::Nullable(raw) => Self::NonNull(raw),
            non_null @ Self::NonNull(_) => non_null,
        }
    }

    pub fn raw_type(&self) -> &RawTypeDescriptor {
        match self {
            Self::NonNull(raw) | Self::Nullable(raw) => raw,
        }
    }

    /// Convenience wrapper around [`build_type()`].
    pub fn to_ast_type(&self) -> ast::Type {
        build_type(self)
    }
}
impl std::convert::From<&str> for TypeDescriptor {
    fn from(value: &str) -> Self {
        Self::named(value)
    }
}
impl std::convert::From<RawTypeDescriptor> for TypeDescriptor {
    fn from(value: RawTypeDescriptor) -> Self {
        Self::Nullable(value)
    }
}
impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonNull(raw) => write!(f, "{raw}!"),
            Self::Nullable(raw) => write!(f, "{raw}"),
        }
    }
}
impl std::str::FromStr for TypeDescriptor {
    type Err = TypeDescriptorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let notation = s.trim();
        match notation.strip_suffix('!') {
            Some(raw_notation) => {
                if raw_notation.trim_end().ends_with('!') {
                    return Err(TypeDescriptorParseError::NestedNonNull(
                        s.to_string(),
                    ));
                }
                Ok(Self::NonNull(
                    RawTypeDescriptor::parse_graphql_notation(s, raw_notation)?,
                ))
            },

            None => Ok(Self::Nullable(
                RawTypeDescriptor::parse_graphql_notation(s, notation)?,
            )),
        }
    }
}

#[derive(serde::Deserialize)]
enum NonNullMarker {
    #[serde(rename = "!")]
    Bang,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum TypeDescriptorRepr {
    NonNull(RawTypeDescriptor, NonNullMarker),
    Nullable(RawTypeDescriptor),
}
impl std::convert::From<TypeDescriptorRepr> for TypeDescriptor {
    fn from(value: TypeDescriptorRepr) -> Self {
        match value {
            TypeDescriptorRepr::NonNull(raw, NonNullMarker::Bang) =>
                Self::NonNull(raw),
            TypeDescriptorRepr::Nullable(raw) =>
                Self::Nullable(raw),
        }
    }
}

/// Produce the AST type node for a [`TypeDescriptor`]: non-null descriptors
/// wrap the node built for their raw type in a `NonNullType`, everything
/// else is delegated to [`build_raw_type()`].
pub fn build_type(type_descriptor: &TypeDescriptor) -> ast::Type {
    match type_descriptor {
        TypeDescriptor::NonNull(raw) =>
            ast::Type::NonNullType(Box::new(build_raw_type(raw))),

        TypeDescriptor::Nullable(raw) =>
            build_raw_type(raw),
    }
}
