use crate::ast;
use crate::types::TypeDescriptorParseError;

/// A nullable GraphQL type reference: either a bare type name or a list of
/// another [`RawTypeDescriptor`].
///
/// In compact (JSON) notation a named type is written as a plain string
/// (`"ID"`) and a list as a single-element array (`["ID"]`, `[["ID"]]`).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize)]
#[serde(from = "RawTypeDescriptorRepr")]
pub enum RawTypeDescriptor {
    List(Box<RawTypeDescriptor>),
    Named(String),
}
impl RawTypeDescriptor {
    pub fn list_of(inner: impl Into<RawTypeDescriptor>) -> Self {
        Self::List(Box::new(inner.into()))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub(super) fn parse_graphql_notation(
        source: &str,
        notation: &str,
    ) -> Result<Self, TypeDescriptorParseError> {
        let notation = notation.trim();
        if let Some(inner) = notation.strip_prefix('[') {
            let inner = inner.strip_suffix(']').ok_or_else(||
                TypeDescriptorParseError::UnbalancedBrackets(
                    source.to_string(),
                )
            )?;
            if inner.trim_end().ends_with('!') {
                return Err(TypeDescriptorParseError::NonNullListElement(
                    source.to_string(),
                ));
            }
            return Ok(Self::list_of(
                Self::parse_graphql_notation(source, inner)?,
            ));
        }

        if notation.is_empty() {
            return Err(TypeDescriptorParseError::MissingTypeName(
                source.to_string(),
            ));
        }
        if notation.ends_with(']') {
            return Err(TypeDescriptorParseError::UnbalancedBrackets(
                source.to_string(),
            ));
        }
        if !is_graphql_name(notation) {
            return Err(TypeDescriptorParseError::InvalidTypeName {
                notation: source.to_string(),
                type_name: notation.to_string(),
            });
        }

        Ok(Self::named(notation))
    }

    /// Convenience wrapper around [`build_raw_type()`].
    pub fn to_ast_type(&self) -> ast::Type {
        build_raw_type(self)
    }
}
impl std::convert::From<&str> for RawTypeDescriptor {
    fn from(value: &str) -> Self {
        Self::named(value)
    }
}
impl std::convert::From<String> for RawTypeDescriptor {
    fn from(value: String) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for RawTypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawTypeDescriptorRepr {
    List((RawTypeDescriptor,)),
    Named(String),
}
impl std::convert::From<RawTypeDescriptorRepr> for RawTypeDescriptor {
    fn from(value: RawTypeDescriptorRepr) -> Self {
        match value {
            RawTypeDescriptorRepr::List((inner,)) => Self::list_of(inner),
            RawTypeDescriptorRepr::Named(name) => Self::Named(name),
        }
    }
}

/// Produce the AST type node for a nullable type reference: a
/// `ListType` wrapping the element's node for lists, or a `NamedType` for
/// bare names.
pub fn build_raw_type(raw_type: &RawTypeDescriptor) -> ast::Type {
    match raw_type {
        RawTypeDescriptor::List(inner) =>
            ast::Type::ListType(Box::new(build_raw_type(inner))),

        RawTypeDescriptor::Named(name) =>
            ast::Type::NamedType(name.to_owned()),
    }
}

// https://spec.graphql.org/October2021/#Name
fn is_graphql_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => (),
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
