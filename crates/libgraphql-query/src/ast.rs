//! `'static`, `String`-backed aliases for the `graphql_parser` query AST
//! nodes produced by this crate.

pub use graphql_parser::Pos as AstPos;

pub type Definition = graphql_parser::query::Definition<'static, String>;
pub type Document = graphql_parser::query::Document<'static, String>;
pub type Field = graphql_parser::query::Field<'static, String>;
pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
pub type FragmentSpread = graphql_parser::query::FragmentSpread<'static, String>;
pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
pub type Query = graphql_parser::query::Query<'static, String>;
pub type Selection = graphql_parser::query::Selection<'static, String>;
pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
pub type Type = graphql_parser::query::Type<'static, String>;
pub type Value = graphql_parser::query::Value<'static, String>;
pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;

/// Builds an empty [`SelectionSet`] with default positions.
pub fn empty_selection_set() -> SelectionSet {
    SelectionSet {
        span: (AstPos::default(), AstPos::default()),
        items: vec![],
    }
}
