//! Build GraphQL query documents from small declarative configuration
//! records.
//!
//! Variables are declared with a compact [`TypeDescriptor`](types::TypeDescriptor)
//! notation, arguments forward same-named variables, and the selected
//! fragments are spread under a single entry field:
//!
//! ```
//! use libgraphql_query::query::EntryConfig;
//! use libgraphql_query::query::QueryConfig;
//! use libgraphql_query::query::build_query;
//! use libgraphql_query::types::TypeDescriptor;
//! use libgraphql_query::variables::VariablesConfig;
//!
//! let fragment = graphql_parser::parse_query::<String>(
//!     "fragment UserFields on User { id name }",
//! ).unwrap().into_static();
//!
//! let mut variables = VariablesConfig::new();
//! variables.insert("id".to_string(), TypeDescriptor::named("ID").non_null());
//!
//! let document = build_query(&QueryConfig {
//!     name: "GetUser".to_string(),
//!     variables,
//!     entry: EntryConfig::new("user"),
//!     fragments: vec![fragment],
//! }).unwrap();
//!
//! assert!(document.to_string().starts_with("query GetUser($id: ID!) {"));
//! ```

pub mod arguments;
pub mod ast;
pub mod query;
pub mod types;
pub mod variables;

#[cfg(test)]
mod tests;
