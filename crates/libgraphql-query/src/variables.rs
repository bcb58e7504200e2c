use crate::ast;
use crate::types::build_type;
use crate::types::TypeDescriptor;
use indexmap::IndexMap;

/// Declares the variables of an operation: each key is a variable name and
/// each value is its [`TypeDescriptor`].
///
/// Iteration (insertion) order is significant. It is the order of the
/// emitted variable definitions and, when no explicit argument list is
/// given, the order of the entry field's arguments.
///
/// Deserializing a map that repeats a key keeps a single entry for it: the
/// last occurrence's type, at the first occurrence's position.
///
/// ```
/// # use libgraphql_query::variables::VariablesConfig;
/// let vars: VariablesConfig = serde_json::from_str(r#"{
///     "after": "ID",
///     "states": ["String"],
///     "active": ["Boolean", "!"]
/// }"#).unwrap();
/// assert_eq!(vars.keys().collect::<Vec<_>>(), ["after", "states", "active"]);
/// ```
pub type VariablesConfig = IndexMap<String, TypeDescriptor>;

/// Builds one [`VariableDefinition`](ast::VariableDefinition) per entry of
/// `vars`, in declared order. Default values are never emitted.
pub fn build_variables(vars: &VariablesConfig) -> Vec<ast::VariableDefinition> {
    vars.iter()
        .map(|(name, type_descriptor)| ast::VariableDefinition {
            position: ast::AstPos::default(),
            name: name.to_owned(),
            var_type: build_type(type_descriptor),
            default_value: None,
        })
        .collect()
}
