use crate::ast;
use crate::query::EntryConfig;
use crate::variables::VariablesConfig;

/// Everything needed to build a query document in one call with
/// [`build_query()`](super::build_query).
#[derive(Clone, Debug)]
pub struct QueryConfig {
    /// The operation name.
    pub name: String,

    pub variables: VariablesConfig,

    pub entry: EntryConfig,

    /// Already-parsed fragment documents. The first definition of each
    /// document must be the fragment definition to select.
    pub fragments: Vec<ast::Document>,
}
