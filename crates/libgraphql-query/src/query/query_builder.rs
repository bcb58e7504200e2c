use crate::arguments::get_arguments;
use crate::ast;
use crate::query::PreparedOperation;
use crate::query::QueryBuildError;
use crate::query::QueryConfig;

/// Build a query document from a [`QueryConfig`].
///
/// The document holds one `query` operation named `config.name` declaring
/// every configured variable. Its only top-level field is
/// `config.entry.name`, with one argument per forwarded variable and one
/// fragment spread per supplied fragment (optionally rewritten by
/// `config.entry.map_select`). The fragment definitions follow the
/// operation, in the order supplied.
///
/// If `config.entry.args` is `None`, every declared variable is forwarded
/// as an argument (see [`get_arguments()`]).
///
/// Configuration is validated before anything is built:
///
/// - every argument must name a declared variable, and appear only once,
/// - every fragment document must start with a fragment definition,
/// - fragment names must be unique,
/// - the entry field's final selection set must not be empty.
pub fn build_query(config: &QueryConfig) -> Result<ast::Document, QueryBuildError> {
    let args = get_arguments(&config.variables, config.entry.args.as_deref());
    PreparedOperation::new(
        config.name.as_str(),
        &config.variables,
        config.entry.name.as_str(),
        &args,
        config.entry.map_select.as_ref(),
    )?.select(&config.fragments)
}
