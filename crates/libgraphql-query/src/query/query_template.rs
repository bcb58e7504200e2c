use crate::ast;
use crate::query::PreparedOperation;
use crate::query::QueryBuildError;
use crate::query::SelectionSetTransform;
use crate::variables::VariablesConfig;

type Result<T> = std::result::Result<T, QueryBuildError>;

/// Entry-field configuration for a [`QueryTemplate`]. Unlike
/// [`EntryConfig`](super::EntryConfig), the argument list is mandatory:
/// templates never default to forwarding all variables.
#[derive(Clone, Debug)]
pub struct TemplateEntryConfig {
    pub name: String,
    pub args: Vec<String>,
    pub map_select: Option<SelectionSetTransform>,
}

#[derive(Clone, Debug)]
pub struct QueryTemplateConfig {
    pub name: String,
    pub variables: VariablesConfig,
    pub entry: TemplateEntryConfig,
}

/// A reusable query whose variable definitions and entry-field arguments
/// are built once, and whose fragments are chosen later with
/// [`QueryTemplate::select()`].
#[derive(Clone, Debug)]
pub struct QueryTemplate {
    config: QueryTemplateConfig,
    prepared: PreparedOperation,
}
impl QueryTemplate {
    /// The configuration this template was created from.
    pub fn config(&self) -> &QueryTemplateConfig {
        &self.config
    }

    pub fn new(config: QueryTemplateConfig) -> Result<Self> {
        let prepared = PreparedOperation::new(
            config.name.as_str(),
            &config.variables,
            config.entry.name.as_str(),
            &config.entry.args,
            config.entry.map_select.as_ref(),
        )?;
        Ok(Self {
            config,
            prepared,
        })
    }

    /// Build a document selecting `fragments`. May be called any number of
    /// times; each call produces a fresh, independent document.
    pub fn select(&self, fragments: &[ast::Document]) -> Result<ast::Document> {
        self.prepared.select(fragments)
    }
}
