use crate::ast;
use crate::query::SelectionSetTransform;

/// Describes the single top-level field selected by a one-shot query.
#[derive(Clone, Debug)]
pub struct EntryConfig {
    /// Name of the top-level `Query` field.
    pub name: String,

    /// Names of the variables passed to the entry field as same-named
    /// arguments.
    ///
    /// When `None`, every declared variable is passed. An explicit empty
    /// list passes none.
    pub args: Option<Vec<String>>,

    /// Optional rewrite of the fragment-spread selection set.
    pub map_select: Option<SelectionSetTransform>,
}
impl EntryConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: None,
            map_select: None,
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_map_select<F>(mut self, map_select: F) -> Self
    where
        F: Fn(ast::SelectionSet) -> ast::SelectionSet + Send + Sync + 'static,
    {
        self.map_select = Some(SelectionSetTransform::new(map_select));
        self
    }

    pub fn with_transform(mut self, transform: SelectionSetTransform) -> Self {
        self.map_select = Some(transform);
        self
    }
}
