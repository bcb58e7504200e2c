use crate::ast;
use std::sync::Arc;

/// A caller-supplied rewrite of the entry field's selection set.
///
/// The transform receives the selection set made of one fragment spread per
/// selected fragment and returns the selection set to use instead. Typical
/// uses are nesting the spreads deeper (e.g. under `edges { node { .. } }`)
/// and adding constant fields. See [`transforms`](super::transforms) for
/// ready-made ones.
///
/// Transforms are cheap to clone and may be shared across threads.
#[derive(Clone)]
pub struct SelectionSetTransform(
    Arc<dyn Fn(ast::SelectionSet) -> ast::SelectionSet + Send + Sync>,
);
impl SelectionSetTransform {
    pub fn apply(&self, selection_set: ast::SelectionSet) -> ast::SelectionSet {
        (self.0)(selection_set)
    }

    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(ast::SelectionSet) -> ast::SelectionSet + Send + Sync + 'static,
    {
        Self(Arc::new(transform))
    }
}
impl std::fmt::Debug for SelectionSetTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SelectionSetTransform(..)")
    }
}
