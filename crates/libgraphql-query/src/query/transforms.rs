//! Ready-made [`SelectionSetTransform`]s for the common ways of reshaping
//! the selected fragment spreads.

use crate::ast;
use crate::query::SelectionSetTransform;

/// Applies `first`, then `second`.
pub fn compose(
    first: SelectionSetTransform,
    second: SelectionSetTransform,
) -> SelectionSetTransform {
    SelectionSetTransform::new(move |selection_set| {
        second.apply(first.apply(selection_set))
    })
}

/// Nests the incoming selection set under a chain of fields named by
/// `path`, outer-most first.
///
/// `nest_under(["edges", "node"])` turns `{ ...A }` into
/// `{ edges { node { ...A } } }`. An empty path or an empty incoming
/// selection set leaves the selection set unchanged.
pub fn nest_under<I, S>(path: I) -> SelectionSetTransform
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let path: Vec<String> = path.into_iter().map(Into::into).collect();
    SelectionSetTransform::new(move |selection_set| {
        if selection_set.items.is_empty() {
            return selection_set;
        }
        path.iter().rev().fold(selection_set, |inner, field_name| {
            ast::SelectionSet {
                span: (ast::AstPos::default(), ast::AstPos::default()),
                items: vec![ast::Selection::Field(plain_field(field_name, inner))],
            }
        })
    })
}

/// Prepends plain fields (e.g. `__typename`, `totalCount`) before the
/// incoming selections.
pub fn with_leading_fields<I, S>(field_names: I) -> SelectionSetTransform
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let field_names: Vec<String> =
        field_names.into_iter().map(Into::into).collect();
    SelectionSetTransform::new(move |selection_set| {
        let mut items: Vec<ast::Selection> = field_names.iter()
            .map(|field_name| ast::Selection::Field(
                plain_field(field_name, ast::empty_selection_set()),
            ))
            .collect();
        items.extend(selection_set.items);
        ast::SelectionSet {
            span: selection_set.span,
            items,
        }
    })
}

fn plain_field(name: &str, selection_set: ast::SelectionSet) -> ast::Field {
    ast::Field {
        position: ast::AstPos::default(),
        alias: None,
        name: name.to_string(),
        arguments: vec![],
        directives: vec![],
        selection_set,
    }
}
