use crate::arguments::build_arguments;
use crate::ast;
use crate::query::QueryBuildError;
use crate::query::SelectionSetTransform;
use crate::variables::build_variables;
use crate::variables::VariablesConfig;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, QueryBuildError>;

/// The fragment-independent parts of a query operation: its variable
/// definitions and the entry field's arguments. Built once, then combined
/// with any number of fragment sets via [`PreparedOperation::select()`].
#[derive(Clone, Debug)]
pub(super) struct PreparedOperation {
    arguments: Vec<(String, ast::Value)>,
    entry_name: String,
    map_select: Option<SelectionSetTransform>,
    name: String,
    variable_definitions: Vec<ast::VariableDefinition>,
}

impl PreparedOperation {
    pub(super) fn new(
        name: &str,
        variables: &VariablesConfig,
        entry_name: &str,
        args: &[String],
        map_select: Option<&SelectionSetTransform>,
    ) -> Result<Self> {
        if let Some(undeclared_arg) =
            args.iter().find(|arg| !variables.contains_key(arg.as_str())) {
            return Err(QueryBuildError::UndeclaredArgument {
                argument_name: undeclared_arg.to_owned(),
                operation_name: name.to_string(),
            });
        }

        let mut seen_args = HashSet::new();
        if let Some(duplicate_arg) =
            args.iter().find(|arg| !seen_args.insert(arg.as_str())) {
            return Err(QueryBuildError::DuplicateArgument {
                argument_name: duplicate_arg.to_owned(),
                operation_name: name.to_string(),
            });
        }

        let variable_definitions = build_variables(variables);
        let arguments = build_arguments(args);
        log::debug!(
            "Prepared operation `{name}` with {} variable definitions and {} \
            arguments on entry field `{entry_name}`.",
            variable_definitions.len(),
            arguments.len(),
        );

        Ok(Self {
            arguments,
            entry_name: entry_name.to_string(),
            map_select: map_select.cloned(),
            name: name.to_string(),
            variable_definitions,
        })
    }

    /// Assemble a document selecting `fragments` under the entry field. The
    /// operation definition comes first, followed by each fragment's
    /// definition in the order given.
    pub(super) fn select(&self, fragments: &[ast::Document]) -> Result<ast::Document> {
        let fragment_defs = first_fragment_definitions(fragments)?;

        let spreads = ast::SelectionSet {
            span: (ast::AstPos::default(), ast::AstPos::default()),
            items: fragment_defs.iter()
                .map(|fragment_def| ast::Selection::FragmentSpread(
                    ast::FragmentSpread {
                        position: ast::AstPos::default(),
                        fragment_name: fragment_def.name.to_owned(),
                        directives: vec![],
                    }
                ))
                .collect(),
        };

        let selection_set = match &self.map_select {
            Some(map_select) => map_select.apply(spreads),
            None => spreads,
        };
        if selection_set.items.is_empty() {
            return Err(QueryBuildError::EmptySelectionSet {
                entry_name: self.entry_name.to_owned(),
            });
        }

        let entry_field = ast::Field {
            position: ast::AstPos::default(),
            alias: None,
            name: self.entry_name.to_owned(),
            arguments: self.arguments.to_owned(),
            directives: vec![],
            selection_set,
        };

        let query = ast::Query {
            position: ast::AstPos::default(),
            name: Some(self.name.to_owned()),
            variable_definitions: self.variable_definitions.to_owned(),
            directives: vec![],
            selection_set: ast::SelectionSet {
                span: (ast::AstPos::default(), ast::AstPos::default()),
                items: vec![ast::Selection::Field(entry_field)],
            },
        };

        let mut definitions = Vec::with_capacity(1 + fragment_defs.len());
        definitions.push(ast::Definition::Operation(
            ast::OperationDefinition::Query(query),
        ));
        definitions.extend(
            fragment_defs.into_iter()
                .map(|fragment_def| ast::Definition::Fragment(fragment_def)),
        );

        log::trace!(
            "Assembled document for operation `{}` with {} definitions.",
            self.name,
            definitions.len(),
        );
        Ok(ast::Document { definitions })
    }
}

fn first_fragment_definitions(
    fragments: &[ast::Document],
) -> Result<Vec<ast::FragmentDefinition>> {
    let mut fragment_names = HashSet::new();
    let mut fragment_defs = Vec::with_capacity(fragments.len());
    for (fragment_index, fragment_doc) in fragments.iter().enumerate() {
        let fragment_def = match fragment_doc.definitions.first() {
            Some(ast::Definition::Fragment(fragment_def)) => fragment_def,

            Some(ast::Definition::Operation(_)) =>
                return Err(QueryBuildError::FirstDefinitionNotAFragment {
                    fragment_index,
                }),

            None =>
                return Err(QueryBuildError::EmptyFragmentDocument {
                    fragment_index,
                }),
        };

        if fragment_doc.definitions.len() > 1 {
            log::debug!(
                "Fragment document #{fragment_index} has {} definitions; only \
                `{}` is selected.",
                fragment_doc.definitions.len(),
                fragment_def.name,
            );
        }

        if !fragment_names.insert(fragment_def.name.as_str()) {
            return Err(QueryBuildError::DuplicateFragmentName {
                fragment_name: fragment_def.name.to_owned(),
            });
        }
        fragment_defs.push(fragment_def.to_owned());
    }
    Ok(fragment_defs)
}
