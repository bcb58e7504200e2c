use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum QueryBuildError {
    #[error(
        "Argument `{argument_name}` of operation `{operation_name}` is listed \
        more than once. Argument names must be unique on a field."
    )]
    DuplicateArgument {
        argument_name: String,
        operation_name: String,
    },

    #[error(
        "Fragment `{fragment_name}` was supplied more than once. Fragment \
        names must be unique within a document."
    )]
    DuplicateFragmentName {
        fragment_name: String,
    },

    #[error("Fragment document #{fragment_index} contains no definitions.")]
    EmptyFragmentDocument {
        fragment_index: usize,
    },

    #[error(
        "The selection set for entry field `{entry_name}` is empty. Select at \
        least one fragment or supply a selection set transform that adds \
        selections."
    )]
    EmptySelectionSet {
        entry_name: String,
    },

    #[error(
        "The first definition in fragment document #{fragment_index} is an \
        operation, but a fragment definition was expected."
    )]
    FirstDefinitionNotAFragment {
        fragment_index: usize,
    },

    #[error(
        "Argument `{argument_name}` of operation `{operation_name}` does not \
        refer to a declared variable."
    )]
    UndeclaredArgument {
        argument_name: String,
        operation_name: String,
    },
}
