use crate::arguments::build_arguments;
use crate::arguments::get_arguments;
use crate::ast;
use crate::tests::ast_utils::variables;
use crate::types::TypeDescriptor;

/// Verifies that every argument is bound to the variable of the same name.
#[test]
fn arguments_bind_same_named_variables() {
    let args = build_arguments(&["first", "after"]);

    assert_eq!(args, vec![
        ("first".to_string(), ast::Value::Variable("first".to_string())),
        ("after".to_string(), ast::Value::Variable("after".to_string())),
    ]);
}

#[test]
fn no_names_build_no_arguments() {
    let names: Vec<String> = vec![];
    assert!(build_arguments(&names).is_empty());
}

/// Verifies the "forward every variable" default: omitting the argument
/// list yields all declared variable names in declared order.
#[test]
fn omitted_argument_list_defaults_to_all_variables() {
    let vars = variables(&[
        ("id", TypeDescriptor::named("ID").non_null()),
        ("locale", TypeDescriptor::named("String")),
    ]);

    assert_eq!(get_arguments(&vars, None), vec!["id", "locale"]);
}

/// Verifies that an explicit empty list is honored rather than treated as
/// "omitted".
#[test]
fn explicit_empty_argument_list_is_kept() {
    let vars = variables(&[("id", TypeDescriptor::named("ID"))]);
    let no_args: Vec<String> = vec![];

    assert!(get_arguments(&vars, Some(no_args.as_slice())).is_empty());
}

#[test]
fn explicit_argument_list_is_returned_unchanged() {
    let vars = variables(&[
        ("id", TypeDescriptor::named("ID")),
        ("locale", TypeDescriptor::named("String")),
    ]);
    let explicit = vec!["locale".to_string(), "undeclared".to_string()];

    assert_eq!(get_arguments(&vars, Some(explicit.as_slice())), explicit);
}
