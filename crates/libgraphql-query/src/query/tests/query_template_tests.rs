use crate::ast;
use crate::query::transforms;
use crate::query::QueryBuildError;
use crate::query::QueryTemplate;
use crate::query::QueryTemplateConfig;
use crate::query::TemplateEntryConfig;
use crate::tests::ast_utils::entry_field;
use crate::tests::ast_utils::extract_query;
use crate::tests::ast_utils::field_names;
use crate::tests::ast_utils::fragment_names;
use crate::tests::ast_utils::parse_document;
use crate::tests::ast_utils::spread_names;
use crate::tests::ast_utils::variables;
use crate::types::TypeDescriptor;

fn products_template_config(args: &[&str]) -> QueryTemplateConfig {
    QueryTemplateConfig {
        name: "ListProducts".to_string(),
        variables: variables(&[
            ("first", TypeDescriptor::named("Int").non_null()),
            ("after", TypeDescriptor::named("ID")),
        ]),
        entry: TemplateEntryConfig {
            name: "products".to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            map_select: None,
        },
    }
}

/// Verifies that one template can select different fragment sets, with each
/// document sharing the same variables and arguments.
#[test]
fn select_is_reusable_across_fragment_sets() {
    let template = QueryTemplate::new(products_template_config(&["first", "after"])).unwrap();
    let summary = parse_document("fragment ProductSummary on Product { id name }");
    let pricing = parse_document("fragment ProductPricing on Product { price }");

    let summary_doc = template.select(&[summary.clone()]).unwrap();
    let full_doc = template.select(&[summary, pricing]).unwrap();

    assert_eq!(fragment_names(&summary_doc), vec!["ProductSummary"]);
    assert_eq!(fragment_names(&full_doc), vec!["ProductSummary", "ProductPricing"]);
    assert_eq!(
        spread_names(&entry_field(&full_doc).selection_set),
        vec!["ProductSummary", "ProductPricing"],
    );
    assert_eq!(
        extract_query(&summary_doc).variable_definitions,
        extract_query(&full_doc).variable_definitions,
    );
    assert_eq!(
        entry_field(&summary_doc).arguments,
        entry_field(&full_doc).arguments,
    );
}

/// Verifies that templates never fall back to forwarding every variable: an
/// empty argument list means no arguments.
#[test]
fn template_does_not_default_to_all_variables() {
    let template = QueryTemplate::new(products_template_config(&[])).unwrap();
    let summary = parse_document("fragment ProductSummary on Product { id }");

    let document = template.select(&[summary]).unwrap();

    assert!(entry_field(&document).arguments.is_empty());
    assert_eq!(extract_query(&document).variable_definitions.len(), 2);
}

#[test]
fn template_exposes_its_config() {
    let template = QueryTemplate::new(products_template_config(&["first"])).unwrap();

    assert_eq!(template.config().name, "ListProducts");
    assert_eq!(template.config().entry.args, vec!["first"]);
    assert_eq!(
        template.config().variables.keys().collect::<Vec<_>>(),
        vec!["first", "after"],
    );
}

#[test]
fn template_rejects_undeclared_argument_at_creation() {
    let result = QueryTemplate::new(products_template_config(&["first", "last"]));

    assert!(matches!(
        result,
        Err(QueryBuildError::UndeclaredArgument { argument_name, .. })
            if argument_name == "last"
    ));
}

#[test]
fn template_rejects_duplicate_argument_at_creation() {
    let result = QueryTemplate::new(
        products_template_config(&["first", "after", "first"]),
    );

    assert_eq!(
        result.unwrap_err(),
        QueryBuildError::DuplicateArgument {
            argument_name: "first".to_string(),
            operation_name: "ListProducts".to_string(),
        },
    );
}

#[test]
fn select_without_fragments_is_rejected() {
    let template = QueryTemplate::new(products_template_config(&["first"])).unwrap();

    assert_eq!(
        template.select(&[]).unwrap_err(),
        QueryBuildError::EmptySelectionSet {
            entry_name: "products".to_string(),
        },
    );
}

/// Verifies that a transform which supplies selections makes an empty
/// fragment list valid.
#[test]
fn select_without_fragments_uses_transform() {
    let mut config = products_template_config(&["first"]);
    config.entry.map_select = Some(transforms::with_leading_fields(["totalCount"]));
    let template = QueryTemplate::new(config).unwrap();

    let document = template.select(&[]).unwrap();

    assert_eq!(document.definitions.len(), 1);
    assert_eq!(
        field_names(&entry_field(&document).selection_set),
        vec!["totalCount"],
    );
}

#[test]
fn nested_select_without_fragments_is_rejected() {
    let mut config = products_template_config(&["first"]);
    config.entry.map_select = Some(transforms::nest_under(["edges", "node"]));
    let template = QueryTemplate::new(config).unwrap();

    assert!(matches!(
        template.select(&[]),
        Err(QueryBuildError::EmptySelectionSet { entry_name })
            if entry_name == "products"
    ));
}

#[test]
fn repeated_selects_yield_equal_documents() {
    let template = QueryTemplate::new(products_template_config(&["first"])).unwrap();
    let fragments: Vec<ast::Document> = vec![
        parse_document("fragment ProductSummary on Product { id }"),
    ];

    assert_eq!(
        template.select(&fragments).unwrap(),
        template.select(&fragments).unwrap(),
    );
}
