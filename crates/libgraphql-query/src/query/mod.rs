mod entry_config;
mod prepared_operation;
mod query_build_error;
mod query_builder;
mod query_config;
mod query_template;
mod selection_set_transform;
pub mod transforms;

pub use entry_config::EntryConfig;
use prepared_operation::PreparedOperation;
pub use query_build_error::QueryBuildError;
pub use query_builder::build_query;
pub use query_config::QueryConfig;
pub use query_template::QueryTemplate;
pub use query_template::QueryTemplateConfig;
pub use query_template::TemplateEntryConfig;
pub use selection_set_transform::SelectionSetTransform;

#[cfg(test)]
mod tests;
