use crate::ast;
use crate::variables::VariablesConfig;

/// Builds one field argument per name. Every argument is bound to the
/// variable of the same name (`name: $name`).
pub fn build_arguments<S: AsRef<str>>(args: &[S]) -> Vec<(String, ast::Value)> {
    args.iter()
        .map(|arg| {
            let arg = arg.as_ref();
            (arg.to_string(), ast::Value::Variable(arg.to_string()))
        })
        .collect()
}

/// Resolves the names of the variables to forward as entry-field
/// arguments.
///
/// An explicit list is returned unchanged, even when it is empty or names
/// variables that are not declared in `vars`. When no list is given, every
/// declared variable is forwarded in declared order.
pub fn get_arguments(
    vars: &VariablesConfig,
    args: Option<&[String]>,
) -> Vec<String> {
    match args {
        Some(args) => args.to_vec(),
        None => {
            log::trace!(
                "No explicit argument list; forwarding all {} declared \
                variables as arguments.",
                vars.len(),
            );
            vars.keys().cloned().collect()
        },
    }
}
