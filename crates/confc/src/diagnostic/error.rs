//! Fatal build errors.

use miette::Diagnostic;
use thiserror::Error;

/// Errors that abort a model build.
#[derive(Error, Diagnostic, Debug)]
pub enum BuildError {
    #[error("multiple @define's for '{key}'")]
    #[diagnostic(code(confc::annotation::multiple_defines))]
    MultipleDefines { key: String },

    #[error("bad @define for '{key}': {comment}")]
    #[diagnostic(
        code(confc::annotation::malformed_define),
        help("expected `@define`, `@define abstract`, `@define extends <name>`, or `@define enum`")
    )]
    MalformedDefine { key: String, comment: String },

    #[error("'{field}' extends '{parent}', which is not an abstract define")]
    #[diagnostic(code(confc::model::extends_non_abstract))]
    ExtendsNonAbstract { field: String, parent: String },

    #[error("'{field}' extends unknown define '{parent}'")]
    #[diagnostic(
        code(confc::model::unknown_parent),
        help("declare the parent with `@define abstract` before the extending member")
    )]
    UnknownParent { field: String, parent: String },

    #[error("empty list literal for '{path}' at line {line}")]
    #[diagnostic(
        code(confc::model::empty_list),
        help("a list needs one element to fix its element type")
    )]
    EmptyList { path: String, line: usize },

    #[error("unexpected null value for '{path}'")]
    #[diagnostic(code(confc::model::unexpected_null))]
    UnexpectedNull { path: String },

    #[error("number '{value}' does not fit any numeric type")]
    #[diagnostic(code(confc::model::bad_number))]
    BadNumber { value: String },

    #[error("no value for '{path}'")]
    #[diagnostic(code(confc::model::missing_value))]
    MissingValue { path: String },
}
