//! Comment-embedded annotations.
//!
//! Keys can be annotated through the comment lines that precede them:
//! a single `@define` directive turns the key into a named type, and
//! `@optional` marks the field optional regardless of its value spec.

use crate::diagnostic::BuildError;

/// The directive carried by a `@define` comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefineCase {
    /// Bare `@define`: a reusable named type.
    Plain,
    /// `@define abstract`: a parent class, never instantiated at root.
    Abstract,
    /// `@define extends <name>`: inherits the members of an abstract
    /// parent.
    Extends(String),
    /// `@define enum`: an enumeration backed by a list literal.
    Enum,
}

impl DefineCase {
    /// Whether this directive declares a parent class.
    pub fn is_parent(&self) -> bool {
        matches!(self, DefineCase::Abstract)
    }
}

/// Extracts the `@define` directive preceding `name`, if any. Exactly
/// one `@define` comment line is allowed per key.
pub fn define_from_comments(
    name: &str,
    comments: &[String],
) -> Result<Option<DefineCase>, BuildError> {
    let mut directives = comments
        .iter()
        .map(|c| c.trim())
        .filter(|c| c.starts_with("@define"));

    let Some(first) = directives.next() else {
        return Ok(None);
    };
    if directives.next().is_some() {
        return Err(BuildError::MultipleDefines {
            key: name.to_string(),
        });
    }
    parse_define(name, first).map(Some)
}

fn parse_define(name: &str, comment: &str) -> Result<DefineCase, BuildError> {
    let rest = comment["@define".len()..].trim();
    match rest {
        "" => return Ok(DefineCase::Plain),
        "abstract" => return Ok(DefineCase::Abstract),
        "enum" => return Ok(DefineCase::Enum),
        _ => {}
    }
    if let Some(after) = rest.strip_prefix("extends") {
        if after.starts_with(char::is_whitespace) {
            let parent = after.trim();
            if !parent.is_empty() && parent.split_whitespace().count() == 1 {
                return Ok(DefineCase::Extends(parent.to_string()));
            }
        }
    }
    Err(BuildError::MalformedDefine {
        key: name.to_string(),
        comment: comment.to_string(),
    })
}

/// Whether any comment line marks the key `@optional`.
pub fn optional_from_comments(comments: &[String]) -> bool {
    comments.iter().any(|c| c.trim().starts_with("@optional"))
}
