//! Recursive model builder.
//!
//! Composes the struct builder, annotation reader, type-spec parser and
//! namespace into the typed IR. Each object is built top-down: its
//! members are derived from the struct tree, `@define`-carrying members
//! are visited first so later siblings can resolve references to them,
//! and every member becomes an [`AnnType`] in the resulting
//! [`ObjectType`].

pub mod namespace;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::config::BuildOptions;
use crate::diagnostic::{BuildError, Warning, Warnings};
use crate::frontend::hocon::annotation::{self, DefineCase};
use crate::frontend::hocon::structs::{self, MemberStruct};
use crate::frontend::hocon::value::{Config, ConfigValue, Value};
use crate::ir::{AnnType, BasicType, EnumType, ObjectType, Type};
use crate::typespec;
use namespace::{Namespace, ScopeId};

/// Outcome of a successful build: the root object plus accumulated
/// warnings sorted by source line.
#[derive(Debug)]
pub struct ModelBuildResult {
    pub object_type: ObjectType,
    pub warnings: Vec<Warning>,
}

/// Builds typed models from parsed configs.
///
/// A builder is reusable: every call to [`build`](Self::build) starts
/// from a fresh namespace and an empty warning buffer, so independent
/// builders can run in parallel.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    options: BuildOptions,
    warnings: Warnings,
}

impl ModelBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            warnings: Warnings::default(),
        }
    }

    /// Runs the pipeline on a parsed config.
    pub fn build(&mut self, conf: Config) -> Result<ModelBuildResult, BuildError> {
        self.warnings.clear();
        let mut ns = Namespace::new();
        let root_scope = ns.root();
        let object_type = self.object_from_config(&mut ns, root_scope, conf)?;
        Ok(ModelBuildResult {
            object_type,
            warnings: self.warnings.take_sorted(),
        })
    }

    fn object_from_config(
        &mut self,
        ns: &mut Namespace,
        scope: ScopeId,
        conf: Config,
    ) -> Result<ObjectType, BuildError> {
        let root_struct = structs::build(conf.entry_set().into_iter().map(|(path, _)| path));
        debug!(members = root_struct.members.len(), "building object");

        // Pair each child struct with its @define directive, then move
        // shared objects to the front (stable) so later siblings can
        // resolve references to them.
        let mut children: Vec<(String, MemberStruct, Option<DefineCase>)> = Vec::new();
        for (name, node) in root_struct.members {
            let cv = conf
                .get_value(&name)
                .ok_or_else(|| BuildError::MissingValue { path: name.clone() })?;
            let define = annotation::define_from_comments(&name, &cv.origin.comments)?;
            children.push((name, node, define));
        }
        children.sort_by_key(|(_, _, define)| define.is_none());

        let mut members: IndexMap<String, AnnType> = IndexMap::new();
        for (name, node, define) in children {
            let cv = conf
                .get_value(&name)
                .ok_or_else(|| BuildError::MissingValue { path: name.clone() })?;

            let (mut child_type, optional, default) = if node.is_leaf() {
                self.leaf_type(ns, scope, &name, cv, &define)?
            } else {
                let child_scope = ns.extend(scope);
                let child_conf = conf
                    .get_config(&name)
                    .ok_or_else(|| BuildError::MissingValue { path: name.clone() })?;
                let object = self.object_from_config(ns, child_scope, child_conf)?;
                (Type::Object(object), false, None)
            };

            let comments = &cv.origin.comments;
            let optional_comment = annotation::optional_from_comments(comments);
            let comments_opt = if comments.is_empty() {
                None
            } else {
                Some(comments.join("\n"))
            };

            let (optional, default) = if self.options.assume_all_required {
                (false, None)
            } else {
                (optional || optional_comment, default)
            };

            let parent_class_members = match &define {
                Some(DefineCase::Extends(parent)) => {
                    Some(self.parent_members(ns, scope, &name, parent)?)
                }
                _ => None,
            };

            // An abstract define is a parent class, not a concrete object.
            if matches!(define, Some(DefineCase::Abstract)) {
                if let Type::Object(object) = child_type {
                    child_type = Type::AbstractObject(object);
                }
            }

            let ann = AnnType {
                t: child_type,
                optional,
                default,
                comments: comments_opt,
                parent_class_members,
            };

            if let Some(case) = &define {
                trace!(name = %name, parent = case.is_parent(), "registering define");
                ns.add_define(scope, &name, ann.t.clone(), case.is_parent());
            }
            members.insert(adjust_name(&name), ann);
        }

        // Parent-class placeholders are type definitions, not fields.
        members.retain(|_, ann| {
            !matches!(ann.t, Type::AbstractObject(_))
                && !ann
                    .default
                    .as_deref()
                    .is_some_and(|d| ns.is_abstract_class_define(scope, d))
        });

        Ok(ObjectType { members })
    }

    fn leaf_type(
        &mut self,
        ns: &mut Namespace,
        scope: ScopeId,
        name: &str,
        cv: &ConfigValue,
        define: &Option<DefineCase>,
    ) -> Result<(Type, bool, Option<String>), BuildError> {
        match &cv.value {
            Value::String(s) => {
                if let Some(t) = ns.resolve_define(scope, s) {
                    return Ok((t.clone(), false, None));
                }
                match typespec::parse(s) {
                    Some(spec) => Ok((Type::Basic(spec.basic), spec.optional, spec.default)),
                    // not a spec: the literal is an unknown default string
                    None => Ok((Type::Basic(BasicType::String), true, Some(s.clone()))),
                }
            }
            Value::Boolean(b) => Ok((
                Type::Basic(BasicType::Boolean),
                true,
                Some(b.to_string()),
            )),
            Value::Number(n) => {
                let basic = BasicType::for_number(n)
                    .ok_or_else(|| BuildError::BadNumber { value: n.clone() })?;
                Ok((Type::Basic(basic), true, Some(n.clone())))
            }
            Value::List(elements) if matches!(define, Some(DefineCase::Enum)) => {
                let values = elements.iter().map(ConfigValue::unwrapped).collect();
                Ok((Type::Enum(EnumType { values }), false, None))
            }
            Value::List(elements) => {
                let element = self.list_element_type(ns, scope, name, cv, elements)?;
                Ok((Type::List(Box::new(element)), false, None))
            }
            // reached only when a child was classified as leaf; keep the
            // object semantics by recursing in place
            Value::Object(obj) => {
                let object = self.object_from_config(ns, scope, Config::new(obj))?;
                Ok((Type::Object(object), false, None))
            }
            Value::Null => Err(BuildError::UnexpectedNull {
                path: name.to_string(),
            }),
        }
    }

    /// Element typing for a list literal: exactly one element fixes the
    /// type; extra elements are ignored with a warning.
    fn list_element_type(
        &mut self,
        ns: &mut Namespace,
        scope: ScopeId,
        name: &str,
        cv: &ConfigValue,
        elements: &[ConfigValue],
    ) -> Result<Type, BuildError> {
        let line = cv.origin.line;
        let first = elements.first().ok_or_else(|| BuildError::EmptyList {
            path: name.to_string(),
            line,
        })?;
        if elements.len() > 1 {
            self.warnings.push(Warning::MultElemList {
                line,
                source: cv.render(),
            });
        }

        match &first.value {
            Value::String(s) => {
                if let Some(t) = ns.resolve_define(scope, s) {
                    return Ok(t.clone());
                }
                match typespec::parse(s) {
                    Some(spec) => {
                        if spec.optional {
                            self.warnings.push(Warning::OptListElem {
                                line: first.origin.line,
                                source: s.clone(),
                            });
                        }
                        if spec.default.is_some() {
                            self.warnings.push(Warning::DefaultListElem {
                                line: first.origin.line,
                                source: s.clone(),
                            });
                        }
                        Ok(Type::Basic(spec.basic))
                    }
                    None => Ok(Type::Basic(BasicType::String)),
                }
            }
            Value::Boolean(_) => Ok(Type::Basic(BasicType::Boolean)),
            Value::Number(n) => Ok(Type::Basic(
                BasicType::for_number(n).ok_or_else(|| BuildError::BadNumber { value: n.clone() })?,
            )),
            Value::List(inner) => Ok(Type::List(Box::new(
                self.list_element_type(ns, scope, name, first, inner)?,
            ))),
            Value::Object(obj) => Ok(Type::Object(self.object_from_config(
                ns,
                scope,
                Config::new(obj),
            )?)),
            Value::Null => Err(BuildError::UnexpectedNull {
                path: name.to_string(),
            }),
        }
    }

    fn parent_members(
        &self,
        ns: &Namespace,
        scope: ScopeId,
        field: &str,
        parent: &str,
    ) -> Result<IndexMap<String, AnnType>, BuildError> {
        if let Some(object) = ns.get_abstract_define(scope, parent) {
            return Ok(object.members.clone());
        }
        match ns.resolve_define(scope, parent) {
            Some(_) => Err(BuildError::ExtendsNonAbstract {
                field: field.to_string(),
                parent: parent.to_string(),
            }),
            None => Err(BuildError::UnknownParent {
                field: field.to_string(),
                parent: parent.to_string(),
            }),
        }
    }
}

/// Final name adjustment: names containing `$` stay verbatim; otherwise
/// one surrounding double quote is stripped from each end.
fn adjust_name(name: &str) -> String {
    if name.contains('$') {
        return name.to_string();
    }
    let stripped = name.strip_prefix('"').unwrap_or(name);
    let stripped = stripped.strip_suffix('"').unwrap_or(stripped);
    stripped.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_name() {
        assert_eq!(adjust_name("plain"), "plain");
        assert_eq!(adjust_name("\"quoted\""), "quoted");
        assert_eq!(adjust_name("\"half"), "half");
        assert_eq!(adjust_name("with$dollar"), "with$dollar");
        assert_eq!(adjust_name("\"kept$\""), "\"kept$\"");
    }
}
