//! Lexically scoped registry of user-defined named types.
//!
//! Scopes form a tree mirroring the object nesting of the config; lookup
//! walks from the current scope outward. Scopes are kept in a flat arena
//! and reference their parent by index, so the whole tree is owned by
//! one value and handles stay `Copy`.

use indexmap::IndexMap;

use crate::ir::{ObjectType, Type};

/// Handle to one scope in a [`Namespace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(usize);

#[derive(Debug, Clone)]
struct Define {
    ty: Type,
    is_parent: bool,
}

#[derive(Debug)]
struct Scope {
    parent: Option<usize>,
    defines: IndexMap<String, Define>,
}

/// The scope arena. A fresh namespace holds only the root scope.
#[derive(Debug)]
pub struct Namespace {
    scopes: Vec<Scope>,
}

impl Namespace {
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope {
                parent: None,
                defines: IndexMap::new(),
            }],
        }
    }

    pub fn root(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Opens a child scope under `parent`.
    pub fn extend(&mut self, parent: ScopeId) -> ScopeId {
        self.scopes.push(Scope {
            parent: Some(parent.0),
            defines: IndexMap::new(),
        });
        ScopeId(self.scopes.len() - 1)
    }

    /// Records a define in `scope`, shadowing any enclosing define of the
    /// same name.
    pub fn add_define(&mut self, scope: ScopeId, name: &str, ty: Type, is_parent: bool) {
        self.scopes[scope.0]
            .defines
            .insert(name.to_string(), Define { ty, is_parent });
    }

    /// Resolves `name` in `scope` or any enclosing scope.
    pub fn resolve_define(&self, scope: ScopeId, name: &str) -> Option<&Type> {
        self.find(scope, name).map(|d| &d.ty)
    }

    /// The member view of `name`, iff it is registered as an abstract
    /// parent.
    pub fn get_abstract_define(&self, scope: ScopeId, name: &str) -> Option<&ObjectType> {
        match self.find(scope, name) {
            Some(Define {
                ty: Type::AbstractObject(obj),
                is_parent: true,
            }) => Some(obj),
            _ => None,
        }
    }

    /// Whether `name` resolves to an abstract parent define.
    pub fn is_abstract_class_define(&self, scope: ScopeId, name: &str) -> bool {
        self.get_abstract_define(scope, name).is_some()
    }

    fn find(&self, scope: ScopeId, name: &str) -> Option<&Define> {
        let mut current = Some(scope.0);
        while let Some(idx) = current {
            if let Some(define) = self.scopes[idx].defines.get(name) {
                return Some(define);
            }
            current = self.scopes[idx].parent;
        }
        None
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}
