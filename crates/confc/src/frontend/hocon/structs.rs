//! Structural scaffolding derived from the flat entry set.
//!
//! The parser reports leaves as flat `path -> value` entries. Before any
//! typing happens those paths are folded back into a tree of named
//! structs, preserving only names and containment. A leaf is a struct
//! with no members; intermediate objects are created on demand.

use indexmap::IndexMap;

use crate::key::Key;

/// A node in the struct tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberStruct {
    pub name: String,
    pub members: IndexMap<String, MemberStruct>,
}

impl MemberStruct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: IndexMap::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.members.is_empty()
    }
}

/// Folds leaf paths into a tree rooted at the unnamed root struct.
/// Sibling order follows first insertion; the model builder reorders
/// later where order matters.
pub fn build(paths: impl IntoIterator<Item = String>) -> MemberStruct {
    let mut root = MemberStruct::new("");
    for path in paths {
        let key = Key::new(path);
        let mut node = &mut root;
        for segment in key.segments() {
            node = node
                .members
                .entry(segment.to_string())
                .or_insert_with(|| MemberStruct::new(segment));
        }
    }
    root
}
