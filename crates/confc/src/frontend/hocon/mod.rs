//! HOCON-shaped input: the resolved value tree, struct scaffolding, and
//! comment annotations.

pub mod annotation;
pub mod structs;
pub mod value;
