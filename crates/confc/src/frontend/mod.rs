//! Config frontends: the parser-facing side of the pipeline.
//!
//! The frontend owns everything that deals with the shape of the parsed
//! input document: the value tree the external parser delivers, the
//! structural scaffolding derived from its flat entry set, and the
//! comment-embedded annotations. The parser itself (HOCON resolution,
//! substitutions, includes) is an external collaborator; only its
//! delivery format lives here.

pub mod hocon;
