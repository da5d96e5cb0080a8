//! # confc
//!
//! A typed configuration schema compiler. It consumes a HOCON-style
//! configuration template, where leaf values carry either concrete
//! defaults or a small type-spec DSL and key-preceding comments carry
//! `@define` / `@optional` annotations, and produces a typed
//! intermediate representation that code emitters turn into statically
//! typed accessor layers.
//!
//! ## Architecture
//!
//! ```text
//! Parsed config (external HOCON parser)
//!        │
//!        ▼
//! ┌───────────────┐
//! │   Frontend    │  flat entries → struct tree, comment annotations
//! └───────┬───────┘
//!         │
//!         ▼
//! ┌───────────────┐
//! │ Model builder │  type-spec DSL, named defines, inheritance
//! └───────┬───────┘
//!         │
//!         ▼
//! ┌───────────────┐
//! │      IR       │  ObjectType / AnnType tree + warnings
//! └───────────────┘
//! ```
//!
//! The HOCON parser and the per-language emitters are external
//! collaborators; this crate owns the transformation in between.
//!
//! ## Usage
//!
//! ```rust
//! use confc::{ConfigValue, ModelBuilder, BuildOptions};
//!
//! let root = ConfigValue::object([
//!     ("host", ConfigValue::string("string")),
//!     ("port", ConfigValue::string("int | 8080")),
//! ]);
//!
//! let mut builder = ModelBuilder::new(BuildOptions::default());
//! let result = builder.build(root.as_config().unwrap()).unwrap();
//! assert_eq!(result.object_type.members.len(), 2);
//! ```

pub mod config;
pub mod diagnostic;
pub mod frontend;
pub mod ir;
pub mod key;
pub mod model;
pub mod typespec;

pub use config::BuildOptions;
pub use diagnostic::{BuildError, Warning};
pub use frontend::hocon::value::{Config, ConfigValue, Origin, Value, ValueKind};
pub use model::{ModelBuildResult, ModelBuilder};

/// Builds a typed model from a parsed config using default options.
pub fn build(conf: Config) -> Result<ModelBuildResult, BuildError> {
    ModelBuilder::new(BuildOptions::default()).build(conf)
}
