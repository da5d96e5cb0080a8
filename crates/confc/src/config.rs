//! Build options.

/// Options for the model builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Treat every field as required: optional marks, `@optional`
    /// comments and defaults are all discarded.
    pub assume_all_required: bool,
}
