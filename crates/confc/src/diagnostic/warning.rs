//! Non-fatal diagnostics accumulated during a build.

use std::fmt;

use serde::Serialize;

/// A non-fatal diagnostic tied to a source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// A list literal with more than one element; only the first fixes
    /// the element type.
    MultElemList { line: usize, source: String },
    /// A list element type spec carried an optional mark, which lists
    /// ignore.
    OptListElem { line: usize, source: String },
    /// A list element type spec carried a default value, which lists
    /// ignore.
    DefaultListElem { line: usize, source: String },
}

impl Warning {
    pub fn line(&self) -> usize {
        match self {
            Self::MultElemList { line, .. }
            | Self::OptListElem { line, .. }
            | Self::DefaultListElem { line, .. } => *line,
        }
    }

    pub fn source(&self) -> &str {
        match self {
            Self::MultElemList { source, .. }
            | Self::OptListElem { source, .. }
            | Self::DefaultListElem { source, .. } => source,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::MultElemList { .. } => "only the first element will define the list type",
            Self::OptListElem { .. } => "ignoring optional mark in list element type",
            Self::DefaultListElem { .. } => "ignoring default value in list element type",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {}: {}",
            self.line(),
            self.message(),
            self.source()
        )
    }
}

/// Append-only warning buffer, cleared at the start of each build.
#[derive(Debug, Default)]
pub struct Warnings {
    items: Vec<Warning>,
}

impl Warnings {
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push(&mut self, warning: Warning) {
        self.items.push(warning);
    }

    /// Drains the buffer sorted by line number; the sort is stable so
    /// same-line warnings keep their emission order.
    pub fn take_sorted(&mut self) -> Vec<Warning> {
        let mut items = std::mem::take(&mut self.items);
        items.sort_by_key(Warning::line);
        items
    }
}
