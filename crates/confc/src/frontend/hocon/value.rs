//! Resolved config values as delivered by the external parser.
//!
//! The parser hands the compiler a fully resolved tree: every value
//! carries its origin line and the raw comment lines (delimiter already
//! stripped) that preceded its key. Values are assembled with the
//! builder-style constructors, which is also how tests fabricate parser
//! output.

use indexmap::IndexMap;

use crate::key::Key;

/// Source metadata attached to every value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Origin {
    pub line: usize,
    pub comments: Vec<String>,
}

/// The kind of a config value, as reported by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Boolean,
    Number,
    List,
    Object,
    Null,
}

/// A resolved config value with its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValue {
    pub value: Value,
    pub origin: Origin,
}

/// The payload of a config value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Boolean(bool),
    /// Numbers keep the decimal rendering the parser produced.
    Number(String),
    List(Vec<ConfigValue>),
    Object(IndexMap<String, ConfigValue>),
    Null,
}

impl ConfigValue {
    fn new(value: Value) -> Self {
        Self {
            value,
            origin: Origin::default(),
        }
    }

    pub fn string(s: impl Into<String>) -> Self {
        Self::new(Value::String(s.into()))
    }

    pub fn boolean(b: bool) -> Self {
        Self::new(Value::Boolean(b))
    }

    pub fn number(n: impl ToString) -> Self {
        Self::new(Value::Number(n.to_string()))
    }

    pub fn list(items: impl IntoIterator<Item = ConfigValue>) -> Self {
        Self::new(Value::List(items.into_iter().collect()))
    }

    pub fn object<K: Into<String>>(members: impl IntoIterator<Item = (K, ConfigValue)>) -> Self {
        Self::new(Value::Object(
            members.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    pub fn null() -> Self {
        Self::new(Value::Null)
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.origin.line = line;
        self
    }

    pub fn with_comments<I, S>(mut self, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origin.comments = comments.into_iter().map(Into::into).collect();
        self
    }

    pub fn kind(&self) -> ValueKind {
        match &self.value {
            Value::String(_) => ValueKind::String,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::List(_) => ValueKind::List,
            Value::Object(_) => ValueKind::Object,
            Value::Null => ValueKind::Null,
        }
    }

    /// The native value rendered as a string, the way the parser's
    /// unwrapping reports it.
    pub fn unwrapped(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            Value::Boolean(b) => b.to_string(),
            Value::Number(n) => n.clone(),
            Value::List(_) | Value::Object(_) => self.render(),
            Value::Null => "null".to_string(),
        }
    }

    /// Concise rendering used as the source text of diagnostics.
    pub fn render(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            Value::Boolean(b) => b.to_string(),
            Value::Number(n) => n.clone(),
            Value::List(items) => {
                let inner: Vec<String> = items.iter().map(ConfigValue::render).collect();
                format!("[{}]", inner.join(","))
            }
            Value::Object(members) => {
                let inner: Vec<String> = members
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, v.render()))
                    .collect();
                format!("{{{}}}", inner.join(","))
            }
            Value::Null => "null".to_string(),
        }
    }

    /// Views an object value as a [`Config`].
    pub fn as_config(&self) -> Option<Config<'_>> {
        match &self.value {
            Value::Object(members) => Some(Config::new(members)),
            _ => None,
        }
    }
}

/// Borrowed view of an object value: the config API the model builder
/// consumes.
#[derive(Debug, Clone, Copy)]
pub struct Config<'a> {
    members: &'a IndexMap<String, ConfigValue>,
}

impl<'a> Config<'a> {
    pub fn new(members: &'a IndexMap<String, ConfigValue>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &'a IndexMap<String, ConfigValue> {
        self.members
    }

    /// Leaf entries as `(dotted path, value)`, depth-first in insertion
    /// order. Objects never appear themselves; an object with no leaf
    /// descendants contributes nothing.
    pub fn entry_set(&self) -> Vec<(String, &'a ConfigValue)> {
        let mut out = Vec::new();
        collect_entries(&Key::root(), self.members, &mut out);
        out
    }

    /// Resolves a member by name, or by dotted path when no member
    /// carries the full name verbatim.
    pub fn get_value(&self, path: &str) -> Option<&'a ConfigValue> {
        if let Some(v) = self.members.get(path) {
            return Some(v);
        }
        let (head, rest) = path.split_once('.')?;
        match &self.members.get(head)?.value {
            Value::Object(children) => Config::new(children).get_value(rest),
            _ => None,
        }
    }

    /// Resolves a member that must be an object.
    pub fn get_config(&self, path: &str) -> Option<Config<'a>> {
        self.get_value(path)?.as_config()
    }
}

fn collect_entries<'a>(
    prefix: &Key,
    members: &'a IndexMap<String, ConfigValue>,
    out: &mut Vec<(String, &'a ConfigValue)>,
) {
    for (name, value) in members {
        let path = prefix.child(name);
        match &value.value {
            Value::Object(children) => collect_entries(&path, children, out),
            _ => out.push((path.as_str().to_string(), value)),
        }
    }
}
