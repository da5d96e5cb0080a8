//! Typed intermediate representation.
//!
//! The IR is produced by the model builder and consumed by code emitters.
//! It represents the schema of a configuration (objects, typed leaves,
//! lists, enumerations, parent classes) independently of any target
//! language. Everything serializes with serde so emitters can run as
//! separate programs.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Time unit carried by a duration type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Maps a HOCON unit word or a `duration : <unit>` qualifier to a unit.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ns" | "nano" | "nanos" | "nanosecond" | "nanoseconds" => Some(Self::Nanoseconds),
            "us" | "micro" | "micros" | "microsecond" | "microseconds" => Some(Self::Microseconds),
            "ms" | "milli" | "millis" | "millisecond" | "milliseconds" => Some(Self::Milliseconds),
            "s" | "second" | "seconds" => Some(Self::Seconds),
            "m" | "minute" | "minutes" => Some(Self::Minutes),
            "h" | "hour" | "hours" => Some(Self::Hours),
            "d" | "day" | "days" => Some(Self::Days),
            _ => None,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nanoseconds => "nanoseconds",
            Self::Microseconds => "microseconds",
            Self::Milliseconds => "milliseconds",
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
        };
        f.write_str(name)
    }
}

/// Atomic leaf types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BasicType {
    String,
    Boolean,
    Integer,
    Long,
    Double,
    Duration(TimeUnit),
    Size,
}

impl BasicType {
    /// Looks up a base type name from the type-spec DSL. A bare `duration`
    /// defaults to milliseconds.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "boolean" => Some(Self::Boolean),
            "int" => Some(Self::Integer),
            "long" => Some(Self::Long),
            "double" => Some(Self::Double),
            "duration" => Some(Self::Duration(TimeUnit::Milliseconds)),
            "size" => Some(Self::Size),
            _ => None,
        }
    }

    /// Narrowest numeric type whose domain holds the decimal literal,
    /// tried int, long, double in that order.
    pub fn for_number(literal: &str) -> Option<Self> {
        if literal.parse::<i32>().is_ok() {
            return Some(Self::Integer);
        }
        if literal.parse::<i64>().is_ok() {
            return Some(Self::Long);
        }
        match literal.parse::<f64>() {
            Ok(d) if d.is_finite() => Some(Self::Double),
            _ => None,
        }
    }
}

impl fmt::Display for BasicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Boolean => f.write_str("boolean"),
            Self::Integer => f.write_str("int"),
            Self::Long => f.write_str("long"),
            Self::Double => f.write_str("double"),
            Self::Duration(unit) => write!(f, "duration:{unit}"),
            Self::Size => f.write_str("size"),
        }
    }
}

/// A type in the IR.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    Basic(BasicType),
    /// Concrete object with named, annotated members.
    Object(ObjectType),
    /// Parent class introduced by `@define abstract`; never instantiated
    /// at the object root.
    AbstractObject(ObjectType),
    /// Enumeration introduced by `@define enum` on a list literal.
    Enum(EnumType),
    List(Box<Type>),
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic(b) => b.fmt(f),
            Self::Object(_) => f.write_str("object"),
            Self::AbstractObject(_) => f.write_str("abstract object"),
            Self::Enum(_) => f.write_str("enum"),
            Self::List(elem) => write!(f, "list of {elem}"),
        }
    }
}

/// An object type: an ordered mapping of member names to annotated types.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ObjectType {
    pub members: IndexMap<String, AnnType>,
}

/// An enumeration: the ordered list of its values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumType {
    pub values: Vec<String>,
}

/// An annotated field: a type plus optionality, default value, the raw
/// comments that preceded the key, and the member view of an extended
/// parent class when the field carried `@define extends`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnType {
    pub t: Type,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_class_members: Option<IndexMap<String, AnnType>>,
}
