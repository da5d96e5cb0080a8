//! Parser for the inline type-spec DSL carried by leaf string values.
//!
//! A leaf string in a config template either names a type, optionally
//! with a default (`"int | 8080"`, `"string?"`, `"duration : seconds"`),
//! or is a bare duration/size literal (`"10ms"`, `"4KiB"`). Literals are
//! recognized first; the `type[?][:qualifier][ | default]` grammar runs
//! only when neither literal form matches. A string matching none of
//! these is not a spec at all and the caller treats it as a plain
//! default value.

use crate::ir::{BasicType, TimeUnit};

/// Result of parsing a value string as a type spec.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub basic: BasicType,
    pub optional: bool,
    pub default: Option<String>,
}

/// Parses a leaf value string. `None` means the string is not a type spec.
pub fn parse(value: &str) -> Option<TypeSpec> {
    if is_duration_literal(value) {
        return Some(TypeSpec {
            basic: BasicType::Duration(TimeUnit::Milliseconds),
            optional: true,
            default: Some(value.to_string()),
        });
    }
    if is_size_literal(value) {
        return Some(TypeSpec {
            basic: BasicType::Size,
            optional: true,
            default: Some(value.to_string()),
        });
    }

    let (type_part, default) = match value.split_once('|') {
        Some((t, d)) => (t.trim(), Some(d.trim().to_string())),
        None => (value.trim(), None),
    };
    let has_default = default.is_some();

    let lowered = type_part.to_lowercase();
    let (base_spec, optional) = match lowered.strip_suffix('?') {
        Some(stripped) => (stripped.trim_end(), true),
        None => (lowered.as_str(), has_default),
    };

    let (base, qualifier) = match base_spec.split_once(':') {
        Some((b, q)) => (b.trim(), Some(q.trim())),
        None => (base_spec, None),
    };

    let mut basic = BasicType::from_type_name(base)?;
    if let (BasicType::Duration(_), Some(q)) = (&basic, qualifier) {
        basic = BasicType::Duration(TimeUnit::from_name(q)?);
    }

    Some(TypeSpec {
        basic,
        optional,
        default,
    })
}

/// Splits a literal into its numeric magnitude and unit word. The unit
/// may be separated from the magnitude by whitespace.
fn split_literal(value: &str) -> Option<(&str, &str)> {
    let s = value.trim();
    let digits_end = s.find(|c: char| !(c.is_ascii_digit() || c == '.'))?;
    let (magnitude, rest) = s.split_at(digits_end);
    if magnitude.is_empty() || magnitude.parse::<f64>().is_err() {
        return None;
    }
    let unit = rest.trim();
    if unit.is_empty() {
        return None;
    }
    Some((magnitude, unit))
}

fn is_duration_literal(value: &str) -> bool {
    split_literal(value).is_some_and(|(_, unit)| TimeUnit::from_name(unit).is_some())
}

fn is_size_literal(value: &str) -> bool {
    split_literal(value).is_some_and(|(_, unit)| is_size_unit(unit))
}

fn is_size_unit(unit: &str) -> bool {
    matches!(
        unit,
        "B" | "b"
            | "byte"
            | "bytes"
            | "kB"
            | "kilobyte"
            | "kilobytes"
            | "K"
            | "k"
            | "Ki"
            | "KiB"
            | "kibibyte"
            | "kibibytes"
            | "MB"
            | "megabyte"
            | "megabytes"
            | "M"
            | "Mi"
            | "MiB"
            | "mebibyte"
            | "mebibytes"
            | "GB"
            | "gigabyte"
            | "gigabytes"
            | "G"
            | "g"
            | "Gi"
            | "GiB"
            | "gibibyte"
            | "gibibytes"
            | "TB"
            | "terabyte"
            | "terabytes"
            | "T"
            | "t"
            | "Ti"
            | "TiB"
            | "tebibyte"
            | "tebibytes"
            | "PB"
            | "petabyte"
            | "petabytes"
            | "P"
            | "p"
            | "Pi"
            | "PiB"
            | "pebibyte"
            | "pebibytes"
    )
}
