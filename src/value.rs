//! The generic block reader (`spec.md` §4.2): the two reusable shapes
//! handlers build on top of the [`crate::scanner::Scanner`] primitives.

use indexmap::IndexMap;

use crate::error::SyntaxError;
use crate::scanner::Scanner;

/// The optional name/index that precedes a brace body.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectPrefix {
    /// A quoted name, e.g. `Camera "Standard"`.
    Name(String),
    /// A numeric index, e.g. `1 Bitmap { ... }`.
    Index(i64),
}

/// A raw, untyped value recognized by the generic block reader.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A bare number.
    Number(f64),
    /// A quoted string.
    Text(String),
    /// A brace-delimited numeric array.
    Array(Vec<f64>),
}

impl Value {
    /// Returns this value as `f32`, truncating as needed.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Number(n) => Some(*n as f32),
            _ => None,
        }
    }

    /// Returns this value as `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n as i64),
            _ => None,
        }
    }

    /// Returns this value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns this value as a fixed arity-3 float array, e.g. for
    /// `MinimumExtent`/`MaximumExtent`.
    pub fn as_vec3(&self) -> Option<[f32; 3]> {
        match self {
            Value::Array(a) if a.len() == 3 => Some([a[0] as f32, a[1] as f32, a[2] as f32]),
            _ => None,
        }
    }

    /// Returns this value as a fixed arity-2 unsigned integer array,
    /// e.g. for `Interval`.
    pub fn as_u32_pair(&self) -> Option<(u32, u32)> {
        match self {
            Value::Array(a) if a.len() == 2 => Some((a[0] as u32, a[1] as u32)),
            _ => None,
        }
    }
}

/// Reads an optional prefix (a quoted string, else a number) followed
/// by a `{ key value (,)? }*` body.
///
/// This is the untyped shape described in `spec.md` §4.2; most block
/// handlers in `crate::parser` bypass it in favor of direct keyword
/// dispatch so they can apply the static/animated duality and flag
/// rules `spec.md` §4.4 requires, but the simplest blocks (`Sequences`
/// entries, `Textures` entries, `PivotPoints`, `GlobalSequences`) are
/// well served by this generic reader.
pub fn read_object(
    scanner: &mut Scanner,
) -> Result<(Option<ObjectPrefix>, IndexMap<String, Value>), SyntaxError> {
    let prefix = if let Some(name) = scanner.quoted_string() {
        Some(ObjectPrefix::Name(name))
    } else if matches!(scanner.peek_char(), Some(c) if c == '-' || c.is_ascii_digit()) {
        Some(ObjectPrefix::Index(scanner.number()? as i64))
    } else {
        None
    };

    scanner.expect_symbol('{')?;
    let mut body = IndexMap::new();
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let key = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        let value = read_value(scanner)?;
        body.insert(key, value);
        scanner.maybe_comma();
    }
    Ok((prefix, body))
}

/// Reads one value by peeking the next character: `{` is an array,
/// `"` is a string, and `[-0-9]` is a number.
pub fn read_value(scanner: &mut Scanner) -> Result<Value, SyntaxError> {
    if let Some(values) = scanner.array()? {
        return Ok(Value::Array(values));
    }
    if let Some(text) = scanner.quoted_string() {
        return Ok(Value::Text(text));
    }
    Ok(Value::Number(scanner.number()?))
}

/// Reads a brace-delimited (or bare-scalar) arity-3 float value,
/// padding with zeroes if the source provides fewer elements. Used by
/// per-block handlers for positions and extents that are always plain
/// vectors, never animated.
pub fn read_vec3(scanner: &mut Scanner) -> Result<[f32; 3], SyntaxError> {
    let values = scanner.array_or_scalar()?;
    Ok([
        values.first().copied().unwrap_or(0.0) as f32,
        values.get(1).copied().unwrap_or(0.0) as f32,
        values.get(2).copied().unwrap_or(0.0) as f32,
    ])
}
