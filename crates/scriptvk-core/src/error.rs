//! Error types for the marshaling engine.
//!
//! Two layers:
//! - [`ConversionError`]: a single primitive failed to convert between
//!   its dynamic and native representation. Produced by the
//!   [`FromValue`](crate::convert::FromValue) implementations, which
//!   don't know what field they are converting.
//! - [`MarshalError`]: a conversion or structural failure qualified
//!   with the dotted path of the field it occurred at. Produced by the
//!   field accessors and struct checkers; this is what reaches the
//!   host.
//!
//! Absence of an optional field is **not** an error at either layer:
//! optional accessors return `Ok(None)` or substitute the documented
//! default. There is no sentinel "not present" code to forget to
//! check.

use thiserror::Error;

/// Errors that can occur when converting a single dynamic value to a
/// native primitive.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// The value has the wrong dynamic kind.
    #[error("expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Integer value out of range for the target type.
    #[error("integer {value} does not fit in {target_type}")]
    IntegerOverflow { value: i64, target_type: &'static str },

    /// Float value cannot be represented in the target type.
    #[error("float {value} cannot be represented as {target_type}")]
    FloatConversion { value: f64, target_type: &'static str },
}

/// Marshaling failure categories.
///
/// Every variant is a local, synchronous signal; none is used for
/// control flow beyond immediate propagation to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// Expected a record or sequence, got a different kind.
    #[error("expected a table, got {actual}")]
    Table { actual: &'static str },

    /// Field present but of the wrong primitive kind.
    #[error("expected {expected}, got {actual}")]
    Type {
        expected: &'static str,
        actual: &'static str,
    },

    /// Numeric field out of range for its native type.
    #[error("integer {value} does not fit in {target}")]
    Range { value: i64, target: &'static str },

    /// String not found in the relevant enum registry, or an otherwise
    /// invalid value (unknown flag bits, unrepresentable float).
    #[error("invalid value: {what}")]
    Value { what: String },

    /// A cross-field length invariant was violated.
    #[error("invalid length")]
    Length,

    /// A required non-empty sequence or blob was empty.
    #[error("empty value not allowed")]
    Empty,

    /// Allocation failure.
    #[error("out of memory")]
    Memory,
}

/// A marshaling failure carrying the dotted path of the field it
/// occurred at, e.g. `stages.2.specialization_info.data`.
///
/// Errors are created at the leaf with an empty path; each enclosing
/// checker prepends its own field name (or element index) on the way
/// out, and the top-level argument wrappers stamp the argument
/// position. The resulting message reads like
/// `argument #1: stages.2.specialization_info.data: invalid length`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", render(.kind, .path, .arg))]
pub struct MarshalError {
    kind: ErrorKind,
    path: String,
    arg: Option<u32>,
}

fn render(kind: &ErrorKind, path: &str, arg: &Option<u32>) -> String {
    let mut out = String::new();
    if let Some(pos) = arg {
        out.push_str(&format!("argument #{pos}: "));
    }
    if !path.is_empty() {
        out.push_str(path);
        out.push_str(": ");
    }
    out.push_str(&kind.to_string());
    out
}

impl MarshalError {
    /// Create an error with an empty field path.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            path: String::new(),
            arg: None,
        }
    }

    /// The failure category.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The dotted field path, possibly empty.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Prepend a field name to the path.
    #[must_use]
    pub fn in_field(mut self, field: &str) -> Self {
        self.path = join_path(field, &self.path);
        self
    }

    /// Prepend a sequence index to the path.
    #[must_use]
    pub fn at_index(mut self, index: usize) -> Self {
        self.path = join_path(&index.to_string(), &self.path);
        self
    }

    /// Stamp the argument position of the call this error came from.
    #[must_use]
    pub fn at_arg(mut self, arg: u32) -> Self {
        self.arg = Some(arg);
        self
    }
}

fn join_path(head: &str, tail: &str) -> String {
    if tail.is_empty() {
        head.to_string()
    } else {
        let mut out = String::with_capacity(head.len() + tail.len() + 1);
        out.push_str(head);
        out.push('.');
        out.push_str(tail);
        out
    }
}

impl From<ConversionError> for ErrorKind {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::TypeMismatch { expected, actual } => {
                ErrorKind::Type { expected, actual }
            }
            ConversionError::IntegerOverflow { value, target_type } => ErrorKind::Range {
                value,
                target: target_type,
            },
            ConversionError::FloatConversion { value, target_type } => ErrorKind::Value {
                what: format!("float {value} cannot be represented as {target_type}"),
            },
        }
    }
}

impl From<ErrorKind> for MarshalError {
    fn from(kind: ErrorKind) -> Self {
        MarshalError::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_error_renders_kind_only() {
        let err = MarshalError::new(ErrorKind::Length);
        assert_eq!(err.to_string(), "invalid length");
    }

    #[test]
    fn path_prepending_builds_dotted_path() {
        let err = MarshalError::new(ErrorKind::Length)
            .in_field("data")
            .in_field("specialization_info")
            .at_index(2)
            .in_field("stages");
        assert_eq!(err.path(), "stages.2.specialization_info.data");
        assert_eq!(
            err.to_string(),
            "stages.2.specialization_info.data: invalid length"
        );
    }

    #[test]
    fn arg_position_is_stamped() {
        let err = MarshalError::new(ErrorKind::Table { actual: "int" })
            .in_field("extent")
            .at_arg(2);
        assert_eq!(err.to_string(), "argument #2: extent: expected a table, got int");
    }

    #[test]
    fn conversion_errors_map_to_kinds() {
        let kind: ErrorKind = ConversionError::TypeMismatch {
            expected: "int",
            actual: "string",
        }
        .into();
        assert_eq!(
            kind,
            ErrorKind::Type {
                expected: "int",
                actual: "string"
            }
        );

        let kind: ErrorKind = ConversionError::IntegerOverflow {
            value: 300,
            target_type: "u8",
        }
        .into();
        assert!(matches!(kind, ErrorKind::Range { value: 300, .. }));
    }
}
