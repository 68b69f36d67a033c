//! Field accessors over dynamic records.
//!
//! Every accessor qualifies its error with the field name it was
//! reading, so nested checkers only need to prepend their own segment
//! on the way out. Required accessors treat an absent (or nil) field
//! as a type error naming the expected kind; optional accessors return
//! `Ok(None)` or the supplied default instead.

use crate::convert::FromValue;
use crate::error::{ErrorKind, MarshalError};
use crate::record::Record;
use crate::value::Value;

/// Check that a top-level value is a record.
pub fn expect_record(value: &Value) -> Result<&Record, MarshalError> {
    value.as_record().ok_or_else(|| {
        MarshalError::new(ErrorKind::Table {
            actual: value.type_name(),
        })
    })
}

/// Check that a top-level value is a sequence.
pub fn expect_seq(value: &Value) -> Result<&[Value], MarshalError> {
    value.as_seq().ok_or_else(|| {
        MarshalError::new(ErrorKind::Table {
            actual: value.type_name(),
        })
    })
}

fn present<'a>(rec: &'a Record, field: &str) -> Option<&'a Value> {
    match rec.get(field) {
        None | Some(Value::Nil) => None,
        Some(v) => Some(v),
    }
}

/// Check whether a field is present with a non-nil value.
pub fn is_present(rec: &Record, field: &str) -> bool {
    present(rec, field).is_some()
}

/// Read a required primitive field.
pub fn req<T: FromValue>(rec: &Record, field: &str) -> Result<T, MarshalError> {
    match present(rec, field) {
        Some(v) => T::from_value(v)
            .map_err(|e| MarshalError::new(e.into()).in_field(field)),
        None => Err(MarshalError::new(ErrorKind::Type {
            expected: T::EXPECTED,
            actual: "nil",
        })
        .in_field(field)),
    }
}

/// Read an optional primitive field; absence is `Ok(None)`.
pub fn opt<T: FromValue>(rec: &Record, field: &str) -> Result<Option<T>, MarshalError> {
    match present(rec, field) {
        Some(v) => T::from_value(v)
            .map(Some)
            .map_err(|e| MarshalError::new(e.into()).in_field(field)),
        None => Ok(None),
    }
}

/// Read an optional primitive field, substituting a default when
/// absent. A present field of the wrong kind is still an error.
pub fn opt_or<T: FromValue>(rec: &Record, field: &str, default: T) -> Result<T, MarshalError> {
    Ok(opt(rec, field)?.unwrap_or(default))
}

/// Read a required record-valued field.
pub fn req_record<'a>(rec: &'a Record, field: &str) -> Result<&'a Record, MarshalError> {
    match present(rec, field) {
        Some(v) => expect_record(v).map_err(|e| e.in_field(field)),
        None => Err(MarshalError::new(ErrorKind::Type {
            expected: "table",
            actual: "nil",
        })
        .in_field(field)),
    }
}

/// Read an optional record-valued field; absence is `Ok(None)`.
pub fn opt_record<'a>(rec: &'a Record, field: &str) -> Result<Option<&'a Record>, MarshalError> {
    match present(rec, field) {
        Some(v) => expect_record(v).map(Some).map_err(|e| e.in_field(field)),
        None => Ok(None),
    }
}

/// Read a required sequence-valued field.
pub fn req_seq<'a>(rec: &'a Record, field: &str) -> Result<&'a [Value], MarshalError> {
    match present(rec, field) {
        Some(v) => expect_seq(v).map_err(|e| e.in_field(field)),
        None => Err(MarshalError::new(ErrorKind::Type {
            expected: "sequence",
            actual: "nil",
        })
        .in_field(field)),
    }
}

/// Read an optional sequence-valued field; absence is `Ok(None)`.
pub fn opt_seq<'a>(rec: &'a Record, field: &str) -> Result<Option<&'a [Value]>, MarshalError> {
    match present(rec, field) {
        Some(v) => expect_seq(v).map(Some).map_err(|e| e.in_field(field)),
        None => Ok(None),
    }
}

fn convert_elems<T: FromValue>(items: &[Value], field: &str) -> Result<Vec<T>, MarshalError> {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let v = T::from_value(item)
            .map_err(|e| MarshalError::new(e.into()).at_index(i).in_field(field))?;
        out.push(v);
    }
    Ok(out)
}

/// Read a required sequence of primitives; element failures abort with
/// an index-qualified error.
pub fn seq_of<T: FromValue>(rec: &Record, field: &str) -> Result<Vec<T>, MarshalError> {
    convert_elems(req_seq(rec, field)?, field)
}

/// Read an optional sequence of primitives; absence yields an empty
/// vector.
pub fn opt_seq_of<T: FromValue>(rec: &Record, field: &str) -> Result<Vec<T>, MarshalError> {
    match opt_seq(rec, field)? {
        Some(items) => convert_elems(items, field),
        None => Ok(Vec::new()),
    }
}

fn blob_of(value: &Value, field: &str) -> Result<Vec<u8>, MarshalError> {
    match value {
        // The copy, not the source, is owned from here on.
        Value::Bytes(b) => Ok(b.clone()),
        Value::Str(s) => Ok(s.as_bytes().to_vec()),
        _ => Err(MarshalError::new(ErrorKind::Type {
            expected: "bytes",
            actual: value.type_name(),
        })
        .in_field(field)),
    }
}

/// Read a required binary field into a freshly allocated owned buffer.
/// Strings are accepted and copied byte-for-byte.
pub fn bytes(rec: &Record, field: &str) -> Result<Vec<u8>, MarshalError> {
    match present(rec, field) {
        Some(v) => blob_of(v, field),
        None => Err(MarshalError::new(ErrorKind::Type {
            expected: "bytes",
            actual: "nil",
        })
        .in_field(field)),
    }
}

/// Read an optional binary field; absence is `Ok(None)`.
pub fn opt_bytes(rec: &Record, field: &str) -> Result<Option<Vec<u8>>, MarshalError> {
    match present(rec, field) {
        Some(v) => blob_of(v, field).map(Some),
        None => Ok(None),
    }
}
