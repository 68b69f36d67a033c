//! Bulk check/push over homogeneous sequences.

use scriptvk_core::{ErrorKind, MarshalError, Record, Value, get};
use scriptvk_registry::EnumRegistry;

use super::{CheckStruct, PushStruct};

/// Check a sequence of records into a vector of structs.
///
/// Elements are checked in input order; element `i` failing aborts
/// with an `i.`-prefixed error, dropping the elements already built.
pub fn check_array<T: CheckStruct>(
    value: &Value,
    reg: &EnumRegistry,
) -> Result<Vec<T>, MarshalError> {
    let items = get::expect_seq(value)?;
    let mut out = Vec::new();
    out.try_reserve_exact(items.len())
        .map_err(|_| MarshalError::new(ErrorKind::Memory))?;
    for (i, item) in items.iter().enumerate() {
        out.push(T::check(item, reg).map_err(|e| e.at_index(i))?);
    }
    Ok(out)
}

/// [`check_array`] with the argument position stamped into any error.
pub fn check_array_arg<T: CheckStruct>(
    value: &Value,
    arg: u32,
    reg: &EnumRegistry,
) -> Result<Vec<T>, MarshalError> {
    check_array(value, reg).map_err(|e| e.at_arg(arg))
}

/// Check a required sequence-valued field as an array of structs.
pub fn req_array<T: CheckStruct>(
    rec: &Record,
    field: &str,
    reg: &EnumRegistry,
) -> Result<Vec<T>, MarshalError> {
    match rec.get(field) {
        None | Some(Value::Nil) => Err(MarshalError::new(ErrorKind::Type {
            expected: "sequence",
            actual: "nil",
        })
        .in_field(field)),
        Some(v) => check_array(v, reg).map_err(|e| e.in_field(field)),
    }
}

/// Push a slice of structs as a sequence of records.
pub fn push_array<T: PushStruct>(items: &[T], reg: &EnumRegistry) -> Value {
    Value::Seq(items.iter().map(|item| item.push(reg)).collect())
}
