//! The struct marshaling engine.
//!
//! Three operations per catalog struct, mirroring the calling
//! convention the per-object wrapper functions consume:
//! - **check**: dynamic record → natively-typed struct
//!   ([`CheckStruct`], [`check_arg`], [`check_array`])
//! - **push**: struct → dynamic record ([`PushStruct`],
//!   [`push_array`])
//! - **cleanup**: every checked struct owns its sub-allocations
//!   (strings, blobs, nested structs, chain nodes), so dropping it,
//!   on the success path or mid-check via `?`, releases the whole
//!   tree exactly once. There is no separate free entry point to
//!   pair up or forget.

mod array;
mod chain;
mod fields;

pub use array::{check_array, check_array_arg, push_array, req_array};
pub use chain::{ChainNode, ChainRule, build_chain, push_chain};
pub use fields::{enum_symbol, opt_enum_or, opt_flags_or, req_enum, req_enum_seq, req_flags};

use scriptvk_core::{ErrorKind, MarshalError, Record, Value};
use scriptvk_registry::EnumRegistry;

use crate::types::StructureType;

/// A struct carrying a structure type tag and an extension chain.
pub trait TypedStruct {
    /// The type tag of this struct variant.
    const STYPE: StructureType;
}

/// Conversion of one dynamic record into one natively-typed struct.
///
/// Implementations validate record shape first (non-records fail with
/// a `Table` error), then populate fields through the accessors so
/// every failure carries the offending field's dotted path. Anything
/// allocated before a failure is owned by the partially-built value
/// and dropped when the error propagates.
pub trait CheckStruct: Sized {
    /// Convert `value` into a fully populated struct.
    fn check(value: &Value, reg: &EnumRegistry) -> Result<Self, MarshalError>;
}

/// Inverse conversion, struct → dynamic record.
pub trait PushStruct {
    /// Produce a record holding every fixed field under its canonical
    /// name, with any extension chain flattened into the same record.
    fn push(&self, reg: &EnumRegistry) -> Value;
}

/// Check a top-level argument, stamping the argument position into any
/// error.
pub fn check_arg<T: CheckStruct>(
    value: &Value,
    arg: u32,
    reg: &EnumRegistry,
) -> Result<T, MarshalError> {
    T::check(value, reg).map_err(|e| e.at_arg(arg))
}

/// Check a required record-valued field as a nested struct.
pub fn req_struct<T: CheckStruct>(
    rec: &Record,
    field: &str,
    reg: &EnumRegistry,
) -> Result<T, MarshalError> {
    match rec.get(field) {
        None | Some(Value::Nil) => Err(MarshalError::new(ErrorKind::Type {
            expected: "table",
            actual: "nil",
        })
        .in_field(field)),
        Some(v) => T::check(v, reg).map_err(|e| e.in_field(field)),
    }
}

/// Check an optional record-valued field as a nested struct; absence
/// yields `Ok(None)`, never an error.
pub fn opt_struct<T: CheckStruct>(
    rec: &Record,
    field: &str,
    reg: &EnumRegistry,
) -> Result<Option<T>, MarshalError> {
    match rec.get(field) {
        None | Some(Value::Nil) => Ok(None),
        Some(v) => T::check(v, reg).map(Some).map_err(|e| e.in_field(field)),
    }
}
