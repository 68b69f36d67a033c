//! Enum and flag field accessors.
//!
//! These sit above the primitive accessors in `scriptvk-core`: enums
//! cross the dynamic boundary as symbolic strings resolved through the
//! registry, flags as integer bitmasks validated against the declared
//! bit set.

use bitflags::Flags;
use num_enum::TryFromPrimitive;
use scriptvk_core::{ErrorKind, MarshalError, Record, Value, get};
use scriptvk_registry::EnumRegistry;

use crate::types::NamedEnum;

fn resolve<E: NamedEnum>(name: &str, reg: &EnumRegistry) -> Result<E, MarshalError> {
    let code = reg.resolve(E::DOMAIN, name).ok_or_else(|| {
        MarshalError::new(ErrorKind::Value {
            what: format!("'{name}' is not a known {}", E::DOMAIN),
        })
    })?;
    match E::try_from_primitive(code) {
        Ok(e) => Ok(e),
        // The registry was built from the catalog tables; a code the
        // catalog does not know means the two disagree.
        Err(_) => panic!("registry maps '{name}' to code {code} outside the {} catalog", E::DOMAIN),
    }
}

/// Read a required enum field given as a registry symbol.
pub fn req_enum<E: NamedEnum>(
    rec: &Record,
    field: &str,
    reg: &EnumRegistry,
) -> Result<E, MarshalError> {
    let name = get::req::<String>(rec, field)?;
    resolve(&name, reg).map_err(|e| e.in_field(field))
}

/// Read an optional enum field, substituting a default when absent.
pub fn opt_enum_or<E: NamedEnum>(
    rec: &Record,
    field: &str,
    reg: &EnumRegistry,
    default: E,
) -> Result<E, MarshalError> {
    match get::opt::<String>(rec, field)? {
        Some(name) => resolve(&name, reg).map_err(|e| e.in_field(field)),
        None => Ok(default),
    }
}

/// Read a required sequence of enum symbols.
pub fn req_enum_seq<E: NamedEnum>(
    rec: &Record,
    field: &str,
    reg: &EnumRegistry,
) -> Result<Vec<E>, MarshalError> {
    let items = get::req_seq(rec, field)?;
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let name = item.as_str().ok_or_else(|| {
            MarshalError::new(ErrorKind::Type {
                expected: "string",
                actual: item.type_name(),
            })
            .at_index(i)
            .in_field(field)
        })?;
        out.push(resolve(name, reg).map_err(|e| e.at_index(i).in_field(field))?);
    }
    Ok(out)
}

/// Push an enum value back out as its registry symbol.
pub fn enum_symbol<E: NamedEnum>(value: E, reg: &EnumRegistry) -> Value {
    let code: i32 = value.into();
    match reg.symbol(E::DOMAIN, code) {
        Some(symbol) => Value::Str(symbol.to_string()),
        None => panic!("registry has no symbol for {} code {code}", E::DOMAIN),
    }
}

fn flags_from_bits<F: Flags<Bits = u32>>(bits: u32) -> Result<F, MarshalError> {
    F::from_bits(bits).ok_or_else(|| {
        MarshalError::new(ErrorKind::Value {
            what: format!("unknown flag bits 0x{:x}", bits & !F::all().bits()),
        })
    })
}

/// Read a required flags field given as an integer bitmask.
pub fn req_flags<F: Flags<Bits = u32>>(rec: &Record, field: &str) -> Result<F, MarshalError> {
    let bits = get::req::<u32>(rec, field)?;
    flags_from_bits(bits).map_err(|e| e.in_field(field))
}

/// Read an optional flags field, substituting a default when absent.
pub fn opt_flags_or<F: Flags<Bits = u32>>(
    rec: &Record,
    field: &str,
    default: F,
) -> Result<F, MarshalError> {
    match get::opt::<u32>(rec, field)? {
        Some(bits) => flags_from_bits(bits).map_err(|e| e.in_field(field)),
        None => Ok(default),
    }
}
