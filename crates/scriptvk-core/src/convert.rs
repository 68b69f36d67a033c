//! Conversion traits between dynamic values and native primitives.
//!
//! - [`FromValue`]: extract a native primitive from a [`Value`]
//! - [`IntoValue`]: convert a native primitive into a [`Value`]
//!
//! Narrowing integer conversions are bounds-checked; `u64` round-trips
//! through `i64` by bit reinterpretation so the full range survives.
//! Integers coerce to floats, never the reverse.

use crate::error::ConversionError;
use crate::value::{Handle, Value};

/// Extract a native primitive from a dynamic value.
pub trait FromValue: Sized {
    /// Name of the dynamic kind this conversion expects, for error
    /// messages.
    const EXPECTED: &'static str;

    /// Extract a value, or fail with a [`ConversionError`] if the
    /// dynamic value has an incompatible kind.
    fn from_value(value: &Value) -> Result<Self, ConversionError>;
}

/// Convert a native primitive into a dynamic value.
pub trait IntoValue {
    /// Convert this value into its dynamic representation.
    fn into_value(self) -> Value;
}

// ============================================================================
// Integer implementations
// ============================================================================

macro_rules! impl_from_value_int {
    ($($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                const EXPECTED: &'static str = "int";

                fn from_value(value: &Value) -> Result<Self, ConversionError> {
                    match value {
                        Value::Int(v) => {
                            if *v >= Self::MIN as i64 && *v <= Self::MAX as i64 {
                                Ok(*v as Self)
                            } else {
                                Err(ConversionError::IntegerOverflow {
                                    value: *v,
                                    target_type: stringify!($ty),
                                })
                            }
                        }
                        _ => Err(ConversionError::TypeMismatch {
                            expected: "int",
                            actual: value.type_name(),
                        }),
                    }
                }
            }

            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    Value::Int(self as i64)
                }
            }
        )*
    };
}

impl_from_value_int!(i8, i16, i32, i64);

macro_rules! impl_from_value_uint {
    ($($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                const EXPECTED: &'static str = "int";

                fn from_value(value: &Value) -> Result<Self, ConversionError> {
                    match value {
                        Value::Int(v) => {
                            if *v >= 0 && *v <= Self::MAX as i64 {
                                Ok(*v as Self)
                            } else {
                                Err(ConversionError::IntegerOverflow {
                                    value: *v,
                                    target_type: stringify!($ty),
                                })
                            }
                        }
                        _ => Err(ConversionError::TypeMismatch {
                            expected: "int",
                            actual: value.type_name(),
                        }),
                    }
                }
            }

            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    Value::Int(self as i64)
                }
            }
        )*
    };
}

impl_from_value_uint!(u8, u16, u32);

// u64 reinterprets the bits of i64 so the full range survives the
// dynamic representation.
impl FromValue for u64 {
    const EXPECTED: &'static str = "int";

    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Int(v) => Ok(*v as u64),
            _ => Err(ConversionError::TypeMismatch {
                expected: "int",
                actual: value.type_name(),
            }),
        }
    }
}

impl IntoValue for u64 {
    fn into_value(self) -> Value {
        Value::Int(self as i64)
    }
}

// ============================================================================
// Float implementations
// ============================================================================

impl FromValue for f32 {
    const EXPECTED: &'static str = "float";

    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Float(v) => {
                if !v.is_finite() || (*v <= f32::MAX as f64 && *v >= f32::MIN as f64) {
                    Ok(*v as f32)
                } else {
                    Err(ConversionError::FloatConversion {
                        value: *v,
                        target_type: "f32",
                    })
                }
            }
            Value::Int(v) => Ok(*v as f32),
            _ => Err(ConversionError::TypeMismatch {
                expected: "float",
                actual: value.type_name(),
            }),
        }
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::Float(self as f64)
    }
}

impl FromValue for f64 {
    const EXPECTED: &'static str = "float";

    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Float(v) => Ok(*v),
            Value::Int(v) => Ok(*v as f64),
            _ => Err(ConversionError::TypeMismatch {
                expected: "float",
                actual: value.type_name(),
            }),
        }
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

// ============================================================================
// Bool, string, handle
// ============================================================================

impl FromValue for bool {
    const EXPECTED: &'static str = "bool";

    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Bool(v) => Ok(*v),
            _ => Err(ConversionError::TypeMismatch {
                expected: "bool",
                actual: value.type_name(),
            }),
        }
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl FromValue for String {
    const EXPECTED: &'static str = "string";

    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Str(s) => Ok(s.clone()),
            _ => Err(ConversionError::TypeMismatch {
                expected: "string",
                actual: value.type_name(),
            }),
        }
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::Str(self.to_string())
    }
}

impl FromValue for Handle {
    const EXPECTED: &'static str = "handle";

    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Handle(h) => Ok(*h),
            _ => Err(ConversionError::TypeMismatch {
                expected: "handle",
                actual: value.type_name(),
            }),
        }
    }
}

impl IntoValue for Handle {
    fn into_value(self) -> Value {
        Value::Handle(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // FromValue tests
    // ========================================================================

    #[test]
    fn from_value_i32() {
        assert_eq!(i32::from_value(&Value::Int(42)).unwrap(), 42);
        assert_eq!(i32::from_value(&Value::Int(-1)).unwrap(), -1);
        assert!(i32::from_value(&Value::Int(i64::MAX)).is_err());
        assert!(i32::from_value(&Value::Str("42".into())).is_err());
    }

    #[test]
    fn from_value_u8_bounds() {
        assert_eq!(u8::from_value(&Value::Int(255)).unwrap(), 255u8);
        assert!(matches!(
            u8::from_value(&Value::Int(256)),
            Err(ConversionError::IntegerOverflow { value: 256, .. })
        ));
        assert!(u8::from_value(&Value::Int(-1)).is_err());
    }

    #[test]
    fn from_value_u32_rejects_negative() {
        assert!(matches!(
            u32::from_value(&Value::Int(-5)),
            Err(ConversionError::IntegerOverflow { value: -5, .. })
        ));
    }

    #[test]
    fn from_value_u64_reinterprets_bits() {
        assert_eq!(u64::from_value(&Value::Int(-1)).unwrap(), u64::MAX);
        assert_eq!(u64::from_value(&Value::Int(0)).unwrap(), 0);
    }

    #[test]
    fn from_value_f32_accepts_ints() {
        assert_eq!(f32::from_value(&Value::Int(2)).unwrap(), 2.0);
        assert_eq!(f32::from_value(&Value::Float(0.5)).unwrap(), 0.5);
        assert!(f32::from_value(&Value::Bool(true)).is_err());
    }

    #[test]
    fn from_value_f32_preserves_infinities() {
        assert!(
            f32::from_value(&Value::Float(f64::INFINITY))
                .unwrap()
                .is_infinite()
        );
    }

    #[test]
    fn from_value_bool_is_strict() {
        assert!(bool::from_value(&Value::Bool(true)).unwrap());
        assert!(bool::from_value(&Value::Int(1)).is_err());
    }

    #[test]
    fn from_value_string() {
        assert_eq!(
            String::from_value(&Value::Str("linear".into())).unwrap(),
            "linear"
        );
        assert!(String::from_value(&Value::Int(0)).is_err());
    }

    #[test]
    fn from_value_handle() {
        let h = Handle::from_raw(7);
        assert_eq!(Handle::from_value(&Value::Handle(h)).unwrap(), h);
        assert!(Handle::from_value(&Value::Int(7)).is_err());
    }

    // ========================================================================
    // Round-trip tests
    // ========================================================================

    #[test]
    fn roundtrip_u64() {
        let original = u64::MAX - 3;
        let value = original.into_value();
        assert_eq!(u64::from_value(&value).unwrap(), original);
    }

    #[test]
    fn roundtrip_f64() {
        let original = 3.14159265358979f64;
        let value = original.into_value();
        assert_eq!(f64::from_value(&value).unwrap(), original);
    }

    #[test]
    fn roundtrip_string() {
        let value = "clamp_to_edge".into_value();
        assert_eq!(
            String::from_value(&value).unwrap(),
            "clamp_to_edge".to_string()
        );
    }
}
