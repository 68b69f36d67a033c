//! Core value model for the scriptvk marshaling engine.
//!
//! This crate defines the pieces that are independent of any
//! particular native struct:
//! - [`Value`] / [`Record`]: the dynamic data supplied by the host
//! - [`FromValue`] / [`IntoValue`]: primitive conversions
//! - [`get`]: field accessors with path-qualified errors
//! - [`MarshalError`] / [`ErrorKind`]: the failure taxonomy

pub mod convert;
pub mod error;
pub mod get;
mod record;
mod value;

pub use convert::{FromValue, IntoValue};
pub use error::{ConversionError, ErrorKind, MarshalError};
pub use record::Record;
pub use value::{Handle, Value};
