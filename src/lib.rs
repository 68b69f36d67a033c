//! scriptvk - struct marshaling for scripted graphics API bindings.
//!
//! The engine behind a dynamically-typed host language binding of a
//! Vulkan-style native API: it converts host records into
//! natively-typed structs (with their extension chains) and back,
//! with path-qualified errors and ownership-based cleanup.
//!
//! ## Layers
//!
//! - [`scriptvk_core`]: dynamic [`Value`]/[`Record`] model, primitive
//!   conversions, error taxonomy
//! - [`scriptvk_registry`]: enum symbol↔code registry, built once by
//!   [`standard_registry`]
//! - [`marshal`]: the generic engine (check / push / chain / arrays)
//! - [`types`] and [`structs`]: the native type catalog and its
//!   per-struct specializations
//!
//! ## Example
//!
//! ```
//! use scriptvk::marshal::{CheckStruct, PushStruct};
//! use scriptvk::structs::SamplerCreateInfo;
//! use scriptvk::{Record, Value, standard_registry};
//!
//! let reg = standard_registry().unwrap();
//! let input = Value::Record(
//!     Record::new()
//!         .with("mag_filter", Value::Str("linear".into()))
//!         .with("reduction_mode", Value::Str("min".into())),
//! );
//! let info = SamplerCreateInfo::check(&input, &reg).unwrap();
//! assert_eq!(info.chain.len(), 1);
//! let output = info.push(&reg);
//! assert_eq!(
//!     output.as_record().unwrap().get("reduction_mode"),
//!     Some(&Value::Str("min".into())),
//! );
//! ```

mod catalog;
pub mod marshal;
pub mod structs;
pub mod types;

pub use catalog::standard_registry;
pub use scriptvk_core::{
    ConversionError, ErrorKind, FromValue, Handle, IntoValue, MarshalError, Record, Value,
};
pub use scriptvk_registry::{EnumRegistry, RegistrationError};
