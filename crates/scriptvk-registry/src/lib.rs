//! Enum registry for the scriptvk marshaling engine.
//!
//! Maps symbolic enum names to native codes and back, one table per
//! domain (`"filter"`, `"format"`, ...). The registry is populated
//! once during process initialization and borrowed immutably by the
//! marshaling engine thereafter.

mod registry;

pub use registry::{EnumRegistry, RegistrationError};
