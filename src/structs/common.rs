//! Untyped structs shared across the catalog.
//!
//! These have fixed fields only (no type tag, no extension chain) and
//! are always embedded by value in their parent.

use scriptvk_core::{IntoValue, MarshalError, Record, Value, get};
use scriptvk_registry::EnumRegistry;

use crate::marshal::{CheckStruct, PushStruct, enum_symbol, opt_enum_or, req_flags};
use crate::types::{
    ComponentSwizzle, ImageAspectFlags, REMAINING_ARRAY_LAYERS, REMAINING_MIP_LEVELS,
};

/// Three-dimensional extent in texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent3D {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl CheckStruct for Extent3D {
    fn check(value: &Value, _reg: &EnumRegistry) -> Result<Self, MarshalError> {
        let rec = get::expect_record(value)?;
        Ok(Self {
            width: get::req(rec, "width")?,
            height: get::req(rec, "height")?,
            depth: get::req(rec, "depth")?,
        })
    }
}

impl PushStruct for Extent3D {
    fn push(&self, _reg: &EnumRegistry) -> Value {
        let mut rec = Record::new();
        rec.set("width", self.width.into_value());
        rec.set("height", self.height.into_value());
        rec.set("depth", self.depth.into_value());
        Value::Record(rec)
    }
}

/// Three-dimensional signed offset in texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset3D {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CheckStruct for Offset3D {
    fn check(value: &Value, _reg: &EnumRegistry) -> Result<Self, MarshalError> {
        let rec = get::expect_record(value)?;
        Ok(Self {
            x: get::req(rec, "x")?,
            y: get::req(rec, "y")?,
            z: get::req(rec, "z")?,
        })
    }
}

impl PushStruct for Offset3D {
    fn push(&self, _reg: &EnumRegistry) -> Value {
        let mut rec = Record::new();
        rec.set("x", self.x.into_value());
        rec.set("y", self.y.into_value());
        rec.set("z", self.z.into_value());
        Value::Record(rec)
    }
}

/// Per-component remapping of an image view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentMapping {
    pub r: ComponentSwizzle,
    pub g: ComponentSwizzle,
    pub b: ComponentSwizzle,
    pub a: ComponentSwizzle,
}

impl Default for ComponentMapping {
    fn default() -> Self {
        Self {
            r: ComponentSwizzle::Identity,
            g: ComponentSwizzle::Identity,
            b: ComponentSwizzle::Identity,
            a: ComponentSwizzle::Identity,
        }
    }
}

impl CheckStruct for ComponentMapping {
    fn check(value: &Value, reg: &EnumRegistry) -> Result<Self, MarshalError> {
        let rec = get::expect_record(value)?;
        Ok(Self {
            r: opt_enum_or(rec, "r", reg, ComponentSwizzle::Identity)?,
            g: opt_enum_or(rec, "g", reg, ComponentSwizzle::Identity)?,
            b: opt_enum_or(rec, "b", reg, ComponentSwizzle::Identity)?,
            a: opt_enum_or(rec, "a", reg, ComponentSwizzle::Identity)?,
        })
    }
}

impl PushStruct for ComponentMapping {
    fn push(&self, reg: &EnumRegistry) -> Value {
        let mut rec = Record::new();
        rec.set("r", enum_symbol(self.r, reg));
        rec.set("g", enum_symbol(self.g, reg));
        rec.set("b", enum_symbol(self.b, reg));
        rec.set("a", enum_symbol(self.a, reg));
        Value::Record(rec)
    }
}

/// The subset of an image's mip levels and array layers a view sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSubresourceRange {
    pub aspect_mask: ImageAspectFlags,
    pub base_mip_level: u32,
    pub level_count: u32,
    pub base_array_layer: u32,
    pub layer_count: u32,
}

impl CheckStruct for ImageSubresourceRange {
    fn check(value: &Value, _reg: &EnumRegistry) -> Result<Self, MarshalError> {
        let rec = get::expect_record(value)?;
        Ok(Self {
            aspect_mask: req_flags(rec, "aspect_mask")?,
            base_mip_level: get::opt_or(rec, "base_mip_level", 0)?,
            level_count: get::opt_or(rec, "level_count", REMAINING_MIP_LEVELS)?,
            base_array_layer: get::opt_or(rec, "base_array_layer", 0)?,
            layer_count: get::opt_or(rec, "layer_count", REMAINING_ARRAY_LAYERS)?,
        })
    }
}

impl PushStruct for ImageSubresourceRange {
    fn push(&self, _reg: &EnumRegistry) -> Value {
        let mut rec = Record::new();
        rec.set("aspect_mask", self.aspect_mask.bits().into_value());
        rec.set("base_mip_level", self.base_mip_level.into_value());
        rec.set("level_count", self.level_count.into_value());
        rec.set("base_array_layer", self.base_array_layer.into_value());
        rec.set("layer_count", self.layer_count.into_value());
        Value::Record(rec)
    }
}
