//! Image view creation info and its extensions.

use scriptvk_core::{ErrorKind, Handle, IntoValue, MarshalError, Record, Value, get};
use scriptvk_registry::EnumRegistry;

use crate::marshal::{
    ChainNode, ChainRule, CheckStruct, PushStruct, TypedStruct, build_chain, enum_symbol,
    opt_struct, push_chain, req_enum, req_flags, req_struct,
};
use crate::structs::{ComponentMapping, ImageSubresourceRange};
use crate::types::{Format, ImageUsageFlags, ImageViewType, StructureType};

/// Parameters of an image view.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageViewCreateInfo {
    pub image: Handle,
    pub view_type: ImageViewType,
    pub format: Format,
    pub components: ComponentMapping,
    pub subresource_range: ImageSubresourceRange,
    pub chain: Vec<ImageViewChain>,
}

/// Restricts the usage of a view below what its image allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageViewUsageCreateInfo {
    pub usage: ImageUsageFlags,
}

impl TypedStruct for ImageViewUsageCreateInfo {
    const STYPE: StructureType = StructureType::ImageViewUsageCreateInfo;
}

impl ImageViewUsageCreateInfo {
    fn check_fields(rec: &Record, _reg: &EnumRegistry) -> Result<Self, MarshalError> {
        let usage: ImageUsageFlags = req_flags(rec, "usage")?;
        if usage.is_empty() {
            return Err(MarshalError::new(ErrorKind::Empty).in_field("usage"));
        }
        Ok(Self { usage })
    }
}

/// Extension chain nodes an image view accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageViewChain {
    Usage(ImageViewUsageCreateInfo),
}

impl ChainNode for ImageViewChain {
    fn stype(&self) -> StructureType {
        match self {
            ImageViewChain::Usage(_) => ImageViewUsageCreateInfo::STYPE,
        }
    }

    fn push_into(&self, rec: &mut Record, _reg: &EnumRegistry) {
        match self {
            ImageViewChain::Usage(ext) => {
                rec.set("usage", ext.usage.bits().into_value());
            }
        }
    }
}

const CHAIN_RULES: &[ChainRule<ImageViewChain>] = &[ChainRule {
    trigger: "usage",
    build: |rec, reg| {
        Ok(ImageViewChain::Usage(ImageViewUsageCreateInfo::check_fields(
            rec, reg,
        )?))
    },
}];

impl TypedStruct for ImageViewCreateInfo {
    const STYPE: StructureType = StructureType::ImageViewCreateInfo;
}

impl CheckStruct for ImageViewCreateInfo {
    fn check(value: &Value, reg: &EnumRegistry) -> Result<Self, MarshalError> {
        let rec = get::expect_record(value)?;
        Ok(Self {
            image: get::req(rec, "image")?,
            view_type: req_enum(rec, "view_type", reg)?,
            format: req_enum(rec, "format", reg)?,
            components: opt_struct(rec, "components", reg)?.unwrap_or_default(),
            subresource_range: req_struct(rec, "subresource_range", reg)?,
            chain: build_chain(rec, reg, CHAIN_RULES)?,
        })
    }
}

impl PushStruct for ImageViewCreateInfo {
    fn push(&self, reg: &EnumRegistry) -> Value {
        let mut rec = Record::new();
        rec.set("image", Value::Handle(self.image));
        rec.set("view_type", enum_symbol(self.view_type, reg));
        rec.set("format", enum_symbol(self.format, reg));
        rec.set("components", self.components.push(reg));
        rec.set("subresource_range", self.subresource_range.push(reg));
        push_chain(&self.chain, &mut rec, reg);
        Value::Record(rec)
    }
}
