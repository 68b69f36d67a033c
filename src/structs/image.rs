//! Image creation info and its extensions.

use scriptvk_core::{ErrorKind, IntoValue, MarshalError, Record, Value, get};
use scriptvk_registry::EnumRegistry;

use crate::marshal::{
    ChainNode, ChainRule, CheckStruct, PushStruct, TypedStruct, build_chain, enum_symbol,
    opt_enum_or, opt_flags_or, push_chain, req_enum, req_enum_seq, req_flags, req_struct,
};
use crate::structs::Extent3D;
use crate::types::{
    ExternalMemoryHandleTypeFlags, Format, ImageCreateFlags, ImageLayout, ImageTiling, ImageType,
    ImageUsageFlags, SampleCountFlags, SharingMode, StructureType,
};

/// Parameters of an image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCreateInfo {
    pub flags: ImageCreateFlags,
    pub image_type: ImageType,
    pub format: Format,
    pub extent: Extent3D,
    pub mip_levels: u32,
    pub array_layers: u32,
    pub samples: SampleCountFlags,
    pub tiling: ImageTiling,
    pub usage: ImageUsageFlags,
    pub sharing_mode: SharingMode,
    pub queue_family_indices: Vec<u32>,
    pub initial_layout: ImageLayout,
    pub chain: Vec<ImageChain>,
}

/// Declares the external memory handle types an image may be exported
/// to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalMemoryImageCreateInfo {
    pub handle_types: ExternalMemoryHandleTypeFlags,
}

impl TypedStruct for ExternalMemoryImageCreateInfo {
    const STYPE: StructureType = StructureType::ExternalMemoryImageCreateInfo;
}

/// Lists the formats views of a mutable-format image may use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFormatListCreateInfo {
    pub view_formats: Vec<Format>,
}

impl TypedStruct for ImageFormatListCreateInfo {
    const STYPE: StructureType = StructureType::ImageFormatListCreateInfo;
}

impl ImageFormatListCreateInfo {
    fn check_fields(rec: &Record, reg: &EnumRegistry) -> Result<Self, MarshalError> {
        let view_formats: Vec<Format> = req_enum_seq(rec, "view_formats", reg)?;
        if view_formats.is_empty() {
            return Err(MarshalError::new(ErrorKind::Empty).in_field("view_formats"));
        }
        Ok(Self { view_formats })
    }
}

/// Extension chain nodes an image accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageChain {
    ExternalMemory(ExternalMemoryImageCreateInfo),
    FormatList(ImageFormatListCreateInfo),
}

impl ChainNode for ImageChain {
    fn stype(&self) -> StructureType {
        match self {
            ImageChain::ExternalMemory(_) => ExternalMemoryImageCreateInfo::STYPE,
            ImageChain::FormatList(_) => ImageFormatListCreateInfo::STYPE,
        }
    }

    fn push_into(&self, rec: &mut Record, reg: &EnumRegistry) {
        match self {
            ImageChain::ExternalMemory(ext) => {
                rec.set("handle_types", ext.handle_types.bits().into_value());
            }
            ImageChain::FormatList(ext) => {
                rec.set(
                    "view_formats",
                    Value::Seq(
                        ext.view_formats
                            .iter()
                            .map(|f| enum_symbol(*f, reg))
                            .collect(),
                    ),
                );
            }
        }
    }
}

const CHAIN_RULES: &[ChainRule<ImageChain>] = &[
    ChainRule {
        trigger: "handle_types",
        build: |rec, _reg| {
            Ok(ImageChain::ExternalMemory(ExternalMemoryImageCreateInfo {
                handle_types: req_flags(rec, "handle_types")?,
            }))
        },
    },
    ChainRule {
        trigger: "view_formats",
        build: |rec, reg| {
            Ok(ImageChain::FormatList(
                ImageFormatListCreateInfo::check_fields(rec, reg)?,
            ))
        },
    },
];

impl TypedStruct for ImageCreateInfo {
    const STYPE: StructureType = StructureType::ImageCreateInfo;
}

impl CheckStruct for ImageCreateInfo {
    fn check(value: &Value, reg: &EnumRegistry) -> Result<Self, MarshalError> {
        let rec = get::expect_record(value)?;
        let usage: ImageUsageFlags = req_flags(rec, "usage")?;
        if usage.is_empty() {
            return Err(MarshalError::new(ErrorKind::Empty).in_field("usage"));
        }
        let sharing_mode = opt_enum_or(rec, "sharing_mode", reg, SharingMode::Exclusive)?;
        let queue_family_indices = get::opt_seq_of(rec, "queue_family_indices")?;
        // Concurrent sharing is meaningless without the queue families
        // that will share the image.
        if sharing_mode == SharingMode::Concurrent && queue_family_indices.is_empty() {
            return Err(MarshalError::new(ErrorKind::Empty).in_field("queue_family_indices"));
        }
        Ok(Self {
            flags: opt_flags_or(rec, "flags", ImageCreateFlags::empty())?,
            image_type: req_enum(rec, "image_type", reg)?,
            format: req_enum(rec, "format", reg)?,
            extent: req_struct(rec, "extent", reg)?,
            mip_levels: get::opt_or(rec, "mip_levels", 1)?,
            array_layers: get::opt_or(rec, "array_layers", 1)?,
            samples: opt_flags_or(rec, "samples", SampleCountFlags::COUNT_1)?,
            tiling: opt_enum_or(rec, "tiling", reg, ImageTiling::Optimal)?,
            usage,
            sharing_mode,
            queue_family_indices,
            initial_layout: opt_enum_or(rec, "initial_layout", reg, ImageLayout::Undefined)?,
            chain: build_chain(rec, reg, CHAIN_RULES)?,
        })
    }
}

impl PushStruct for ImageCreateInfo {
    fn push(&self, reg: &EnumRegistry) -> Value {
        let mut rec = Record::new();
        rec.set("flags", self.flags.bits().into_value());
        rec.set("image_type", enum_symbol(self.image_type, reg));
        rec.set("format", enum_symbol(self.format, reg));
        rec.set("extent", self.extent.push(reg));
        rec.set("mip_levels", self.mip_levels.into_value());
        rec.set("array_layers", self.array_layers.into_value());
        rec.set("samples", self.samples.bits().into_value());
        rec.set("tiling", enum_symbol(self.tiling, reg));
        rec.set("usage", self.usage.bits().into_value());
        rec.set("sharing_mode", enum_symbol(self.sharing_mode, reg));
        rec.set(
            "queue_family_indices",
            Value::Seq(
                self.queue_family_indices
                    .iter()
                    .map(|&i| i.into_value())
                    .collect(),
            ),
        );
        rec.set("initial_layout", enum_symbol(self.initial_layout, reg));
        push_chain(&self.chain, &mut rec, reg);
        Value::Record(rec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard_registry;

    fn minimal() -> Record {
        Record::new()
            .with("image_type", Value::Str("2d".into()))
            .with("format", Value::Str("r8g8b8a8_unorm".into()))
            .with(
                "extent",
                Value::Record(
                    Record::new()
                        .with("width", Value::Int(256))
                        .with("height", Value::Int(256))
                        .with("depth", Value::Int(1)),
                ),
            )
            .with("usage", Value::Int(0x4))
    }

    #[test]
    fn minimal_record_gets_defaults() {
        let reg = standard_registry().unwrap();
        let info = ImageCreateInfo::check(&Value::Record(minimal()), &reg).unwrap();
        assert_eq!(info.mip_levels, 1);
        assert_eq!(info.array_layers, 1);
        assert_eq!(info.samples, SampleCountFlags::COUNT_1);
        assert_eq!(info.tiling, ImageTiling::Optimal);
        assert_eq!(info.sharing_mode, SharingMode::Exclusive);
        assert_eq!(info.initial_layout, ImageLayout::Undefined);
        assert!(info.queue_family_indices.is_empty());
        assert!(info.chain.is_empty());
    }

    #[test]
    fn nested_extent_error_carries_dotted_path() {
        let reg = standard_registry().unwrap();
        let mut rec = minimal();
        rec.set(
            "extent",
            Value::Record(Record::new().with("width", Value::Int(256))),
        );
        let err = ImageCreateInfo::check(&Value::Record(rec), &reg).unwrap_err();
        assert_eq!(err.path(), "extent.height");
    }

    #[test]
    fn empty_usage_is_rejected() {
        let reg = standard_registry().unwrap();
        let mut rec = minimal();
        rec.set("usage", Value::Int(0));
        let err = ImageCreateInfo::check(&Value::Record(rec), &reg).unwrap_err();
        assert_eq!(err.path(), "usage");
        assert!(matches!(err.kind(), ErrorKind::Empty));
    }

    #[test]
    fn concurrent_sharing_requires_queue_families() {
        let reg = standard_registry().unwrap();
        let mut rec = minimal();
        rec.set("sharing_mode", Value::Str("concurrent".into()));
        let err = ImageCreateInfo::check(&Value::Record(rec.clone()), &reg).unwrap_err();
        assert_eq!(err.path(), "queue_family_indices");
        assert!(matches!(err.kind(), ErrorKind::Empty));

        rec.set(
            "queue_family_indices",
            Value::Seq(vec![Value::Int(0), Value::Int(2)]),
        );
        let info = ImageCreateInfo::check(&Value::Record(rec), &reg).unwrap();
        assert_eq!(info.queue_family_indices, vec![0, 2]);
    }

    #[test]
    fn both_triggers_build_two_nodes_in_catalog_order() {
        let reg = standard_registry().unwrap();
        let rec = minimal()
            .with("view_formats", Value::Seq(vec![Value::Str("r8g8b8a8_srgb".into())]))
            .with("handle_types", Value::Int(0x1));
        let info = ImageCreateInfo::check(&Value::Record(rec), &reg).unwrap();
        assert_eq!(info.chain.len(), 2);
        assert_eq!(
            info.chain[0].stype(),
            StructureType::ExternalMemoryImageCreateInfo
        );
        assert_eq!(
            info.chain[1].stype(),
            StructureType::ImageFormatListCreateInfo
        );
    }

    #[test]
    fn empty_view_formats_is_rejected() {
        let reg = standard_registry().unwrap();
        let rec = minimal().with("view_formats", Value::Seq(vec![]));
        let err = ImageCreateInfo::check(&Value::Record(rec), &reg).unwrap_err();
        assert_eq!(err.path(), "view_formats");
        assert!(matches!(err.kind(), ErrorKind::Empty));
    }
}
