//! Native type catalog: enums, flags, and structure type tags.

mod enums;
mod flags;
mod stype;

pub use enums::{
    BorderColor, CompareOp, ComponentSwizzle, Filter, Format, ImageLayout, ImageTiling, ImageType,
    ImageViewType, NamedEnum, SamplerAddressMode, SamplerMipmapMode, SamplerReductionMode,
    ShaderStage, SharingMode,
};
pub use flags::{
    BufferCreateFlags, BufferUsageFlags, ExternalMemoryHandleTypeFlags, ImageAspectFlags,
    ImageCreateFlags, ImageUsageFlags, PipelineShaderStageCreateFlags, SampleCountFlags,
    SamplerCreateFlags,
};
pub use stype::StructureType;

/// Sentinel meaning "all remaining mip levels" in a subresource range.
pub const REMAINING_MIP_LEVELS: u32 = u32::MAX;

/// Sentinel meaning "all remaining array layers" in a subresource range.
pub const REMAINING_ARRAY_LAYERS: u32 = u32::MAX;
