//! Catalog of struct specializations.
//!
//! One module per API object family, each holding the struct
//! definitions, their extension chain enum, and the check/push
//! implementations.

mod buffer;
mod common;
mod image;
mod image_view;
mod sampler;
mod shader;

pub use buffer::{BufferChain, BufferCreateInfo, ExternalMemoryBufferCreateInfo};
pub use common::{ComponentMapping, Extent3D, ImageSubresourceRange, Offset3D};
pub use image::{
    ExternalMemoryImageCreateInfo, ImageChain, ImageCreateInfo, ImageFormatListCreateInfo,
};
pub use image_view::{ImageViewChain, ImageViewCreateInfo, ImageViewUsageCreateInfo};
pub use sampler::{SamplerChain, SamplerCreateInfo, SamplerReductionModeCreateInfo};
pub use shader::{
    PipelineShaderStageCreateInfo, PipelineShaderStageRequiredSubgroupSizeCreateInfo,
    ShaderModuleChain, ShaderModuleCreateInfo, ShaderStageChain, SpecializationInfo,
    SpecializationMapEntry,
};
