//! Structure type tags.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Type tag identifying a typed struct variant.
///
/// Codes match the native API's structure-type enumeration. Every
/// typed struct in the catalog carries exactly one of these, and chain
/// nodes report theirs through
/// [`ChainNode::stype`](crate::marshal::ChainNode::stype).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum StructureType {
    BufferCreateInfo = 12,
    ImageCreateInfo = 14,
    ImageViewCreateInfo = 15,
    ShaderModuleCreateInfo = 16,
    PipelineShaderStageCreateInfo = 18,
    SamplerCreateInfo = 31,
    ExternalMemoryBufferCreateInfo = 1000072000,
    ExternalMemoryImageCreateInfo = 1000072001,
    ImageViewUsageCreateInfo = 1000117002,
    SamplerReductionModeCreateInfo = 1000130001,
    ImageFormatListCreateInfo = 1000147000,
    PipelineShaderStageRequiredSubgroupSizeCreateInfo = 1000225001,
}
