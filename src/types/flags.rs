//! Bitmask flag types.
//!
//! Flags cross the dynamic boundary as integer bitmasks; the
//! accessors in [`crate::marshal`] reject masks with bits outside the
//! declared set.

use bitflags::bitflags;

bitflags! {
    /// Sampler creation flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SamplerCreateFlags: u32 {
        const SUBSAMPLED = 0x1;
        const SUBSAMPLED_COARSE_RECONSTRUCTION = 0x2;
    }
}

bitflags! {
    /// Image creation flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ImageCreateFlags: u32 {
        const SPARSE_BINDING = 0x1;
        const SPARSE_RESIDENCY = 0x2;
        const SPARSE_ALIASED = 0x4;
        const MUTABLE_FORMAT = 0x8;
        const CUBE_COMPATIBLE = 0x10;
        const ARRAY_2D_COMPATIBLE = 0x20;
    }
}

bitflags! {
    /// Ways an image may be used.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ImageUsageFlags: u32 {
        const TRANSFER_SRC = 0x1;
        const TRANSFER_DST = 0x2;
        const SAMPLED = 0x4;
        const STORAGE = 0x8;
        const COLOR_ATTACHMENT = 0x10;
        const DEPTH_STENCIL_ATTACHMENT = 0x20;
        const TRANSIENT_ATTACHMENT = 0x40;
        const INPUT_ATTACHMENT = 0x80;
    }
}

bitflags! {
    /// Image aspects included in a view.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ImageAspectFlags: u32 {
        const COLOR = 0x1;
        const DEPTH = 0x2;
        const STENCIL = 0x4;
        const METADATA = 0x8;
    }
}

bitflags! {
    /// Sample counts supported for an image.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SampleCountFlags: u32 {
        const COUNT_1 = 0x1;
        const COUNT_2 = 0x2;
        const COUNT_4 = 0x4;
        const COUNT_8 = 0x8;
        const COUNT_16 = 0x10;
        const COUNT_32 = 0x20;
        const COUNT_64 = 0x40;
    }
}

bitflags! {
    /// Buffer creation flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BufferCreateFlags: u32 {
        const SPARSE_BINDING = 0x1;
        const SPARSE_RESIDENCY = 0x2;
        const SPARSE_ALIASED = 0x4;
    }
}

bitflags! {
    /// Ways a buffer may be used.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BufferUsageFlags: u32 {
        const TRANSFER_SRC = 0x1;
        const TRANSFER_DST = 0x2;
        const UNIFORM_TEXEL_BUFFER = 0x4;
        const STORAGE_TEXEL_BUFFER = 0x8;
        const UNIFORM_BUFFER = 0x10;
        const STORAGE_BUFFER = 0x20;
        const INDEX_BUFFER = 0x40;
        const VERTEX_BUFFER = 0x80;
        const INDIRECT_BUFFER = 0x100;
    }
}

bitflags! {
    /// External memory handle types a resource may be exported to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ExternalMemoryHandleTypeFlags: u32 {
        const OPAQUE_FD = 0x1;
        const OPAQUE_WIN32 = 0x2;
        const OPAQUE_WIN32_KMT = 0x4;
        const D3D11_TEXTURE = 0x8;
        const D3D11_TEXTURE_KMT = 0x10;
        const D3D12_HEAP = 0x20;
        const D3D12_RESOURCE = 0x40;
    }
}

bitflags! {
    /// Shader stage creation flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PipelineShaderStageCreateFlags: u32 {
        const ALLOW_VARYING_SUBGROUP_SIZE = 0x1;
        const REQUIRE_FULL_SUBGROUPS = 0x2;
    }
}
