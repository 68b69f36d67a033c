//! Catalog enums and their registry symbol tables.
//!
//! Each enum is integer-backed with the native API's codes and knows
//! the registry domain its symbols live in. The `catalog_enum!` macro
//! keeps the variant list, the codes, and the symbol table in one
//! place so they cannot drift apart.

use num_enum::TryFromPrimitive;

/// A catalog enum with a registry domain and symbol table.
///
/// Implemented by `catalog_enum!`; the marshaling engine uses
/// `DOMAIN` to resolve symbols through the
/// [`EnumRegistry`](scriptvk_registry::EnumRegistry) and `VALUES` to
/// populate it at startup.
pub trait NamedEnum: Copy + TryFromPrimitive<Primitive = i32> + Into<i32> {
    /// Registry domain the symbols are registered under.
    const DOMAIN: &'static str;
    /// `(symbol, code)` table for every variant.
    const VALUES: &'static [(&'static str, i32)];
}

macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $domain:literal {
            $($variant:ident = $code:literal => $symbol:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            ::num_enum::TryFromPrimitive, ::num_enum::IntoPrimitive,
        )]
        #[repr(i32)]
        $vis enum $name {
            $($variant = $code),+
        }

        impl NamedEnum for $name {
            const DOMAIN: &'static str = $domain;
            const VALUES: &'static [(&'static str, i32)] = &[$(($symbol, $code)),+];
        }
    };
}

catalog_enum! {
    /// Texel filtering mode.
    pub enum Filter: "filter" {
        Nearest = 0 => "nearest",
        Linear = 1 => "linear",
    }
}

catalog_enum! {
    /// Mipmap selection mode.
    pub enum SamplerMipmapMode: "sampler_mipmap_mode" {
        Nearest = 0 => "nearest",
        Linear = 1 => "linear",
    }
}

catalog_enum! {
    /// Behavior of sampling outside the [0, 1) coordinate range.
    pub enum SamplerAddressMode: "sampler_address_mode" {
        Repeat = 0 => "repeat",
        MirroredRepeat = 1 => "mirrored_repeat",
        ClampToEdge = 2 => "clamp_to_edge",
        ClampToBorder = 3 => "clamp_to_border",
        MirrorClampToEdge = 4 => "mirror_clamp_to_edge",
    }
}

catalog_enum! {
    /// Comparison operator for depth/stencil and sampler compares.
    pub enum CompareOp: "compare_op" {
        Never = 0 => "never",
        Less = 1 => "less",
        Equal = 2 => "equal",
        LessOrEqual = 3 => "less_or_equal",
        Greater = 4 => "greater",
        NotEqual = 5 => "not_equal",
        GreaterOrEqual = 6 => "greater_or_equal",
        Always = 7 => "always",
    }
}

catalog_enum! {
    /// Border color used with `clamp_to_border` addressing.
    pub enum BorderColor: "border_color" {
        FloatTransparentBlack = 0 => "float_transparent_black",
        IntTransparentBlack = 1 => "int_transparent_black",
        FloatOpaqueBlack = 2 => "float_opaque_black",
        IntOpaqueBlack = 3 => "int_opaque_black",
        FloatOpaqueWhite = 4 => "float_opaque_white",
        IntOpaqueWhite = 5 => "int_opaque_white",
    }
}

catalog_enum! {
    /// Reduction applied when a sampler combines texel values.
    pub enum SamplerReductionMode: "sampler_reduction_mode" {
        WeightedAverage = 0 => "weighted_average",
        Min = 1 => "min",
        Max = 2 => "max",
    }
}

catalog_enum! {
    /// Dimensionality of an image.
    pub enum ImageType: "image_type" {
        D1 = 0 => "1d",
        D2 = 1 => "2d",
        D3 = 2 => "3d",
    }
}

catalog_enum! {
    /// Dimensionality and arrayness of an image view.
    pub enum ImageViewType: "image_view_type" {
        D1 = 0 => "1d",
        D2 = 1 => "2d",
        D3 = 2 => "3d",
        Cube = 3 => "cube",
        D1Array = 4 => "1d_array",
        D2Array = 5 => "2d_array",
        CubeArray = 6 => "cube_array",
    }
}

catalog_enum! {
    /// Memory tiling arrangement of an image.
    pub enum ImageTiling: "image_tiling" {
        Optimal = 0 => "optimal",
        Linear = 1 => "linear",
    }
}

catalog_enum! {
    /// Queue sharing mode of a resource.
    pub enum SharingMode: "sharing_mode" {
        Exclusive = 0 => "exclusive",
        Concurrent = 1 => "concurrent",
    }
}

catalog_enum! {
    /// Layout of image subresources in memory.
    pub enum ImageLayout: "image_layout" {
        Undefined = 0 => "undefined",
        General = 1 => "general",
        ColorAttachmentOptimal = 2 => "color_attachment_optimal",
        DepthStencilAttachmentOptimal = 3 => "depth_stencil_attachment_optimal",
        DepthStencilReadOnlyOptimal = 4 => "depth_stencil_read_only_optimal",
        ShaderReadOnlyOptimal = 5 => "shader_read_only_optimal",
        TransferSrcOptimal = 6 => "transfer_src_optimal",
        TransferDstOptimal = 7 => "transfer_dst_optimal",
        Preinitialized = 8 => "preinitialized",
    }
}

catalog_enum! {
    /// Remapping applied to an image view component.
    pub enum ComponentSwizzle: "component_swizzle" {
        Identity = 0 => "identity",
        Zero = 1 => "zero",
        One = 2 => "one",
        R = 3 => "r",
        G = 4 => "g",
        B = 5 => "b",
        A = 6 => "a",
    }
}

catalog_enum! {
    /// Texel format. A generated binding carries the full catalog;
    /// this is the subset the wrapper layer currently exposes.
    pub enum Format: "format" {
        Undefined = 0 => "undefined",
        R8Unorm = 9 => "r8_unorm",
        R8G8B8A8Unorm = 37 => "r8g8b8a8_unorm",
        R8G8B8A8Srgb = 43 => "r8g8b8a8_srgb",
        B8G8R8A8Unorm = 44 => "b8g8r8a8_unorm",
        B8G8R8A8Srgb = 50 => "b8g8r8a8_srgb",
        R16G16B16A16Sfloat = 97 => "r16g16b16a16_sfloat",
        R32G32B32A32Sfloat = 109 => "r32g32b32a32_sfloat",
        D16Unorm = 124 => "d16_unorm",
        D32Sfloat = 126 => "d32_sfloat",
        D24UnormS8Uint = 129 => "d24_unorm_s8_uint",
    }
}

catalog_enum! {
    /// Pipeline stage a shader module is bound to.
    pub enum ShaderStage: "shader_stage" {
        Vertex = 1 => "vertex",
        TessellationControl = 2 => "tessellation_control",
        TessellationEvaluation = 4 => "tessellation_evaluation",
        Geometry = 8 => "geometry",
        Fragment = 16 => "fragment",
        Compute = 32 => "compute",
    }
}
