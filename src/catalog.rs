//! Standard registry construction.

use scriptvk_registry::{EnumRegistry, RegistrationError};

use crate::types::{
    BorderColor, CompareOp, ComponentSwizzle, Filter, Format, ImageLayout, ImageTiling, ImageType,
    ImageViewType, NamedEnum, SamplerAddressMode, SamplerMipmapMode, SamplerReductionMode,
    ShaderStage, SharingMode,
};

fn register<E: NamedEnum>(reg: &mut EnumRegistry) -> Result<(), RegistrationError> {
    reg.register(E::DOMAIN, E::VALUES)
}

/// Build the registry holding every catalog enum domain.
///
/// Called once during process initialization; the result is shared
/// immutably with every marshaling call thereafter.
pub fn standard_registry() -> Result<EnumRegistry, RegistrationError> {
    let mut reg = EnumRegistry::new();
    register::<Filter>(&mut reg)?;
    register::<SamplerMipmapMode>(&mut reg)?;
    register::<SamplerAddressMode>(&mut reg)?;
    register::<CompareOp>(&mut reg)?;
    register::<BorderColor>(&mut reg)?;
    register::<SamplerReductionMode>(&mut reg)?;
    register::<ImageType>(&mut reg)?;
    register::<ImageViewType>(&mut reg)?;
    register::<ImageTiling>(&mut reg)?;
    register::<SharingMode>(&mut reg)?;
    register::<ImageLayout>(&mut reg)?;
    register::<ComponentSwizzle>(&mut reg)?;
    register::<Format>(&mut reg)?;
    register::<ShaderStage>(&mut reg)?;
    Ok(reg)
}
