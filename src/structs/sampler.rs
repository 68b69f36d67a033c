//! Sampler creation info and its extensions.

use scriptvk_core::{IntoValue, MarshalError, Record, Value, get};
use scriptvk_registry::EnumRegistry;

use crate::marshal::{
    ChainNode, ChainRule, CheckStruct, PushStruct, TypedStruct, build_chain, enum_symbol,
    opt_enum_or, opt_flags_or, push_chain, req_enum,
};
use crate::types::{
    BorderColor, CompareOp, Filter, SamplerAddressMode, SamplerCreateFlags, SamplerMipmapMode,
    SamplerReductionMode, StructureType,
};

/// Parameters of a sampler.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerCreateInfo {
    pub flags: SamplerCreateFlags,
    pub mag_filter: Filter,
    pub min_filter: Filter,
    pub mipmap_mode: SamplerMipmapMode,
    pub address_mode_u: SamplerAddressMode,
    pub address_mode_v: SamplerAddressMode,
    pub address_mode_w: SamplerAddressMode,
    pub mip_lod_bias: f32,
    pub anisotropy_enable: bool,
    pub max_anisotropy: f32,
    pub compare_enable: bool,
    pub compare_op: CompareOp,
    pub min_lod: f32,
    pub max_lod: f32,
    pub border_color: BorderColor,
    pub unnormalized_coordinates: bool,
    pub chain: Vec<SamplerChain>,
}

/// Specifies the reduction applied when combining texel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerReductionModeCreateInfo {
    pub reduction_mode: SamplerReductionMode,
}

impl TypedStruct for SamplerReductionModeCreateInfo {
    const STYPE: StructureType = StructureType::SamplerReductionModeCreateInfo;
}

impl SamplerReductionModeCreateInfo {
    fn check_fields(rec: &Record, reg: &EnumRegistry) -> Result<Self, MarshalError> {
        Ok(Self {
            reduction_mode: req_enum(rec, "reduction_mode", reg)?,
        })
    }
}

/// Extension chain nodes a sampler accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum SamplerChain {
    ReductionMode(SamplerReductionModeCreateInfo),
}

impl ChainNode for SamplerChain {
    fn stype(&self) -> StructureType {
        match self {
            SamplerChain::ReductionMode(_) => SamplerReductionModeCreateInfo::STYPE,
        }
    }

    fn push_into(&self, rec: &mut Record, reg: &EnumRegistry) {
        match self {
            SamplerChain::ReductionMode(ext) => {
                rec.set("reduction_mode", enum_symbol(ext.reduction_mode, reg));
            }
        }
    }
}

const CHAIN_RULES: &[ChainRule<SamplerChain>] = &[ChainRule {
    trigger: "reduction_mode",
    build: |rec, reg| {
        Ok(SamplerChain::ReductionMode(
            SamplerReductionModeCreateInfo::check_fields(rec, reg)?,
        ))
    },
}];

impl TypedStruct for SamplerCreateInfo {
    const STYPE: StructureType = StructureType::SamplerCreateInfo;
}

impl CheckStruct for SamplerCreateInfo {
    fn check(value: &Value, reg: &EnumRegistry) -> Result<Self, MarshalError> {
        let rec = get::expect_record(value)?;
        Ok(Self {
            flags: opt_flags_or(rec, "flags", SamplerCreateFlags::empty())?,
            mag_filter: opt_enum_or(rec, "mag_filter", reg, Filter::Nearest)?,
            min_filter: opt_enum_or(rec, "min_filter", reg, Filter::Nearest)?,
            mipmap_mode: opt_enum_or(rec, "mipmap_mode", reg, SamplerMipmapMode::Nearest)?,
            address_mode_u: opt_enum_or(rec, "address_mode_u", reg, SamplerAddressMode::Repeat)?,
            address_mode_v: opt_enum_or(rec, "address_mode_v", reg, SamplerAddressMode::Repeat)?,
            address_mode_w: opt_enum_or(rec, "address_mode_w", reg, SamplerAddressMode::Repeat)?,
            mip_lod_bias: get::opt_or(rec, "mip_lod_bias", 0.0)?,
            anisotropy_enable: get::opt_or(rec, "anisotropy_enable", false)?,
            max_anisotropy: get::opt_or(rec, "max_anisotropy", 1.0)?,
            compare_enable: get::opt_or(rec, "compare_enable", false)?,
            compare_op: opt_enum_or(rec, "compare_op", reg, CompareOp::Never)?,
            min_lod: get::opt_or(rec, "min_lod", 0.0)?,
            max_lod: get::opt_or(rec, "max_lod", 0.0)?,
            border_color: opt_enum_or(
                rec,
                "border_color",
                reg,
                BorderColor::FloatTransparentBlack,
            )?,
            unnormalized_coordinates: get::opt_or(rec, "unnormalized_coordinates", false)?,
            chain: build_chain(rec, reg, CHAIN_RULES)?,
        })
    }
}

impl PushStruct for SamplerCreateInfo {
    fn push(&self, reg: &EnumRegistry) -> Value {
        let mut rec = Record::new();
        rec.set("flags", self.flags.bits().into_value());
        rec.set("mag_filter", enum_symbol(self.mag_filter, reg));
        rec.set("min_filter", enum_symbol(self.min_filter, reg));
        rec.set("mipmap_mode", enum_symbol(self.mipmap_mode, reg));
        rec.set("address_mode_u", enum_symbol(self.address_mode_u, reg));
        rec.set("address_mode_v", enum_symbol(self.address_mode_v, reg));
        rec.set("address_mode_w", enum_symbol(self.address_mode_w, reg));
        rec.set("mip_lod_bias", self.mip_lod_bias.into_value());
        rec.set("anisotropy_enable", self.anisotropy_enable.into_value());
        rec.set("max_anisotropy", self.max_anisotropy.into_value());
        rec.set("compare_enable", self.compare_enable.into_value());
        rec.set("compare_op", enum_symbol(self.compare_op, reg));
        rec.set("min_lod", self.min_lod.into_value());
        rec.set("max_lod", self.max_lod.into_value());
        rec.set("border_color", enum_symbol(self.border_color, reg));
        rec.set(
            "unnormalized_coordinates",
            self.unnormalized_coordinates.into_value(),
        );
        push_chain(&self.chain, &mut rec, reg);
        Value::Record(rec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard_registry;
    use scriptvk_core::ErrorKind;

    fn base_record() -> Record {
        Record::new()
            .with("flags", Value::Int(0))
            .with("mag_filter", Value::Str("linear".into()))
            .with("min_filter", Value::Str("linear".into()))
    }

    #[test]
    fn no_trigger_key_means_empty_chain() {
        let reg = standard_registry().unwrap();
        let info = SamplerCreateInfo::check(&Value::Record(base_record()), &reg).unwrap();
        assert!(info.chain.is_empty());
        assert_eq!(info.mag_filter, Filter::Linear);

        let pushed = info.push(&reg);
        let rec = pushed.as_record().unwrap();
        assert!(!rec.contains("reduction_mode"));
    }

    #[test]
    fn reduction_mode_key_builds_one_chain_node() {
        let reg = standard_registry().unwrap();
        let input = base_record().with("reduction_mode", Value::Str("min".into()));
        let info = SamplerCreateInfo::check(&Value::Record(input), &reg).unwrap();
        assert_eq!(info.chain.len(), 1);
        assert_eq!(
            info.chain[0],
            SamplerChain::ReductionMode(SamplerReductionModeCreateInfo {
                reduction_mode: SamplerReductionMode::Min,
            })
        );
        assert_eq!(
            info.chain[0].stype(),
            StructureType::SamplerReductionModeCreateInfo
        );

        let pushed = info.push(&reg);
        let rec = pushed.as_record().unwrap();
        assert_eq!(rec.get("reduction_mode"), Some(&Value::Str("min".into())));
    }

    #[test]
    fn bad_extension_value_fails_with_its_field() {
        let reg = standard_registry().unwrap();
        let input = base_record().with("reduction_mode", Value::Str("median".into()));
        let err = SamplerCreateInfo::check(&Value::Record(input), &reg).unwrap_err();
        assert_eq!(err.path(), "reduction_mode");
        assert!(matches!(err.kind(), ErrorKind::Value { .. }));
    }

    #[test]
    fn defaults_substituted_for_absent_fields() {
        let reg = standard_registry().unwrap();
        let info =
            SamplerCreateInfo::check(&Value::Record(Record::new()), &reg).unwrap();
        assert_eq!(info.mag_filter, Filter::Nearest);
        assert_eq!(info.address_mode_u, SamplerAddressMode::Repeat);
        assert_eq!(info.border_color, BorderColor::FloatTransparentBlack);
        assert_eq!(info.max_anisotropy, 1.0);
        assert!(!info.anisotropy_enable);
    }
}
