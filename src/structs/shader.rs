//! Shader module and pipeline shader stage creation info.

use scriptvk_core::{ErrorKind, Handle, IntoValue, MarshalError, Record, Value, get};
use scriptvk_registry::EnumRegistry;

use crate::marshal::{
    ChainNode, ChainRule, CheckStruct, PushStruct, TypedStruct, build_chain, enum_symbol,
    opt_flags_or, opt_struct, push_array, push_chain, req_array, req_enum,
};
use crate::types::{PipelineShaderStageCreateFlags, ShaderStage, StructureType};

/// Maps one specialization constant to a byte range of the data blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecializationMapEntry {
    pub constant_id: u32,
    pub offset: u32,
    pub size: u64,
}

impl CheckStruct for SpecializationMapEntry {
    fn check(value: &Value, _reg: &EnumRegistry) -> Result<Self, MarshalError> {
        let rec = get::expect_record(value)?;
        Ok(Self {
            constant_id: get::req(rec, "constant_id")?,
            offset: get::req(rec, "offset")?,
            size: get::req(rec, "size")?,
        })
    }
}

impl PushStruct for SpecializationMapEntry {
    fn push(&self, _reg: &EnumRegistry) -> Value {
        let mut rec = Record::new();
        rec.set("constant_id", self.constant_id.into_value());
        rec.set("offset", self.offset.into_value());
        rec.set("size", self.size.into_value());
        Value::Record(rec)
    }
}

/// Specialization constants applied to a shader stage.
///
/// Untyped struct, embedded in its stage. The data blob is an owned
/// copy of the host bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecializationInfo {
    pub map_entries: Vec<SpecializationMapEntry>,
    pub data: Vec<u8>,
}

impl CheckStruct for SpecializationInfo {
    fn check(value: &Value, reg: &EnumRegistry) -> Result<Self, MarshalError> {
        let rec = get::expect_record(value)?;
        let map_entries: Vec<SpecializationMapEntry> = req_array(rec, "map_entries", reg)?;
        if map_entries.is_empty() {
            return Err(MarshalError::new(ErrorKind::Empty).in_field("map_entries"));
        }
        let data = get::bytes(rec, "data")?;
        // Every entry must address bytes that exist in the blob.
        for entry in &map_entries {
            match (entry.offset as u64).checked_add(entry.size) {
                Some(end) if end <= data.len() as u64 => {}
                _ => return Err(MarshalError::new(ErrorKind::Length).in_field("data")),
            }
        }
        Ok(Self { map_entries, data })
    }
}

impl PushStruct for SpecializationInfo {
    fn push(&self, reg: &EnumRegistry) -> Value {
        let mut rec = Record::new();
        rec.set("map_entries", push_array(&self.map_entries, reg));
        rec.set("data", Value::Bytes(self.data.clone()));
        Value::Record(rec)
    }
}

/// Parameters of a shader module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderModuleCreateInfo {
    pub code: Vec<u8>,
    pub chain: Vec<ShaderModuleChain>,
}

/// Extension chain nodes a shader module accepts (currently none).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderModuleChain {}

impl ChainNode for ShaderModuleChain {
    fn stype(&self) -> StructureType {
        match *self {}
    }

    fn push_into(&self, _rec: &mut Record, _reg: &EnumRegistry) {
        match *self {}
    }
}

const MODULE_CHAIN_RULES: &[ChainRule<ShaderModuleChain>] = &[];

impl TypedStruct for ShaderModuleCreateInfo {
    const STYPE: StructureType = StructureType::ShaderModuleCreateInfo;
}

impl CheckStruct for ShaderModuleCreateInfo {
    fn check(value: &Value, reg: &EnumRegistry) -> Result<Self, MarshalError> {
        let rec = get::expect_record(value)?;
        let code = get::bytes(rec, "code")?;
        if code.is_empty() {
            return Err(MarshalError::new(ErrorKind::Empty).in_field("code"));
        }
        // SPIR-V words are 4 bytes.
        if code.len() % 4 != 0 {
            return Err(MarshalError::new(ErrorKind::Length).in_field("code"));
        }
        Ok(Self {
            code,
            chain: build_chain(rec, reg, MODULE_CHAIN_RULES)?,
        })
    }
}

impl PushStruct for ShaderModuleCreateInfo {
    fn push(&self, reg: &EnumRegistry) -> Value {
        let mut rec = Record::new();
        rec.set("code", Value::Bytes(self.code.clone()));
        push_chain(&self.chain, &mut rec, reg);
        Value::Record(rec)
    }
}

/// Requires a specific subgroup size for a shader stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineShaderStageRequiredSubgroupSizeCreateInfo {
    pub required_subgroup_size: u32,
}

impl TypedStruct for PipelineShaderStageRequiredSubgroupSizeCreateInfo {
    const STYPE: StructureType = StructureType::PipelineShaderStageRequiredSubgroupSizeCreateInfo;
}

impl PipelineShaderStageRequiredSubgroupSizeCreateInfo {
    fn check_fields(rec: &Record, _reg: &EnumRegistry) -> Result<Self, MarshalError> {
        let required_subgroup_size: u32 = get::req(rec, "required_subgroup_size")?;
        // Must be a power of two in [1, 128].
        if !required_subgroup_size.is_power_of_two() || required_subgroup_size > 128 {
            return Err(MarshalError::new(ErrorKind::Value {
                what: format!("{required_subgroup_size} is not a valid subgroup size"),
            })
            .in_field("required_subgroup_size"));
        }
        Ok(Self {
            required_subgroup_size,
        })
    }
}

/// Extension chain nodes a shader stage accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderStageChain {
    RequiredSubgroupSize(PipelineShaderStageRequiredSubgroupSizeCreateInfo),
}

impl ChainNode for ShaderStageChain {
    fn stype(&self) -> StructureType {
        match self {
            ShaderStageChain::RequiredSubgroupSize(_) => {
                PipelineShaderStageRequiredSubgroupSizeCreateInfo::STYPE
            }
        }
    }

    fn push_into(&self, rec: &mut Record, _reg: &EnumRegistry) {
        match self {
            ShaderStageChain::RequiredSubgroupSize(ext) => {
                rec.set(
                    "required_subgroup_size",
                    ext.required_subgroup_size.into_value(),
                );
            }
        }
    }
}

const STAGE_CHAIN_RULES: &[ChainRule<ShaderStageChain>] = &[ChainRule {
    trigger: "required_subgroup_size",
    build: |rec, reg| {
        Ok(ShaderStageChain::RequiredSubgroupSize(
            PipelineShaderStageRequiredSubgroupSizeCreateInfo::check_fields(rec, reg)?,
        ))
    },
}];

/// Parameters of one pipeline shader stage.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineShaderStageCreateInfo {
    pub flags: PipelineShaderStageCreateFlags,
    pub stage: ShaderStage,
    pub module: Handle,
    pub name: String,
    pub specialization_info: Option<SpecializationInfo>,
    pub chain: Vec<ShaderStageChain>,
}

impl TypedStruct for PipelineShaderStageCreateInfo {
    const STYPE: StructureType = StructureType::PipelineShaderStageCreateInfo;
}

impl CheckStruct for PipelineShaderStageCreateInfo {
    fn check(value: &Value, reg: &EnumRegistry) -> Result<Self, MarshalError> {
        let rec = get::expect_record(value)?;
        Ok(Self {
            flags: opt_flags_or(rec, "flags", PipelineShaderStageCreateFlags::empty())?,
            stage: req_enum(rec, "stage", reg)?,
            module: get::req(rec, "module")?,
            name: get::opt_or(rec, "name", String::from("main"))?,
            specialization_info: opt_struct(rec, "specialization_info", reg)?,
            chain: build_chain(rec, reg, STAGE_CHAIN_RULES)?,
        })
    }
}

impl PushStruct for PipelineShaderStageCreateInfo {
    fn push(&self, reg: &EnumRegistry) -> Value {
        let mut rec = Record::new();
        rec.set("flags", self.flags.bits().into_value());
        rec.set("stage", enum_symbol(self.stage, reg));
        rec.set("module", Value::Handle(self.module));
        rec.set("name", Value::Str(self.name.clone()));
        if let Some(info) = &self.specialization_info {
            rec.set("specialization_info", info.push(reg));
        }
        push_chain(&self.chain, &mut rec, reg);
        Value::Record(rec)
    }
}
