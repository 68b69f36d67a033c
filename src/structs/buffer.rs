//! Buffer creation info and its extensions.

use scriptvk_core::{ErrorKind, IntoValue, MarshalError, Record, Value, get};
use scriptvk_registry::EnumRegistry;

use crate::marshal::{
    ChainNode, ChainRule, CheckStruct, PushStruct, TypedStruct, build_chain, enum_symbol,
    opt_enum_or, opt_flags_or, push_chain, req_flags,
};
use crate::types::{
    BufferCreateFlags, BufferUsageFlags, ExternalMemoryHandleTypeFlags, SharingMode,
    StructureType,
};

/// Parameters of a buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferCreateInfo {
    pub flags: BufferCreateFlags,
    pub size: u64,
    pub usage: BufferUsageFlags,
    pub sharing_mode: SharingMode,
    pub queue_family_indices: Vec<u32>,
    pub chain: Vec<BufferChain>,
}

/// Declares the external memory handle types a buffer may be exported
/// to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalMemoryBufferCreateInfo {
    pub handle_types: ExternalMemoryHandleTypeFlags,
}

impl TypedStruct for ExternalMemoryBufferCreateInfo {
    const STYPE: StructureType = StructureType::ExternalMemoryBufferCreateInfo;
}

/// Extension chain nodes a buffer accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum BufferChain {
    ExternalMemory(ExternalMemoryBufferCreateInfo),
}

impl ChainNode for BufferChain {
    fn stype(&self) -> StructureType {
        match self {
            BufferChain::ExternalMemory(_) => ExternalMemoryBufferCreateInfo::STYPE,
        }
    }

    fn push_into(&self, rec: &mut Record, _reg: &EnumRegistry) {
        match self {
            BufferChain::ExternalMemory(ext) => {
                rec.set("handle_types", ext.handle_types.bits().into_value());
            }
        }
    }
}

const CHAIN_RULES: &[ChainRule<BufferChain>] = &[ChainRule {
    trigger: "handle_types",
    build: |rec, _reg| {
        Ok(BufferChain::ExternalMemory(ExternalMemoryBufferCreateInfo {
            handle_types: req_flags(rec, "handle_types")?,
        }))
    },
}];

impl TypedStruct for BufferCreateInfo {
    const STYPE: StructureType = StructureType::BufferCreateInfo;
}

impl CheckStruct for BufferCreateInfo {
    fn check(value: &Value, reg: &EnumRegistry) -> Result<Self, MarshalError> {
        let rec = get::expect_record(value)?;
        let size: u64 = get::req(rec, "size")?;
        if size == 0 {
            return Err(MarshalError::new(ErrorKind::Empty).in_field("size"));
        }
        let usage: BufferUsageFlags = req_flags(rec, "usage")?;
        if usage.is_empty() {
            return Err(MarshalError::new(ErrorKind::Empty).in_field("usage"));
        }
        let sharing_mode = opt_enum_or(rec, "sharing_mode", reg, SharingMode::Exclusive)?;
        let queue_family_indices = get::opt_seq_of(rec, "queue_family_indices")?;
        if sharing_mode == SharingMode::Concurrent && queue_family_indices.is_empty() {
            return Err(MarshalError::new(ErrorKind::Empty).in_field("queue_family_indices"));
        }
        Ok(Self {
            flags: opt_flags_or(rec, "flags", BufferCreateFlags::empty())?,
            size,
            usage,
            sharing_mode,
            queue_family_indices,
            chain: build_chain(rec, reg, CHAIN_RULES)?,
        })
    }
}

impl PushStruct for BufferCreateInfo {
    fn push(&self, reg: &EnumRegistry) -> Value {
        let mut rec = Record::new();
        rec.set("flags", self.flags.bits().into_value());
        rec.set("size", self.size.into_value());
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
        push_chain(&self.chain, &mut rec, reg);
        Value::Record(rec)
    }
}
