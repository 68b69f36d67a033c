//! Extension chain building and flattening.
//!
//! A typed struct's extension chain is an ordered `Vec` of a per-base
//! tagged union. Which nodes exist is decided by trigger keys in the
//! source record: each base declares a static [`ChainRule`] table, and
//! [`build_chain`] appends one node per trigger present, in table
//! order. Extension fields live flattened in the base record: the
//! rules read them from the base record on the way in, and
//! [`push_chain`] writes them back into the same output record on the
//! way out.

use scriptvk_core::{MarshalError, Record, get};
use scriptvk_registry::EnumRegistry;

use crate::types::StructureType;

/// One recognized extension of a base struct.
pub struct ChainRule<C> {
    /// Record key whose presence implies the extension.
    pub trigger: &'static str,
    /// Build the extension node from the (flattened) base record.
    pub build: fn(&Record, &EnumRegistry) -> Result<C, MarshalError>,
}

/// Build the extension chain implied by the keys present in `rec`.
///
/// A failing build drops the nodes already appended and propagates.
pub fn build_chain<C>(
    rec: &Record,
    reg: &EnumRegistry,
    rules: &[ChainRule<C>],
) -> Result<Vec<C>, MarshalError> {
    let mut chain = Vec::new();
    for rule in rules {
        if get::is_present(rec, rule.trigger) {
            chain.push((rule.build)(rec, reg)?);
        }
    }
    Ok(chain)
}

/// A node of some base struct's extension chain.
///
/// Dispatch over the node catalog is an exhaustive `match` in each
/// implementation, so a tag unknown to the pusher cannot exist.
pub trait ChainNode {
    /// The structure type tag of this node.
    fn stype(&self) -> StructureType;

    /// Write this node's fields into the flattened output record.
    fn push_into(&self, rec: &mut Record, reg: &EnumRegistry);
}

/// Flatten every chain node's fields into the output record, in chain
/// order.
pub fn push_chain<C: ChainNode>(chain: &[C], rec: &mut Record, reg: &EnumRegistry) {
    for node in chain {
        node.push_into(rec, reg);
    }
}
