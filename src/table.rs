//! Input tables handed over by the extraction collaborators.
//!
//! Parsing the raw archives into these tables is out of scope; the compiler
//! consumes them fully materialized and treats them as read-only.

use crate::geometry::{BoxDescriptor, RawShapeRef};
use rustc_hash::FxHashMap;

/// Index into the raw shape list, as carried by a block state.
pub type RawShapeId = usize;

/// A block with its per-state raw shape references, in declared state order.
///
/// `None` means the state has no collision shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockEntry {
    pub name: String,
    pub shape_refs: Vec<Option<RawShapeId>>,
}

impl BlockEntry {
    pub fn new(name: impl Into<String>, shape_refs: Vec<Option<RawShapeId>>) -> Self {
        BlockEntry {
            name: name.into(),
            shape_refs,
        }
    }
}

/// Ordered block table; block order drives every downstream ordering.
pub type BlockTable = Vec<BlockEntry>;

/// Raw shape list; index = [`RawShapeId`].
pub type RawShapeList = Vec<RawShapeRef>;

/// Box table; index = box id.
pub type BoxTable = Vec<BoxDescriptor>;

/// Concrete state ids per block, same cardinality and order as the block's
/// declared states.
pub type StateReport = FxHashMap<String, Vec<u32>>;

/// Everything the compiler consumes for one run.
#[derive(Clone, Debug)]
pub struct CompileInput {
    pub blocks: BlockTable,
    pub shapes: RawShapeList,
    pub boxes: BoxTable,
    pub report: StateReport,
}

/// Strip a `namespace:` prefix from a block identifier.
pub fn strip_namespace(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_namespace() {
        assert_eq!(strip_namespace("minecraft:stone"), "stone");
        assert_eq!(strip_namespace("stone"), "stone");
        assert_eq!(strip_namespace("a:b:c"), "c");
    }
}
