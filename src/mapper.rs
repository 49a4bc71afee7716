//! Per-block shape assignment.
//!
//! Resolves each block's per-state raw references through the deduplicated
//! remap table, producing one dense shape id per declared state, in declared
//! state order. The grouper zips this list against the concrete-state report,
//! so the ordering here must match the block's declared state order exactly.

use crate::dedup::ShapeDedup;
use crate::geometry::{ShapeId, EMPTY_SHAPE_ID};
use crate::pipeline::{CompileError, CompileResult};
use crate::table::BlockTable;

/// A block's dense shape assignment, one id per declared state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockShapes {
    /// The block identifier as given in the block table.
    pub name: String,
    /// Dense shape ids in declared state order.
    pub shape_ids: Vec<ShapeId>,
}

/// Assign dense shape ids to every block, in block table order.
pub fn assign_shapes(blocks: &BlockTable, dedup: &ShapeDedup) -> CompileResult<Vec<BlockShapes>> {
    blocks
        .iter()
        .map(|block| {
            let shape_ids = block
                .shape_refs
                .iter()
                .map(|raw| match raw {
                    None => Ok(EMPTY_SHAPE_ID),
                    Some(id) => dedup
                        .remap(Some(*id))
                        .ok_or(CompileError::UnmappedShape(*id)),
                })
                .collect::<CompileResult<Vec<_>>>()?;
            Ok(BlockShapes {
                name: block.name.clone(),
                shape_ids,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedup::deduplicate;
    use crate::geometry::{BoxDescriptor, Extent, RawShapeRef};
    use crate::table::BlockEntry;

    fn unit_box() -> BoxDescriptor {
        BoxDescriptor::new(Extent::Uniform(0.0), Extent::Uniform(1.0))
    }

    #[test]
    fn test_assignment_preserves_state_order() {
        let blocks = vec![BlockEntry::new(
            "minecraft:slab",
            vec![Some(1), None, Some(0), Some(1)],
        )];
        let shapes = vec![RawShapeRef::Single(0), RawShapeRef::Single(0)];
        let dedup = deduplicate(&blocks, &shapes, &vec![unit_box()]).unwrap();

        let assigned = assign_shapes(&blocks, &dedup).unwrap();
        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].name, "minecraft:slab");
        assert_eq!(assigned[0].shape_ids, vec![2, 0, 1, 2]);
    }

    #[test]
    fn test_blocks_keep_table_order() {
        let blocks = vec![
            BlockEntry::new("b", vec![None]),
            BlockEntry::new("a", vec![None]),
        ];
        let dedup = deduplicate(&blocks, &vec![], &vec![]).unwrap();
        let assigned = assign_shapes(&blocks, &dedup).unwrap();
        assert_eq!(assigned[0].name, "b");
        assert_eq!(assigned[1].name, "a");
    }

    #[test]
    fn test_unmapped_shape_fails() {
        // dedup built from a table that never uses raw shape 1
        let blocks = vec![BlockEntry::new("a", vec![Some(0)])];
        let shapes = vec![RawShapeRef::Single(0), RawShapeRef::Single(0)];
        let dedup = deduplicate(&blocks, &shapes, &vec![unit_box()]).unwrap();

        let other = vec![BlockEntry::new("b", vec![Some(1)])];
        let err = assign_shapes(&other, &dedup).unwrap_err();
        assert_eq!(err, CompileError::UnmappedShape(1));
    }
}
