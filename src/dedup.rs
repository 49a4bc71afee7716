//! Shape deduplication and identity-preserving id remapping.
//!
//! Scans every block state's raw shape reference, keeps only the raw shapes
//! that are actually used, and assigns them dense new ids in ascending order
//! of their raw index. Id 0 is reserved for the empty shape (the `None`
//! reference). Deduplication is identity-based: two raw entries with
//! identical geometry but different raw indices stay distinct.

use crate::geometry::{resolve_shape, Shape, ShapeId, EMPTY_SHAPE_ID};
use crate::pipeline::{CompileError, CompileResult};
use crate::table::{BlockTable, BoxTable, RawShapeId, RawShapeList};
use rustc_hash::{FxHashMap, FxHashSet};

/// Result of shape deduplication: the dense shape table plus the remap table
/// from raw shape ids to dense ids.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeDedup {
    /// Dense shape table; index = [`ShapeId`]. Entry 0 is the empty shape.
    shapes: Vec<Shape>,
    /// Raw shape id (`None` = "no shape") to dense id.
    remap: FxHashMap<Option<RawShapeId>, ShapeId>,
}

impl ShapeDedup {
    /// The dense shape table, ascending by id.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Look up a shape by dense id.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id as usize)
    }

    /// Map a raw shape reference to its dense id.
    pub fn remap(&self, raw: Option<RawShapeId>) -> Option<ShapeId> {
        self.remap.get(&raw).copied()
    }

    /// Number of shapes in the table (including the empty shape).
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Build the deduplicated shape table for all raw shapes reachable from the
/// block table.
///
/// Raw ids are walked in natural ascending order, so dense ids follow first
/// appearance and the assignment is deterministic. Raw shapes never
/// referenced by any state are dropped entirely.
pub fn deduplicate(
    blocks: &BlockTable,
    shapes: &RawShapeList,
    boxes: &BoxTable,
) -> CompileResult<ShapeDedup> {
    let mut used: FxHashSet<RawShapeId> = FxHashSet::default();
    for block in blocks {
        for &raw_id in block.shape_refs.iter().flatten() {
            if raw_id >= shapes.len() {
                return Err(CompileError::MissingRawShape(raw_id));
            }
            used.insert(raw_id);
        }
    }

    let mut table = vec![Shape::empty()];
    let mut remap = FxHashMap::default();
    remap.insert(None, EMPTY_SHAPE_ID);

    for (raw_id, raw) in shapes.iter().enumerate() {
        if !used.contains(&raw_id) {
            continue;
        }
        let shape = resolve_shape(raw, boxes)?;
        remap.insert(Some(raw_id), table.len() as ShapeId);
        table.push(shape);
    }

    Ok(ShapeDedup { shapes: table, remap })
}
