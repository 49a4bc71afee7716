//! Inverse grouping of concrete block states by shape.
//!
//! Zips each block's dense shape-id list against that block's ordered
//! concrete-state-id list from the report, inverting the assignment into a
//! mapping from shape id to the states that use it. Each state contributes to
//! exactly one group, so the groups partition the full state id space.

use crate::geometry::{ShapeId, EMPTY_SHAPE_ID};
use crate::mapper::BlockShapes;
use crate::pipeline::{CompileError, CompileResult};
use crate::table::{strip_namespace, StateReport};
use rustc_hash::FxHashMap;

/// Mapping from shape id to the concrete state ids that resolve to it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DispatchGroups {
    groups: FxHashMap<ShapeId, Vec<u32>>,
}

impl DispatchGroups {
    /// The state ids assigned to a shape, in accumulation order. Empty for a
    /// shape with no states.
    pub fn states(&self, shape: ShapeId) -> &[u32] {
        self.groups.get(&shape).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The states with no collision shape. Queried independently of the
    /// dispatch map, as is the full-shape group.
    pub fn empty_states(&self) -> &[u32] {
        self.states(EMPTY_SHAPE_ID)
    }

    /// Shape ids with at least one state, ascending. Emission iterates this
    /// so the output is deterministic.
    pub fn shape_ids(&self) -> Vec<ShapeId> {
        let mut ids: Vec<ShapeId> = self.groups.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of non-empty groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Invert per-block shape assignments into dispatch groups.
///
/// A block missing from the report, or a report entry whose length disagrees
/// with the block's declared state count, aborts compilation: a silent
/// truncation here would emit a dispatch that misroutes every later state.
pub fn group_states(blocks: &[BlockShapes], report: &StateReport) -> CompileResult<DispatchGroups> {
    let mut groups: FxHashMap<ShapeId, Vec<u32>> = FxHashMap::default();

    for block in blocks {
        let state_ids = report
            .get(&block.name)
            .ok_or_else(|| CompileError::MissingStateReport(strip_namespace(&block.name).to_string()))?;
        if state_ids.len() != block.shape_ids.len() {
            return Err(CompileError::StateCountMismatch {
                block: strip_namespace(&block.name).to_string(),
                declared: block.shape_ids.len(),
                reported: state_ids.len(),
            });
        }
        for (&shape, &state) in block.shape_ids.iter().zip(state_ids) {
            groups.entry(shape).or_default().push(state);
        }
    }

    // The emitter needs a defined empty-shape range and cannot synthesize one.
    if groups.get(&EMPTY_SHAPE_ID).map_or(true, Vec::is_empty) {
        return Err(CompileError::EmptyShapeUnused);
    }

    Ok(DispatchGroups { groups })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::BlockShapes;
    use rustc_hash::FxHashSet;

    fn block(name: &str, shape_ids: Vec<ShapeId>) -> BlockShapes {
        BlockShapes {
            name: name.to_string(),
            shape_ids,
        }
    }

    fn report(entries: &[(&str, &[u32])]) -> StateReport {
        entries
            .iter()
            .map(|(name, ids)| (name.to_string(), ids.to_vec()))
            .collect()
    }

    #[test]
    fn test_groups_partition_states() {
        let blocks = vec![
            block("minecraft:a", vec![0, 1, 1]),
            block("minecraft:b", vec![2, 0]),
        ];
        let report = report(&[("minecraft:a", &[10, 11, 12]), ("minecraft:b", &[20, 21])]);

        let groups = group_states(&blocks, &report).unwrap();
        assert_eq!(groups.states(0), &[10, 21]);
        assert_eq!(groups.states(1), &[11, 12]);
        assert_eq!(groups.states(2), &[20]);
        assert_eq!(groups.shape_ids(), vec![0, 1, 2]);

        // every state appears in exactly one group
        let mut seen = FxHashSet::default();
        for id in groups.shape_ids() {
            for &state in groups.states(id) {
                assert!(seen.insert(state));
            }
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_two_blocks_share_a_group() {
        let blocks = vec![block("a", vec![0, 1]), block("b", vec![1])];
        let report = report(&[("a", &[1, 2]), ("b", &[3])]);
        let groups = group_states(&blocks, &report).unwrap();
        assert_eq!(groups.states(1), &[2, 3]);
    }

    #[test]
    fn test_missing_report_entry_fails() {
        let blocks = vec![block("minecraft:a", vec![0])];
        let err = group_states(&blocks, &report(&[])).unwrap_err();
        assert_eq!(err, CompileError::MissingStateReport("a".to_string()));
    }

    #[test]
    fn test_state_count_mismatch_fails() {
        let blocks = vec![block("minecraft:a", vec![0, 1])];
        let report = report(&[("minecraft:a", &[1, 2, 3])]);
        let err = group_states(&blocks, &report).unwrap_err();
        assert_eq!(
            err,
            CompileError::StateCountMismatch {
                block: "a".to_string(),
                declared: 2,
                reported: 3,
            }
        );
    }

    #[test]
    fn test_unused_empty_shape_fails() {
        let blocks = vec![block("a", vec![1, 1])];
        let report = report(&[("a", &[1, 2])]);
        let err = group_states(&blocks, &report).unwrap_err();
        assert_eq!(err, CompileError::EmptyShapeUnused);
    }
}
