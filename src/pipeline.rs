//! End-to-end compilation pipeline.
//!
//! Wires the stages as a pure left-to-right transform over immutable data:
//! dedupe → map → group → emit. Each stage hands an explicit data structure
//! to the next and never re-reads later output, so the whole run is a finite,
//! deterministic batch: identical inputs produce byte-identical text.
//!
//! Any data-integrity error aborts the run with no partial artifact; the
//! computation is deterministic, so retrying without fixing the input would
//! reproduce the identical error.

use crate::dedup::deduplicate;
use crate::emit::{render, EmitConfig};
use crate::geometry::{GeometryError, ShapeId};
use crate::group::group_states;
use crate::mapper::assign_shapes;
use crate::table::{CompileInput, RawShapeId};
use thiserror::Error;

/// Fatal data-integrity errors. Malformed geometry (unordered bounds) is not
/// an error; it passes through unvalidated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("block state references raw shape {0} which is not in the shape list")]
    MissingRawShape(RawShapeId),
    #[error("raw shape {0} was never assigned a deduplicated id")]
    UnmappedShape(RawShapeId),
    #[error("no concrete state report entry for block `{0}`")]
    MissingStateReport(String),
    #[error("block `{block}` declares {declared} states but the report lists {reported}")]
    StateCountMismatch {
        block: String,
        declared: usize,
        reported: usize,
    },
    #[error("no block state uses the empty shape (shape 0)")]
    EmptyShapeUnused,
    #[error("fallback shape {0} has no block states")]
    FallbackShapeUnused(ShapeId),
}

/// Result type for compilation.
pub type CompileResult<T> = Result<T, CompileError>;

/// Compile the input tables into the generated dispatch source text.
pub fn compile(input: &CompileInput, config: &EmitConfig) -> CompileResult<String> {
    let dedup = deduplicate(&input.blocks, &input.shapes, &input.boxes)?;
    log::debug!(
        "deduplicated {} raw shapes into {} table entries",
        input.shapes.len(),
        dedup.len()
    );

    let blocks = assign_shapes(&input.blocks, &dedup)?;
    log::debug!("assigned shapes for {} blocks", blocks.len());

    let groups = group_states(&blocks, &input.report)?;
    log::debug!("grouped states into {} dispatch groups", groups.len());

    render(&dedup, &groups, config)
}
