//! Build-time compiler for block collision shape tables.
//!
//! Turns the raw per-block-state collision-shape assignment tables produced
//! by game-data extraction into:
//! - a compact, deduplicated shape table (id 0 reserved for the empty shape),
//! - an inverse grouping of concrete block-state ids by shape,
//! - a generated Rust source file dispatching state ids to shape constants
//!   through range-compressed match arms, with `is_shape_empty` /
//!   `is_shape_full` predicates.
//!
//! Parsing the raw archives, locating output paths and writing the artifact
//! are external collaborators; [`compile`] consumes already-parsed tables and
//! returns the generated source text. The pipeline is a single-threaded,
//! deterministic batch transform: resolve → dedupe → map → group → compress →
//! emit.
//!
//! Deduplication is identity-based. Two raw shapes with identical geometry
//! but different source indices stay distinct; only references sharing a raw
//! index collapse to one id.
//!
//! # Example
//!
//! ```rust
//! use shapegen::{compile, BlockEntry, BoxDescriptor, CompileInput, EmitConfig, Extent,
//!                RawShapeRef, StateReport};
//!
//! let report: StateReport = [("minecraft:pebble".to_string(), vec![100, 101])]
//!     .into_iter()
//!     .collect();
//! let input = CompileInput {
//!     blocks: vec![BlockEntry::new("minecraft:pebble", vec![None, Some(0)])],
//!     shapes: vec![RawShapeRef::Single(0)],
//!     boxes: vec![BoxDescriptor::new(Extent::Uniform(0.0), Extent::Uniform(1.0))],
//!     report,
//! };
//!
//! let code = compile(&input, &EmitConfig::default()).unwrap();
//! assert!(code.contains("_ => &SHAPE1,"));
//! ```

pub mod dedup;
pub mod emit;
pub mod geometry;
pub mod group;
pub mod mapper;
pub mod pipeline;
pub mod ranges;
pub mod table;

// Re-exports for convenience
pub use dedup::{deduplicate, ShapeDedup};
pub use emit::{render, EmitConfig};
pub use geometry::{
    resolve_shape, Aabb, BoxDescriptor, Extent, GeometryError, RawShapeRef, Shape, ShapeId,
    EMPTY_SHAPE_ID,
};
pub use group::{group_states, DispatchGroups};
pub use mapper::{assign_shapes, BlockShapes};
pub use pipeline::{compile, CompileError, CompileResult};
pub use ranges::{compress, render_alternation, IdRange};
pub use table::{
    strip_namespace, BlockEntry, BlockTable, BoxTable, CompileInput, RawShapeId, RawShapeList,
    StateReport,
};
