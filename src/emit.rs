//! Rendering of the generated collision dispatch source file.
//!
//! Produces one Rust source artifact: a `SHAPE{n}` constant per deduplicated
//! shape, a `match` over concrete state ids dispatching to those constants
//! through range-compressed arms, and two `matches!` predicates for the
//! empty and full shapes. Rendering is deterministic: shapes ascend by id and
//! group arms ascend by shape id.

use crate::dedup::ShapeDedup;
use crate::geometry::{Aabb, Shape, ShapeId};
use crate::group::DispatchGroups;
use crate::pipeline::{CompileError, CompileResult};
use crate::ranges::{compress, render_alternation};
use std::fmt::Write;

/// Configuration for the emitter.
#[derive(Clone, Debug)]
pub struct EmitConfig {
    /// Shape used as the unconditional `_ =>` dispatch arm.
    ///
    /// Data-driven: the second shape discovered (id 1, the full cube in real
    /// block data) dominates, so folding its arm into the default minimizes
    /// the emitted match. Exposed as configuration because the choice depends
    /// on discovery order, not on anything structural.
    pub fallback_shape: ShapeId,
}

impl Default for EmitConfig {
    fn default() -> Self {
        EmitConfig { fallback_shape: 1 }
    }
}

const HEADER: &str = "\
//! Autogenerated block collisions for every block

// This file is @generated by shapegen from the extracted collision data.
// Do not edit it directly; regenerate it instead.

#![allow(clippy::explicit_auto_deref)]
#![allow(clippy::redundant_closure)]

use super::VoxelShape;
use crate::block::BlockState;
use crate::collision::{self, Shapes};
use once_cell::sync::Lazy;

pub trait BlockWithShape {
    fn shape(&self) -> &'static VoxelShape;
    /// Tells you whether the block has an empty shape.
    ///
    /// This is slightly more efficient than calling `shape()` and comparing against `EMPTY_SHAPE`.
    fn is_shape_empty(&self) -> bool;
    fn is_shape_full(&self) -> bool;
}

";

/// Render the shape table and dispatch groups into the generated source text.
pub fn render(
    dedup: &ShapeDedup,
    groups: &DispatchGroups,
    config: &EmitConfig,
) -> CompileResult<String> {
    let fallback = config.fallback_shape;
    if dedup.shape(fallback).is_none() || groups.states(fallback).is_empty() {
        return Err(CompileError::FallbackShapeUnused(fallback));
    }
    if groups.empty_states().is_empty() {
        return Err(CompileError::EmptyShapeUnused);
    }

    let mut code = String::from(HEADER);

    for (id, shape) in dedup.shapes().iter().enumerate() {
        render_shape(&mut code, id as ShapeId, shape);
    }
    code.push('\n');

    let empty_pattern = render_alternation(&compress(groups.empty_states()));
    let full_pattern = render_alternation(&compress(groups.states(fallback)));

    writeln!(code, "impl BlockWithShape for BlockState {{").unwrap();
    writeln!(code, "    fn shape(&self) -> &'static VoxelShape {{").unwrap();
    writeln!(code, "        match self.id {{").unwrap();
    for shape_id in groups.shape_ids() {
        if shape_id == fallback {
            continue;
        }
        let pattern = render_alternation(&compress(groups.states(shape_id)));
        writeln!(code, "            {} => &SHAPE{},", pattern, shape_id).unwrap();
    }
    writeln!(code, "            _ => &SHAPE{},", fallback).unwrap();
    writeln!(code, "        }}").unwrap();
    writeln!(code, "    }}").unwrap();
    writeln!(code).unwrap();
    writeln!(code, "    fn is_shape_empty(&self) -> bool {{").unwrap();
    writeln!(code, "        matches!(self.id, {})", empty_pattern).unwrap();
    writeln!(code, "    }}").unwrap();
    writeln!(code).unwrap();
    writeln!(code, "    fn is_shape_full(&self) -> bool {{").unwrap();
    writeln!(code, "        matches!(self.id, {})", full_pattern).unwrap();
    writeln!(code, "    }}").unwrap();
    writeln!(code, "}}").unwrap();

    Ok(code)
}

/// Render one `SHAPE{n}` constant.
///
/// Multi-box shapes fold left with `Shapes::or` in stored box order. The
/// order only affects how the geometric union is built internally, never the
/// resulting extent, so no canonicalization happens here.
fn render_shape(code: &mut String, id: ShapeId, shape: &Shape) {
    let boxes = shape.boxes();
    match boxes {
        [] => {
            writeln!(
                code,
                "static SHAPE{}: Lazy<VoxelShape> = Lazy::new(|| collision::EMPTY_SHAPE.clone());",
                id
            )
            .unwrap();
        }
        [single] => {
            writeln!(
                code,
                "static SHAPE{}: Lazy<VoxelShape> = Lazy::new(|| {});",
                id,
                box_expr(single)
            )
            .unwrap();
        }
        [first, rest @ .., last] => {
            writeln!(code, "static SHAPE{}: Lazy<VoxelShape> = Lazy::new(|| {{", id).unwrap();
            writeln!(code, "    let s = {};", box_expr(first)).unwrap();
            for b in rest {
                writeln!(code, "    let s = Shapes::or(s, {});", box_expr(b)).unwrap();
            }
            writeln!(code, "    Shapes::or(s, {})", box_expr(last)).unwrap();
            writeln!(code, "}});").unwrap();
        }
    }
}

fn box_expr(aabb: &Aabb) -> String {
    let args = aabb
        .bounds()
        .iter()
        .map(|&v| float_literal(v))
        .collect::<Vec<_>>()
        .join(", ");
    format!("collision::box_shape({})", args)
}

/// Render a bound as a float literal, with a trailing dot when integral
/// (`1.`, `0.5`).
fn float_literal(v: f64) -> String {
    let mut s = format!("{}", v);
    if !s.contains('.') {
        s.push('.');
    }
    s
}
