//! Collision geometry data model and resolution.
//!
//! Raw box descriptors arrive with `from`/`to` sides that are either a
//! uniform scalar (the same value on all three axes) or an explicit
//! `[x, y, z]` vector. Resolution flattens them into six-number boxes.
//! Bounds are passed through exactly as given: the source data sometimes
//! leaves min/max unordered and downstream consumers tolerate that, so no
//! ordering is validated or corrected here.

use thiserror::Error;

/// Dense identifier for a deduplicated shape.
pub type ShapeId = u32;

/// The shape id reserved for "no collision shape".
pub const EMPTY_SHAPE_ID: ShapeId = 0;

/// Error for raw references into the box table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("box index {0} is out of range for the box table")]
    MissingBox(usize),
}

/// An axis-aligned box: `(x1, y1, z1, x2, y2, z2)`.
///
/// Each bound is a finite number. No ordering between `x1`/`x2` (etc.) is
/// enforced; malformed upstream bounds pass through unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub x1: f64,
    pub y1: f64,
    pub z1: f64,
    pub x2: f64,
    pub y2: f64,
    pub z2: f64,
}

impl Aabb {
    pub fn new(x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> Self {
        Aabb { x1, y1, z1, x2, y2, z2 }
    }

    /// The six bounds in emission order.
    pub fn bounds(&self) -> [f64; 6] {
        [self.x1, self.y1, self.z1, self.x2, self.y2, self.z2]
    }
}

/// One side of a raw box descriptor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Extent {
    /// A single number repeated across all three axes.
    Uniform(f64),
    /// Explicit per-axis values.
    PerAxis([f64; 3]),
}

impl Extent {
    /// Broadcast to three axis values.
    pub fn resolve(&self) -> [f64; 3] {
        match *self {
            Extent::Uniform(v) => [v, v, v],
            Extent::PerAxis(v) => v,
        }
    }
}

/// A raw box: `from`/`to` corners as they appear in the extracted data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxDescriptor {
    pub from: Extent,
    pub to: Extent,
}

impl BoxDescriptor {
    pub fn new(from: Extent, to: Extent) -> Self {
        BoxDescriptor { from, to }
    }

    /// Flatten into `(from_x, from_y, from_z, to_x, to_y, to_z)`.
    pub fn resolve(&self) -> Aabb {
        let [x1, y1, z1] = self.from.resolve();
        let [x2, y2, z2] = self.to.resolve();
        Aabb::new(x1, y1, z1, x2, y2, z2)
    }
}

/// An entry in the raw shape list: one box index or an ordered list of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawShapeRef {
    Single(usize),
    List(Vec<usize>),
}

impl RawShapeRef {
    /// The referenced box indices in declared order.
    pub fn box_ids(&self) -> &[usize] {
        match self {
            RawShapeRef::Single(id) => std::slice::from_ref(id),
            RawShapeRef::List(ids) => ids,
        }
    }
}

/// An ordered sequence of boxes. Zero boxes is the canonical empty shape.
///
/// Shapes are never mutated after construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shape {
    boxes: Vec<Aabb>,
}

impl Shape {
    /// The canonical empty shape.
    pub fn empty() -> Self {
        Shape { boxes: Vec::new() }
    }

    pub fn new(boxes: Vec<Aabb>) -> Self {
        Shape { boxes }
    }

    pub fn boxes(&self) -> &[Aabb] {
        &self.boxes
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

/// Resolve a raw shape reference into a `Shape`.
///
/// A single index yields a one-box shape; an index list yields a multi-box
/// shape with the boxes in list order.
pub fn resolve_shape(raw: &RawShapeRef, boxes: &[BoxDescriptor]) -> Result<Shape, GeometryError> {
    let resolved = raw
        .box_ids()
        .iter()
        .map(|&id| {
            boxes
                .get(id)
                .map(BoxDescriptor::resolve)
                .ok_or(GeometryError::MissingBox(id))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Shape::new(resolved))
}
