use nalgebra::Point3;
use serde::Serialize;
use std::fmt;

/// Where an atom sits relative to the unit cell that generated it.
///
/// The variant is descriptive only; no algorithm branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AtomVariant {
    /// One of the eight cube corners.
    Corner,
    /// The center of one of the six cube faces (FCC only).
    Face,
    /// The center of the cube (BCC only).
    Body,
}

/// Integer index of a unit cell within the periodic lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct CellOffset {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CellOffset {
    pub const ORIGIN: CellOffset = CellOffset { x: 0, y: 0, z: 0 };

    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Translates a fractional coordinate of the reference cell into this cell.
    pub fn translate(&self, fx: f64, fy: f64, fz: f64) -> Point3<f64> {
        Point3::new(
            f64::from(self.x) + fx,
            f64::from(self.y) + fy,
            f64::from(self.z) + fz,
        )
    }
}

/// A lattice atom expressed in unit-cell-fraction coordinates.
///
/// The `id` is unique only within the cell invocation that produced it. Two
/// atoms shared between neighboring cells carry different ids but identical
/// positions, so physical identity must be decided by coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Atom {
    pub id: String,
    pub position: Point3<f64>,
    pub variant: AtomVariant,
}

impl Atom {
    pub fn new(id: impl Into<String>, position: Point3<f64>, variant: AtomVariant) -> Self {
        Self {
            id: id.into(),
            position,
            variant,
        }
    }

    pub fn distance_to(&self, point: &Point3<f64>) -> f64 {
        nalgebra::distance(&self.position, point)
    }
}

impl fmt::Display for AtomVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AtomVariant::Corner => "corner",
                AtomVariant::Face => "face",
                AtomVariant::Body => "body",
            }
        )
    }
}
