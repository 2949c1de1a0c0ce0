//! Geometry a front end needs to draw a selected void.
//!
//! The displayed cell only contains atoms inside `[0, 1]³`, while forming atoms
//! may come from neighboring cells. These helpers decide which atoms to
//! highlight, which extra atoms to draw, and where the connector lines go.

use crate::core::models::atom::Atom;
use crate::core::models::crystal_void::CrystalVoid;
use crate::core::models::structure::StructureData;
use nalgebra::Point3;
use serde::Serialize;

/// Per-axis tolerance for visual coordinate comparisons.
pub const VIEW_EPSILON: f64 = 0.001;

pub fn is_inside_unit_cell(point: &Point3<f64>) -> bool {
    point
        .iter()
        .all(|&c| c > -VIEW_EPSILON && c < 1.0 + VIEW_EPSILON)
}

fn same_position(a: &Point3<f64>, b: &Point3<f64>) -> bool {
    (a - b).iter().all(|d| d.abs() < VIEW_EPSILON)
}

/// Whether `atom` (typically a displayed cell atom) is one of the void's forming atoms.
pub fn is_forming_atom(void: &CrystalVoid, atom: &Atom) -> bool {
    void.forming_atoms
        .iter()
        .any(|fa| same_position(&fa.position, &atom.position))
}

/// Forming atoms that the displayed cell does not contain.
pub fn external_forming_atoms(void: &CrystalVoid) -> Vec<&Atom> {
    void.forming_atoms
        .iter()
        .filter(|atom| !is_inside_unit_cell(&atom.position))
        .collect()
}

/// A line segment from a void to one of its forming atoms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Connector {
    pub from: Point3<f64>,
    pub to: Point3<f64>,
}

impl Connector {
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.from, &self.to)
    }
}

pub fn connectors(void: &CrystalVoid) -> Vec<Connector> {
    void.forming_atoms
        .iter()
        .map(|atom| Connector {
            from: void.position,
            to: atom.position,
        })
        .collect()
}

/// Everything needed to render one selected void on top of its structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoidHighlight {
    pub void_id: String,
    /// Ids of displayed cell atoms that enclose the void.
    pub highlighted_atom_ids: Vec<String>,
    /// Forming atoms outside the displayed cell, to be drawn explicitly.
    pub external_atoms: Vec<Atom>,
    pub connectors: Vec<Connector>,
}

impl VoidHighlight {
    pub fn for_void(structure: &StructureData, void: &CrystalVoid) -> Self {
        Self {
            void_id: void.id.clone(),
            highlighted_atom_ids: structure
                .atoms
                .iter()
                .filter(|atom| is_forming_atom(void, atom))
                .map(|atom| atom.id.clone())
                .collect(),
            external_atoms: external_forming_atoms(void).into_iter().cloned().collect(),
            connectors: connectors(void),
        }
    }
}
