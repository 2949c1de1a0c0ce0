use super::atom::Atom;
use super::crystal_void::CrystalVoid;
use super::lattice::{LatticeType, VoidType};
use serde::Serialize;

/// Immutable snapshot of one (lattice, void type) configuration: the atoms of
/// the displayed unit cell plus every void with its resolved forming atoms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureData {
    pub lattice: LatticeType,
    pub void_type: VoidType,
    pub atoms: Vec<Atom>,
    pub voids: Vec<CrystalVoid>,
}

impl StructureData {
    pub fn find_void(&self, id: &str) -> Option<&CrystalVoid> {
        self.voids.iter().find(|v| v.id == id)
    }

    pub fn void_ids(&self) -> impl Iterator<Item = &str> {
        self.voids.iter().map(|v| v.id.as_str())
    }
}
