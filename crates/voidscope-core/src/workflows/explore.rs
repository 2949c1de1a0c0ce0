use crate::core::generator::cell::cell_atoms;
use crate::core::generator::neighbors::{self, Quantizer};
use crate::core::generator::sites::void_sites;
use crate::core::models::atom::{Atom, CellOffset};
use crate::core::models::crystal_void::CrystalVoid;
use crate::core::models::lattice::{LatticeType, VoidType};
use crate::core::models::structure::StructureData;
use crate::engine::config::GenerationConfig;
use tracing::{debug, info, instrument};

/// Atoms of the single displayed unit cell, cell `(0, 0, 0)`.
pub fn generate_structure(lattice: LatticeType) -> Vec<Atom> {
    cell_atoms(lattice, CellOffset::ORIGIN)
}

/// Voids of the displayed cell with their forming atoms resolved using the
/// default coordinate precision.
///
/// No atom set is accepted: resolution always rebuilds the 27-cell
/// neighborhood, because the displayed cell lacks the atoms that close off
/// voids on its faces and edges.
pub fn generate_voids(lattice: LatticeType, void_type: VoidType) -> Vec<CrystalVoid> {
    generate_voids_with(lattice, void_type, &Quantizer::default())
}

pub fn generate_voids_with(
    lattice: LatticeType,
    void_type: VoidType,
    quantizer: &Quantizer,
) -> Vec<CrystalVoid> {
    neighbors::resolve(void_sites(lattice, void_type), lattice, void_type, quantizer)
}

/// Builds the complete snapshot for one configuration.
#[instrument(skip(config), name = "explore_workflow")]
pub fn generate(
    lattice: LatticeType,
    void_type: VoidType,
    config: &GenerationConfig,
) -> StructureData {
    let atoms = generate_structure(lattice);
    debug!("Generated {} atoms for the displayed cell.", atoms.len());

    let voids = generate_voids_with(lattice, void_type, &config.quantizer());
    info!(
        "Resolved {} {} voids in {} (coordination {}).",
        voids.len(),
        void_type,
        lattice,
        void_type.coordination_number()
    );

    StructureData {
        lattice,
        void_type,
        atoms,
        voids,
    }
}
