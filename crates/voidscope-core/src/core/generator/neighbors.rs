use super::cell::cell_atoms;
use crate::core::models::atom::{Atom, CellOffset};
use crate::core::models::crystal_void::{CrystalVoid, VoidSite};
use crate::core::models::lattice::{LatticeType, VoidType};
use crate::engine::config::{ConfigError, MAX_PRECISION, MIN_PRECISION};
use nalgebra::Point3;
use std::collections::HashSet;
use tracing::trace;

/// Offsets of the 3×3×3 block of cells surrounding and including the origin cell.
const NEIGHBOR_RANGE: [i32; 3] = [-1, 0, 1];

pub const DEFAULT_PRECISION: u32 = 3;

/// Maps fractional coordinates onto an integer grid so that atoms generated
/// independently by adjacent cells compare equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantizer {
    decimals: u32,
    scale: f64,
}

impl Quantizer {
    /// Rounds to `decimals` places; only `MIN_PRECISION..=MAX_PRECISION` is
    /// accepted, since coarser grids merge face atoms into corners and finer
    /// ones saturate the `i64` keys.
    pub fn with_decimals(decimals: u32) -> Result<Self, ConfigError> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&decimals) {
            return Err(ConfigError::InvalidPrecision(decimals));
        }
        Ok(Self::scaled(decimals))
    }

    fn scaled(decimals: u32) -> Self {
        Self {
            decimals,
            scale: 10f64.powi(decimals as i32),
        }
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    pub fn key(&self, point: &Point3<f64>) -> (i64, i64, i64) {
        (
            (point.x * self.scale).round() as i64,
            (point.y * self.scale).round() as i64,
            (point.z * self.scale).round() as i64,
        )
    }
}

impl Default for Quantizer {
    fn default() -> Self {
        Self::scaled(DEFAULT_PRECISION)
    }
}

/// Concatenates the atoms of all 27 cells with offsets in `{-1, 0, 1}³`.
///
/// Iteration is x-offset outermost and z-offset innermost; this order is what
/// breaks distance ties during resolution.
pub fn neighbor_pool(lattice: LatticeType) -> Vec<Atom> {
    let mut pool = Vec::with_capacity(27 * 14);
    for dx in NEIGHBOR_RANGE {
        for dy in NEIGHBOR_RANGE {
            for dz in NEIGHBOR_RANGE {
                pool.extend(cell_atoms(lattice, CellOffset::new(dx, dy, dz)));
            }
        }
    }
    pool
}

/// Keeps the first atom for every quantized coordinate triple.
pub fn dedup_by_coordinate(atoms: Vec<Atom>, quantizer: &Quantizer) -> Vec<Atom> {
    let mut seen = HashSet::with_capacity(atoms.len());
    atoms
        .into_iter()
        .filter(|atom| seen.insert(quantizer.key(&atom.position)))
        .collect()
}

/// Returns the `k` atoms of `pool` closest to `point`.
///
/// The sort is stable, so equidistant atoms keep their pool order.
pub fn nearest_atoms(point: &Point3<f64>, pool: &[Atom], k: usize) -> Vec<Atom> {
    let mut by_distance: Vec<(f64, &Atom)> = pool
        .iter()
        .map(|atom| (atom.distance_to(point), atom))
        .collect();
    by_distance.sort_by(|(da, _), (db, _)| da.total_cmp(db));
    by_distance
        .into_iter()
        .take(k)
        .map(|(_, atom)| atom.clone())
        .collect()
}

/// Attaches to every site the atoms that enclose it.
///
/// The neighbor pool always spans the full 27-cell block; atoms of the
/// displayed cell alone cannot enclose voids on its faces and edges.
pub fn resolve(
    sites: Vec<VoidSite>,
    lattice: LatticeType,
    void_type: VoidType,
    quantizer: &Quantizer,
) -> Vec<CrystalVoid> {
    let raw = neighbor_pool(lattice);
    let raw_len = raw.len();
    let pool = dedup_by_coordinate(raw, quantizer);
    trace!(
        raw = raw_len,
        unique = pool.len(),
        "Built neighbor pool for {}",
        lattice
    );

    let k = void_type.coordination_number();
    sites
        .into_iter()
        .map(|site| {
            let mut void = CrystalVoid::from_site(site, void_type);
            void.forming_atoms = nearest_atoms(&void.position, &pool, k);
            void
        })
        .collect()
}
