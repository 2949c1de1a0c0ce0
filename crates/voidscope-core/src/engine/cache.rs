use crate::core::models::atom::Atom;
use crate::core::models::crystal_void::CrystalVoid;
use crate::core::models::lattice::{LatticeType, VoidType};
use crate::core::models::structure::StructureData;
use crate::engine::config::GenerationConfig;
use crate::workflows::explore;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

/// Memoizes generated structures per configuration.
///
/// Display atoms depend on the lattice only and are stored once per lattice;
/// voids are stored per (lattice, void type). The cache is an ordinary value
/// owned by its caller, so independent callers never share entries.
#[derive(Debug, Default, Clone)]
pub struct StructureCache {
    config: GenerationConfig,
    atoms: HashMap<LatticeType, Arc<Vec<Atom>>>,
    snapshots: HashMap<(LatticeType, VoidType), Arc<StructureData>>,
    stats: CacheStats,
}

impl StructureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GenerationConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn get_or_generate(&mut self, lattice: LatticeType, void_type: VoidType) -> Arc<StructureData> {
        if let Some(snapshot) = self.snapshots.get(&(lattice, void_type)) {
            self.stats.hits += 1;
            trace!("Cache hit for {} {}", lattice, void_type);
            return Arc::clone(snapshot);
        }

        self.stats.misses += 1;
        debug!("Cache miss for {} {}, generating structure.", lattice, void_type);

        let atoms = self.atoms_for(lattice);
        let voids: Vec<CrystalVoid> =
            explore::generate_voids_with(lattice, void_type, &self.config.quantizer());
        let snapshot = Arc::new(StructureData {
            lattice,
            void_type,
            atoms: atoms.as_ref().clone(),
            voids,
        });
        self.snapshots
            .insert((lattice, void_type), Arc::clone(&snapshot));
        snapshot
    }

    /// Display atoms of `lattice`, generated at most once.
    pub fn atoms_for(&mut self, lattice: LatticeType) -> Arc<Vec<Atom>> {
        Arc::clone(
            self.atoms
                .entry(lattice)
                .or_insert_with(|| Arc::new(explore::generate_structure(lattice))),
        )
    }

    pub fn contains(&self, lattice: LatticeType, void_type: VoidType) -> bool {
        self.snapshots.contains_key(&(lattice, void_type))
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn clear(&mut self) {
        self.atoms.clear();
        self.snapshots.clear();
        self.stats = CacheStats::default();
    }
}
