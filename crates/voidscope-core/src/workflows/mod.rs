//! # Workflows Module
//!
//! Top-level entry points of VoidScope.
//!
//! - **Exploration Workflow** ([`explore`]) - Displayed-cell atoms, resolved voids, and the
//!   combined [`StructureData`](crate::core::models::structure::StructureData) snapshot
//!   for a (lattice, void type) pair.

pub mod explore;
