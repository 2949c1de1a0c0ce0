//! # Core Module
//!
//! Stateless building blocks of VoidScope: the crystal data models and the
//! generators that derive atoms and voids from them.
//!
//! ## Architecture
//!
//! - **Crystal Representation** ([`models`]) - Lattice and void enumerations, atoms, voids,
//!   and the structure snapshot
//! - **Structure Generation** ([`generator`]) - Unit-cell atom placement, void site tables,
//!   and forming-atom resolution over the surrounding supercell
//!
//! Every function in this module is deterministic: the same inputs always produce the
//! same atoms in the same order, which is what allows results to be cached.

pub mod generator;
pub mod models;
