//! # Structure Generation
//!
//! Pure functions that build the atoms of a cubic cell and locate its voids.
//!
//! - [`cell`] - Atom generator for a single unit cell at an integer offset
//! - [`sites`] - Canonical void site tables per lattice and void type
//! - [`neighbors`] - 27-cell neighbor pool, coordinate deduplication, and
//!   nearest-atom assignment of forming atoms

pub mod cell;
pub mod neighbors;
pub mod sites;
