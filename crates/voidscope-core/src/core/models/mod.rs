//! # Core Models Module
//!
//! Value types describing a cubic crystal and its interstitial voids.
//!
//! ## Overview
//!
//! All coordinates are expressed as fractions of the cubic unit cell edge, so the
//! displayed cell spans `[0, 1]³`. Points from neighboring cells simply fall
//! outside that range; no type distinguishes them.
//!
//! ## Key Components
//!
//! - [`lattice`] - The lattice ([`lattice::LatticeType`]) and void ([`lattice::VoidType`]) enumerations
//! - [`atom`] - Lattice atoms, their descriptive variant, and integer cell offsets
//! - [`crystal_void`] - Void sites and voids with their resolved forming atoms
//! - [`structure`] - The immutable snapshot returned for one configuration
//!
//! ## Usage
//!
//! ```
//! use voidscope::core::models::lattice::{LatticeType, VoidType};
//! use voidscope::workflows::explore;
//!
//! let voids = explore::generate_voids(LatticeType::Fcc, VoidType::Octahedral);
//! assert_eq!(voids.len(), 13);
//! assert!(voids.iter().all(|v| v.forming_atoms.len() == 6));
//! ```

pub mod atom;
pub mod crystal_void;
pub mod lattice;
pub mod structure;
