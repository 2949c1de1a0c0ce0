//! # VoidScope Core Library
//!
//! Geometry of the interstitial voids of cubic crystals. For a face-centered or
//! body-centered cubic lattice and a void category (tetrahedral or octahedral) it
//! produces the atoms of one unit cell and the voids inside that cell, each void
//! annotated with the atoms that enclose it.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** Stateless data models and the pure generators:
//!   unit-cell atom placement, canonical void site tables, and forming-atom
//!   resolution over the 3×3×3 block of neighboring cells.
//!
//! - **[`engine`]: The Services.** Validated configuration, the caller-owned
//!   structure cache, the exploration session holding the selected void, and the
//!   view geometry a renderer needs to draw a selection.
//!
//! - **[`workflows`]: The Public API.** `generate_structure`, `generate_voids`, and
//!   `generate`, the entry points used by front ends.
//!
//! ## Example
//!
//! ```
//! use voidscope::core::models::lattice::{LatticeType, VoidType};
//! use voidscope::engine::session::ExplorerSession;
//!
//! let mut session = ExplorerSession::new();
//! session.set_lattice(LatticeType::Bcc);
//! session.set_void_type(VoidType::Octahedral);
//! assert_eq!(session.structure().voids.len(), 18);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
