pub mod explain;
pub mod inspect;
pub mod structure;
pub mod voids;
