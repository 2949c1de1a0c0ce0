use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The cubic Bravais lattices whose interstitial voids can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum LatticeType {
    /// Face-centered cubic: corner atoms plus one atom on each of the six faces.
    #[default]
    #[serde(rename = "FCC", alias = "fcc")]
    Fcc,
    /// Body-centered cubic: corner atoms plus one atom at the cell center.
    #[serde(rename = "BCC", alias = "bcc")]
    Bcc,
}

/// The interstitial site categories, named after the polyhedron formed by
/// the atoms surrounding the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum VoidType {
    #[default]
    Tetrahedral,
    Octahedral,
}

impl LatticeType {
    pub const ALL: [LatticeType; 2] = [LatticeType::Fcc, LatticeType::Bcc];

    pub fn label(&self) -> &'static str {
        match self {
            LatticeType::Fcc => "FCC",
            LatticeType::Bcc => "BCC",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            LatticeType::Fcc => "face-centered cubic",
            LatticeType::Bcc => "body-centered cubic",
        }
    }
}

impl VoidType {
    pub const ALL: [VoidType; 2] = [VoidType::Tetrahedral, VoidType::Octahedral];

    /// Number of atoms enclosing a void of this type.
    ///
    /// The count depends only on the void type, never on the lattice.
    pub fn coordination_number(&self) -> usize {
        match self {
            VoidType::Tetrahedral => 4,
            VoidType::Octahedral => 6,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid lattice type '{0}'. Expected 'fcc' or 'bcc'.")]
pub struct ParseLatticeTypeError(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid void type '{0}'. Expected 'tetrahedral' or 'octahedral'.")]
pub struct ParseVoidTypeError(pub String);

impl FromStr for LatticeType {
    type Err = ParseLatticeTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcc" | "face-centered-cubic" | "face_centered_cubic" => Ok(LatticeType::Fcc),
            "bcc" | "body-centered-cubic" | "body_centered_cubic" => Ok(LatticeType::Bcc),
            _ => Err(ParseLatticeTypeError(s.to_string())),
        }
    }
}

impl FromStr for VoidType {
    type Err = ParseVoidTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tetrahedral" | "tet" | "tetra" => Ok(VoidType::Tetrahedral),
            "octahedral" | "oct" | "octa" => Ok(VoidType::Octahedral),
            _ => Err(ParseVoidTypeError(s.to_string())),
        }
    }
}

impl fmt::Display for LatticeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for VoidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                VoidType::Tetrahedral => "Tetrahedral",
                VoidType::Octahedral => "Octahedral",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_parses_lattice_aliases_case_insensitively() {
        assert_eq!(LatticeType::from_str("fcc"), Ok(LatticeType::Fcc));
        assert_eq!(LatticeType::from_str("FCC"), Ok(LatticeType::Fcc));
        assert_eq!(
            LatticeType::from_str("Face-Centered-Cubic"),
            Ok(LatticeType::Fcc)
        );
        assert_eq!(LatticeType::from_str(" bcc "), Ok(LatticeType::Bcc));
        assert_eq!(
            LatticeType::from_str("body_centered_cubic"),
            Ok(LatticeType::Bcc)
        );
    }

    #[test]
    fn from_str_rejects_unknown_lattices() {
        assert_eq!(
            LatticeType::from_str("hcp"),
            Err(ParseLatticeTypeError("hcp".to_string()))
        );
        assert!(LatticeType::from_str("").is_err());
    }

    #[test]
    fn from_str_parses_void_type_aliases() {
        assert_eq!(VoidType::from_str("tet"), Ok(VoidType::Tetrahedral));
        assert_eq!(VoidType::from_str("Tetrahedral"), Ok(VoidType::Tetrahedral));
        assert_eq!(VoidType::from_str("OCT"), Ok(VoidType::Octahedral));
        assert_eq!(VoidType::from_str("octahedral"), Ok(VoidType::Octahedral));
        assert!(VoidType::from_str("cubic").is_err());
    }

    #[test]
    fn coordination_number_depends_only_on_void_type() {
        assert_eq!(VoidType::Tetrahedral.coordination_number(), 4);
        assert_eq!(VoidType::Octahedral.coordination_number(), 6);
    }

    #[test]
    fn display_uses_conventional_labels() {
        assert_eq!(LatticeType::Fcc.to_string(), "FCC");
        assert_eq!(LatticeType::Bcc.to_string(), "BCC");
        assert_eq!(VoidType::Tetrahedral.to_string(), "Tetrahedral");
        assert_eq!(VoidType::Octahedral.to_string(), "Octahedral");
    }

    #[test]
    fn serde_uses_upper_case_lattice_labels() {
        let json = serde_json::to_string(&LatticeType::Bcc).unwrap();
        assert_eq!(json, "\"BCC\"");
        let parsed: LatticeType = serde_json::from_str("\"fcc\"").unwrap();
        assert_eq!(parsed, LatticeType::Fcc);
    }

    #[test]
    fn defaults_match_initial_view() {
        assert_eq!(LatticeType::default(), LatticeType::Fcc);
        assert_eq!(VoidType::default(), VoidType::Tetrahedral);
    }
}
