use super::atom::Atom;
use super::lattice::VoidType;
use nalgebra::Point3;
use serde::Serialize;

/// A canonical void location before its enclosing atoms are known.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoidSite {
    pub id: String,
    pub position: Point3<f64>,
}

impl VoidSite {
    pub fn new(id: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            id: id.into(),
            position: Point3::new(x, y, z),
        }
    }
}

/// An interstitial void together with the atoms that enclose it.
///
/// `forming_atoms` is ordered by ascending distance from the void and may
/// contain atoms from neighboring cells, i.e. positions outside `[0, 1]³`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrystalVoid {
    pub id: String,
    pub position: Point3<f64>,
    #[serde(rename = "type")]
    pub void_type: VoidType,
    pub forming_atoms: Vec<Atom>,
}

impl CrystalVoid {
    /// Creates an unresolved void (no forming atoms yet).
    pub fn from_site(site: VoidSite, void_type: VoidType) -> Self {
        Self {
            id: site.id,
            position: site.position,
            void_type,
            forming_atoms: Vec::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.forming_atoms.len() == self.void_type.coordination_number()
    }

    /// Distances from the void to each forming atom, in forming order.
    pub fn forming_distances(&self) -> Vec<f64> {
        self.forming_atoms
            .iter()
            .map(|atom| atom.distance_to(&self.position))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::AtomVariant;

    #[test]
    fn from_site_starts_unresolved() {
        let site = VoidSite::new("v-oct-body", 0.5, 0.5, 0.5);
        let void = CrystalVoid::from_site(site, VoidType::Octahedral);
        assert_eq!(void.id, "v-oct-body");
        assert_eq!(void.position, Point3::new(0.5, 0.5, 0.5));
        assert!(void.forming_atoms.is_empty());
        assert!(!void.is_resolved());
    }

    #[test]
    fn is_resolved_requires_exact_coordination() {
        let mut void = CrystalVoid::from_site(
            VoidSite::new("v-tet-0.25-0.25-0.25", 0.25, 0.25, 0.25),
            VoidType::Tetrahedral,
        );
        for i in 0..4 {
            void.forming_atoms.push(Atom::new(
                format!("a{}", i),
                Point3::origin(),
                AtomVariant::Corner,
            ));
        }
        assert!(void.is_resolved());
        void.forming_atoms.push(Atom::new("extra", Point3::origin(), AtomVariant::Corner));
        assert!(!void.is_resolved());
    }

    #[test]
    fn forming_distances_follow_forming_order() {
        let mut void = CrystalVoid::from_site(VoidSite::new("v", 0.5, 0.0, 0.0), VoidType::Octahedral);
        void.forming_atoms = vec![
            Atom::new("c", Point3::new(0.0, 0.0, 0.0), AtomVariant::Corner),
            Atom::new("b", Point3::new(0.5, 0.5, 0.5), AtomVariant::Body),
        ];
        let distances = void.forming_distances();
        assert!((distances[0] - 0.5).abs() < 1e-12);
        assert!((distances[1] - 0.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn serializes_void_type_under_type_key() {
        let void = CrystalVoid::from_site(VoidSite::new("v", 0.5, 0.5, 0.5), VoidType::Octahedral);
        let json = serde_json::to_value(&void).unwrap();
        assert_eq!(json["type"], "Octahedral");
        assert_eq!(json["id"], "v");
    }
}
