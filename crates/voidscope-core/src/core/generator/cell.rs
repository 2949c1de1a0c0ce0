use crate::core::models::atom::{Atom, AtomVariant, CellOffset};
use crate::core::models::lattice::LatticeType;

/// Face-center positions in emission order, tagged with the plane they lie in
/// and which side of the cell (0 or 1) they sit on.
const FACE_CENTERS: [(&str, u8, [f64; 3]); 6] = [
    ("xy", 0, [0.5, 0.5, 0.0]),
    ("xy", 1, [0.5, 0.5, 1.0]),
    ("yz", 0, [0.0, 0.5, 0.5]),
    ("yz", 1, [1.0, 0.5, 0.5]),
    ("xz", 0, [0.5, 0.0, 0.5]),
    ("xz", 1, [0.5, 1.0, 0.5]),
];

/// Generates the atoms of a single unit cell located at `offset`.
///
/// Emits the 8 corners first (x outermost, z innermost), then the 6 face
/// centers for FCC or the single body center for BCC. Atoms on shared
/// corners and faces are emitted again by every cell that touches them.
pub fn cell_atoms(lattice: LatticeType, offset: CellOffset) -> Vec<Atom> {
    let mut atoms = Vec::with_capacity(14);

    for x in 0..=1 {
        for y in 0..=1 {
            for z in 0..=1 {
                let id = format!(
                    "c-{}-{}-{}",
                    offset.x + x,
                    offset.y + y,
                    offset.z + z
                );
                let position = offset.translate(f64::from(x), f64::from(y), f64::from(z));
                atoms.push(Atom::new(id, position, AtomVariant::Corner));
            }
        }
    }

    match lattice {
        LatticeType::Fcc => {
            for (plane, side, [fx, fy, fz]) in FACE_CENTERS {
                let id = format!(
                    "f-{}-{}-{}-{}-{}",
                    plane, side, offset.x, offset.y, offset.z
                );
                atoms.push(Atom::new(id, offset.translate(fx, fy, fz), AtomVariant::Face));
            }
        }
        LatticeType::Bcc => {
            let id = format!("b-0-{}-{}-{}", offset.x, offset.y, offset.z);
            atoms.push(Atom::new(
                id,
                offset.translate(0.5, 0.5, 0.5),
                AtomVariant::Body,
            ));
        }
    }

    atoms
}
