use crate::core::models::crystal_void::VoidSite;
use crate::core::models::lattice::{LatticeType, VoidType};

/// Midpoints of the 12 cube edges, in the order the site ids are numbered.
const EDGE_CENTERS: [[f64; 3]; 12] = [
    [0.5, 0.0, 0.0],
    [0.0, 0.5, 0.0],
    [0.0, 0.0, 0.5],
    [0.5, 1.0, 1.0],
    [1.0, 0.5, 1.0],
    [1.0, 1.0, 0.5],
    [0.5, 1.0, 0.0],
    [0.5, 0.0, 1.0],
    [0.0, 1.0, 0.5],
    [0.0, 0.5, 1.0],
    [1.0, 0.5, 0.0],
    [1.0, 0.0, 0.5],
];

const FACE_CENTERS: [[f64; 3]; 6] = [
    [0.5, 0.5, 0.0],
    [0.5, 0.5, 1.0],
    [0.5, 0.0, 0.5],
    [0.5, 1.0, 0.5],
    [0.0, 0.5, 0.5],
    [1.0, 0.5, 0.5],
];

const QUARTERS: [f64; 2] = [0.25, 0.75];

/// Returns the canonical void sites of the displayed unit cell.
///
/// | Lattice | Void type   | Sites                               |
/// |---------|-------------|-------------------------------------|
/// | FCC     | octahedral  | body center + 12 edge centers = 13  |
/// | FCC     | tetrahedral | octant centers `{¼, ¾}³` = 8        |
/// | BCC     | octahedral  | 6 face centers + 12 edge centers = 18 |
/// | BCC     | tetrahedral | 4 per face × 6 faces = 24           |
pub fn void_sites(lattice: LatticeType, void_type: VoidType) -> Vec<VoidSite> {
    match (lattice, void_type) {
        (LatticeType::Fcc, VoidType::Octahedral) => fcc_octahedral_sites(),
        (LatticeType::Fcc, VoidType::Tetrahedral) => fcc_tetrahedral_sites(),
        (LatticeType::Bcc, VoidType::Octahedral) => bcc_octahedral_sites(),
        (LatticeType::Bcc, VoidType::Tetrahedral) => bcc_tetrahedral_sites(),
    }
}

fn fcc_octahedral_sites() -> Vec<VoidSite> {
    let mut sites = Vec::with_capacity(13);
    sites.push(VoidSite::new("v-oct-body", 0.5, 0.5, 0.5));
    sites.extend(
        EDGE_CENTERS
            .iter()
            .enumerate()
            .map(|(i, &[x, y, z])| VoidSite::new(format!("v-oct-edge-{}", i), x, y, z)),
    );
    sites
}

fn fcc_tetrahedral_sites() -> Vec<VoidSite> {
    let mut sites = Vec::with_capacity(8);
    for x in QUARTERS {
        for y in QUARTERS {
            for z in QUARTERS {
                sites.push(VoidSite::new(format!("v-tet-{}-{}-{}", x, y, z), x, y, z));
            }
        }
    }
    sites
}

fn bcc_octahedral_sites() -> Vec<VoidSite> {
    let faces = FACE_CENTERS
        .iter()
        .enumerate()
        .map(|(i, &[x, y, z])| VoidSite::new(format!("v-bcc-oct-face-{}", i), x, y, z));
    let edges = EDGE_CENTERS
        .iter()
        .enumerate()
        .map(|(i, &[x, y, z])| VoidSite::new(format!("v-bcc-oct-edge-{}", i), x, y, z));
    faces.chain(edges).collect()
}

/// Four sites per cube face, a quarter edge away from the face center along
/// each in-plane axis. Faces are visited z, then x, then y.
fn bcc_tetrahedral_sites() -> Vec<VoidSite> {
    let mut sites = Vec::with_capacity(24);
    for (axis, normal) in [('z', 2usize), ('x', 0), ('y', 1)] {
        let (u, v) = in_plane_axes(normal);
        for side in [0u8, 1] {
            let in_plane = [(v, 0.25), (v, 0.75), (u, 0.25), (u, 0.75)];
            for (n, (moving_axis, value)) in in_plane.into_iter().enumerate() {
                let mut coords = [0.5; 3];
                coords[normal] = f64::from(side);
                coords[moving_axis] = value;
                sites.push(VoidSite::new(
                    format!("vbcc-tet-{}{}-{}", axis, side, n + 1),
                    coords[0],
                    coords[1],
                    coords[2],
                ));
            }
        }
    }
    sites
}

/// The two axes spanning the plane normal to `normal`, in the order whose
/// second member is varied first.
fn in_plane_axes(normal: usize) -> (usize, usize) {
    match normal {
        0 => (2, 1),
        1 => (2, 0),
        _ => (0, 1),
    }
}
