use crate::error::{CliError, Result};
use nalgebra::Point3;
use serde::Serialize;
use voidscope::core::models::atom::Atom;
use voidscope::core::models::crystal_void::CrystalVoid;
use voidscope::core::models::lattice::LatticeType;
use voidscope::core::models::structure::StructureData;
use voidscope::engine::view::VoidHighlight;

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::Other(e.into()))
}

fn fmt_point(p: &Point3<f64>) -> String {
    format!("({:>6.3}, {:>6.3}, {:>6.3})", p.x, p.y, p.z)
}

fn atom_line(atom: &Atom, void_position: Option<&Point3<f64>>) -> String {
    let mut line = format!(
        "  {:<16} {:<7} {}",
        atom.id,
        atom.variant.to_string(),
        fmt_point(&atom.position)
    );
    if let Some(position) = void_position {
        line.push_str(&format!("  d = {:.4}", atom.distance_to(position)));
    }
    line.push('\n');
    line
}

pub fn render_structure_text(lattice: LatticeType, atoms: &[Atom]) -> String {
    let mut out = format!(
        "{} ({}) unit cell: {} atoms\n",
        lattice,
        lattice.full_name(),
        atoms.len()
    );
    for atom in atoms {
        out.push_str(&atom_line(atom, None));
    }
    out
}

fn void_block(void: &CrystalVoid) -> String {
    let mut out = format!(
        "{} at {} ({} forming atoms)\n",
        void.id,
        fmt_point(&void.position),
        void.forming_atoms.len()
    );
    for atom in &void.forming_atoms {
        out.push_str(&atom_line(atom, Some(&void.position)));
    }
    out
}

pub fn render_voids_text(data: &StructureData) -> String {
    let mut out = format!(
        "{} {} voids: {} sites, coordination number {}\n",
        data.lattice,
        data.void_type,
        data.voids.len(),
        data.void_type.coordination_number()
    );
    for void in &data.voids {
        out.push('\n');
        out.push_str(&void_block(void));
    }
    out
}

#[derive(Debug, Serialize)]
pub struct InspectReport<'a> {
    pub void: &'a CrystalVoid,
    pub highlight: &'a VoidHighlight,
}

pub fn render_inspect_text(report: &InspectReport<'_>) -> String {
    let highlight = report.highlight;
    let mut out = void_block(report.void);

    let highlighted = if highlight.highlighted_atom_ids.is_empty() {
        "none".to_string()
    } else {
        highlight.highlighted_atom_ids.join(", ")
    };
    out.push_str(&format!("\nHighlighted cell atoms: {}\n", highlighted));

    if highlight.external_atoms.is_empty() {
        out.push_str("External atoms: none\n");
    } else {
        out.push_str(&format!(
            "External atoms ({}):\n",
            highlight.external_atoms.len()
        ));
        for atom in &highlight.external_atoms {
            out.push_str(&atom_line(atom, None));
        }
    }

    out.push_str("Connectors:\n");
    for connector in &highlight.connectors {
        out.push_str(&format!(
            "  {} -> {}  length {:.4}\n",
            fmt_point(&connector.from),
            fmt_point(&connector.to),
            connector.length()
        ));
    }
    out
}
