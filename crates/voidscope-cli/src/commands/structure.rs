use crate::cli::{OutputFormat, StructureArgs};
use crate::config::AppConfig;
use crate::error::Result;
use crate::output;
use serde::Serialize;
use tracing::info;
use voidscope::core::models::atom::Atom;
use voidscope::core::models::lattice::LatticeType;
use voidscope::engine::cache::StructureCache;

#[derive(Serialize)]
struct StructureReport<'a> {
    lattice: LatticeType,
    atoms: &'a [Atom],
}

pub fn run(args: StructureArgs, config: &AppConfig) -> Result<String> {
    let mut cache = StructureCache::with_config(config.generation.clone());
    let atoms = cache.atoms_for(args.lattice);
    info!(
        "Generated {} atoms for the {} unit cell.",
        atoms.len(),
        args.lattice
    );

    match args.format {
        OutputFormat::Text => Ok(output::render_structure_text(args.lattice, &atoms)),
        OutputFormat::Json => output::to_json(&StructureReport {
            lattice: args.lattice,
            atoms: &atoms,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::app_config;

    #[test]
    fn json_output_contains_all_fcc_atoms() {
        let args = StructureArgs {
            lattice: LatticeType::Fcc,
            format: OutputFormat::Json,
        };
        let json: serde_json::Value =
            serde_json::from_str(&run(args, &app_config()).unwrap()).unwrap();
        assert_eq!(json["lattice"], "FCC");
        assert_eq!(json["atoms"].as_array().unwrap().len(), 14);
        assert_eq!(json["atoms"][0]["variant"], "corner");
    }

    #[test]
    fn text_output_has_header_and_one_line_per_atom() {
        let args = StructureArgs {
            lattice: LatticeType::Bcc,
            format: OutputFormat::Text,
        };
        let text = run(args, &app_config()).unwrap();
        assert_eq!(text.lines().count(), 10);
    }
}
