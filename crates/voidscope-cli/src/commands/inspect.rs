use crate::cli::{InspectArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::output::{self, InspectReport};
use tracing::{debug, info};
use voidscope::engine::cache::StructureCache;
use voidscope::engine::error::EngineError;
use voidscope::engine::session::ExplorerSession;
use voidscope::engine::view::VoidHighlight;

pub fn run(args: InspectArgs, config: &AppConfig) -> Result<String> {
    let mut session =
        ExplorerSession::with_cache(StructureCache::with_config(config.generation.clone()));
    session.set_lattice(args.selection.lattice);
    session.set_void_type(args.selection.void_type);

    match session.select_void(&args.void_id) {
        Ok(()) => {}
        Err(EngineError::VoidNotFound { .. }) => {
            let structure = session.structure();
            let valid: Vec<&str> = structure.void_ids().collect();
            return Err(CliError::Argument(format!(
                "Unknown void '{}' for {} {}. Valid ids: {}",
                args.void_id,
                args.selection.lattice,
                args.selection.void_type,
                valid.join(", ")
            )));
        }
        Err(e) => return Err(e.into()),
    }

    let structure = session.structure();
    let void = session.selected_void().ok_or_else(|| {
        CliError::Other(anyhow::anyhow!(
            "Selection '{}' vanished after it was accepted",
            args.void_id
        ))
    })?;
    info!("Selected void '{}'.", void.id);

    let highlight = VoidHighlight::for_void(&structure, &void);
    debug!(
        "{} highlighted cell atoms, {} external atoms.",
        highlight.highlighted_atom_ids.len(),
        highlight.external_atoms.len()
    );

    let report = InspectReport {
        void: &void,
        highlight: &highlight,
    };
    match args.format {
        OutputFormat::Text => Ok(output::render_inspect_text(&report)),
        OutputFormat::Json => output::to_json(&report),
    }
}
