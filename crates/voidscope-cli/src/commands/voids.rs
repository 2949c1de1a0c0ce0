use crate::cli::{OutputFormat, VoidsArgs};
use crate::config::AppConfig;
use crate::error::Result;
use crate::output;
use tracing::info;
use voidscope::engine::cache::StructureCache;

pub fn run(args: VoidsArgs, config: &AppConfig) -> Result<String> {
    let (lattice, void_type) = (args.selection.lattice, args.selection.void_type);
    let mut cache = StructureCache::with_config(config.generation.clone());
    let data = cache.get_or_generate(lattice, void_type);
    info!(
        "Resolved {} {} {} voids.",
        data.voids.len(),
        lattice,
        void_type
    );

    match args.format {
        OutputFormat::Text => Ok(output::render_voids_text(&data)),
        OutputFormat::Json => output::to_json(&*data),
    }
}
