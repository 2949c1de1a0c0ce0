use crate::cli::ExplainArgs;
use crate::config::AppConfig;
use crate::error::Result;
use crate::explain::{self, ExplanationSource};
use tracing::info;

pub async fn run(args: ExplainArgs, config: &AppConfig) -> Result<String> {
    let explanation = explain::explain(
        &config.explain,
        args.selection.lattice,
        args.selection.void_type,
        args.offline,
    )
    .await?;

    if let ExplanationSource::Model(model) = &explanation.source {
        info!("Explanation generated by '{}'.", model);
    }
    Ok(format!(
        "# {} {} voids\n\n{}",
        args.selection.lattice, args.selection.void_type, explanation.text
    ))
}
