//! Index rebuild: one flat discovery listing per catalog

use crate::commands::{CommandContext, CommandStatus};
use crate::error::Result;
use curator_frontmatter::{load_catalog, FullParser, INDEX_FILE_NAME};
use curator_index::IndexBuilder;
use tracing::warn;

/// Rebuild the catalog index file
pub fn execute_index(ctx: &CommandContext) -> Result<CommandStatus> {
    let outcome = load_catalog(&ctx.patterns_dir, &FullParser::new())?;

    for (path, error) in &outcome.parse_failures {
        warn!(path = %path.display(), error = %error, "record left out of index");
    }

    let index_path = ctx.patterns_dir.join(INDEX_FILE_NAME);
    IndexBuilder::write(&outcome.catalog, &index_path)?;

    ctx.formatter.success(&format!(
        "indexed {} record(s) to {}",
        outcome.catalog.len(),
        index_path.display()
    ));
    Ok(CommandStatus::Clean)
}
