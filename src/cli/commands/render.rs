//! Render command: one full render cycle

use super::detail::print_human_detail;
use super::map::print_human_map;
use super::shared::{CommandContext, print_json};
use crate::app::adapters::images::ImageResolver;
use crate::app::services::dashboard::Dashboard;
use crate::cli::args::SelectArgs;
use anyhow::{Context, Result};

pub fn run_render(context: &CommandContext, select: &SelectArgs) -> Result<()> {
    let records = context.load_records()?;
    let key = select.selection_key(context.config.detail.show_all_sentinel());

    let dashboard = Dashboard::from_config(&context.config)?;
    let cycle = dashboard
        .render(&records, &key)
        .with_context(|| format!("Render cycle failed for selection '{}'", key))?;

    if context.is_json() {
        return print_json(&cycle);
    }

    print_human_map(&cycle.map);
    println!();

    let resolver = ImageResolver::new(&context.config.store.image_root);
    let image = cycle
        .detail
        .detail()
        .map(|record_detail| resolver.resolve(&record_detail.image_reference));
    print_human_detail(&cycle.detail, image.as_ref());

    Ok(())
}
