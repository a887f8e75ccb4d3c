//! Map command: print the map descriptor for the current selection

use super::shared::{CommandContext, print_json};
use crate::app::services::map_projector::{MapProjection, MapProjector};
use crate::app::services::selection_resolver;
use crate::cli::args::SelectArgs;
use anyhow::{Context, Result};
use colored::*;
use tracing::info;

pub fn run_map(context: &CommandContext, select: &SelectArgs) -> Result<()> {
    let records = context.load_records()?;
    let key = select.selection_key(context.config.detail.show_all_sentinel());

    let projector = MapProjector::from_settings(&context.config.map)?;
    let selected = selection_resolver::resolve(&records, &key)
        .with_context(|| format!("Cannot select hotspot '{}'", key))?;
    let projection = projector.project(&records, &selected)?;

    info!(
        "Map projected: {} markers, {} warnings",
        projection.descriptor.markers.len(),
        projection.warnings.len()
    );

    if context.is_json() {
        print_json(&projection)
    } else {
        print_human_map(&projection);
        Ok(())
    }
}

pub(crate) fn print_human_map(projection: &MapProjection) {
    let descriptor = &projection.descriptor;

    println!("{}", "Hotspot Map".bold());
    println!("{}", "===========".bold());
    println!("Center:  {}", descriptor.center);
    println!("Zoom:    {}", descriptor.zoom);
    println!(
        "Tiles:   {} ({})",
        descriptor.tile_source.url_template, descriptor.tile_source.attribution
    );
    println!();

    println!("{} ({})", "Markers".bold(), descriptor.markers.len());
    for marker in &descriptor.markers {
        let line = format!(
            "  [{}] {} at {} - {}",
            marker.color, marker.tooltip, marker.position, marker.record_id
        );
        if marker.selected {
            println!("{} {}", line.green().bold(), "(selected)".green());
        } else {
            println!("{}", line);
        }
    }

    if !projection.warnings.is_empty() {
        println!();
        println!("{} ({})", "Warnings".yellow().bold(), projection.warnings.len());
        for warning in &projection.warnings {
            println!("  {}", warning.to_string().yellow());
        }
    }
}
