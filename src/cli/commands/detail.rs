//! Detail command: print the detail panel for one hotspot

use super::shared::{CommandContext, print_json};
use crate::app::adapters::images::{ImageHandle, ImageResolver};
use crate::app::services::detail_formatter::{DetailFormatter, DetailView};
use crate::app::services::selection_resolver;
use crate::cli::args::SelectArgs;
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct DetailOutput<'a> {
    detail: &'a DetailView,
    image: Option<ImageHandle>,
}

pub fn run_detail(context: &CommandContext, select: &SelectArgs) -> Result<()> {
    let records = context.load_records()?;
    let key = select.selection_key(context.config.detail.show_all_sentinel());

    let selected = selection_resolver::resolve(&records, &key)
        .with_context(|| format!("Cannot select hotspot '{}'", key))?;
    let detail = DetailFormatter::new(context.config.detail.locale).format(selected.record());

    let resolver = ImageResolver::new(&context.config.store.image_root);
    let image = detail
        .detail()
        .map(|record_detail| resolver.resolve(&record_detail.image_reference));

    if context.is_json() {
        print_json(&DetailOutput {
            detail: &detail,
            image,
        })
    } else {
        print_human_detail(&detail, image.as_ref());
        Ok(())
    }
}

pub(crate) fn print_human_detail(detail: &DetailView, image: Option<&ImageHandle>) {
    let Some(record_detail) = detail.detail() else {
        println!("{}", "No hotspot selected".dimmed());
        return;
    };

    println!("{}", record_detail.title.bold());
    for field in &record_detail.fields {
        println!("  {}: {}", field.label.bold(), field.value);
    }

    match image {
        Some(ImageHandle::Local(path)) => println!("  Image: {}", path.display()),
        Some(ImageHandle::Remote(url)) => println!("  Image: {}", url),
        Some(ImageHandle::Missing(path)) => {
            println!("  {}", format!("Image not found: {}", path.display()).yellow())
        }
        Some(ImageHandle::Unspecified) | None => {}
    }
}
