//! Render cycle orchestration
//!
//! A [`Dashboard`] holds only validated, immutable options. Each call to
//! [`Dashboard::render`] is an independent render cycle over the record
//! snapshot it is given: resolve the selection, then project the map and
//! format the detail panel from that one resolution.

use crate::app::models::{HotspotRecord, SelectionKey};
use crate::app::services::detail_formatter::{DetailFormatter, DetailView, Locale};
use crate::app::services::map_projector::{MapOptions, MapProjection, MapProjector};
use crate::app::services::selection_resolver;
use crate::config::Config;
use crate::Result;
use serde::Serialize;
use tracing::debug;

/// Output of one render cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderCycle {
    pub selection: SelectionKey,
    pub map: MapProjection,
    pub detail: DetailView,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    projector: MapProjector,
    formatter: DetailFormatter,
}

impl Dashboard {
    pub fn new(options: MapOptions, locale: Locale) -> Self {
        Self {
            projector: MapProjector::new(options),
            formatter: DetailFormatter::new(locale),
        }
    }

    /// Build a dashboard from configuration, validating the map section
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            projector: MapProjector::from_settings(&config.map)?,
            formatter: DetailFormatter::new(config.detail.locale),
        })
    }

    pub fn projector(&self) -> &MapProjector {
        &self.projector
    }

    pub fn formatter(&self) -> &DetailFormatter {
        &self.formatter
    }

    /// Run one render cycle
    pub fn render(&self, records: &[HotspotRecord], key: &SelectionKey) -> Result<RenderCycle> {
        let selected = selection_resolver::resolve(records, key)?;
        let map = self.projector.project(records, &selected)?;
        let detail = self.formatter.format(selected.record());

        debug!(
            "Render cycle for '{}': {} markers, {} warnings",
            key,
            map.descriptor.markers.len(),
            map.warnings.len()
        );

        Ok(RenderCycle {
            selection: key.clone(),
            map,
            detail,
        })
    }
}
