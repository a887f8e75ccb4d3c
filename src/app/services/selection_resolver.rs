//! Selection resolution
//!
//! Turns a [`SelectionKey`] into the active record of the current collection.
//! A key that matches nothing is an error: the resolver never falls back to
//! the first record.

use crate::app::models::{HotspotRecord, SelectionKey};
use crate::{Error, Result};
use tracing::debug;

/// A resolved record together with its position in the source collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedRecord<'a> {
    pub index: usize,
    pub record: &'a HotspotRecord,
}

/// Outcome of resolving a selection key
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SelectedState<'a> {
    pub active: Option<SelectedRecord<'a>>,
}

impl<'a> SelectedState<'a> {
    pub fn none() -> Self {
        Self { active: None }
    }

    pub fn record(&self) -> Option<&'a HotspotRecord> {
        self.active.map(|selected| selected.record)
    }

    pub fn index(&self) -> Option<usize> {
        self.active.map(|selected| selected.index)
    }

    pub fn is_none(&self) -> bool {
        self.active.is_none()
    }
}

/// Resolve a selection key against an ordered record collection
///
/// Duplicate keys resolve to the first record in insertion order; callers
/// that need uniqueness must dedupe upstream.
pub fn resolve<'a>(records: &'a [HotspotRecord], key: &SelectionKey) -> Result<SelectedState<'a>> {
    if key.is_show_all() {
        return Ok(SelectedState::none());
    }

    let (index, record) = records
        .iter()
        .enumerate()
        .find(|(_, record)| record.matches(key))
        .ok_or_else(|| Error::not_found(key.key_label()))?;

    debug!(
        "Resolved selection '{}' to hotspot {} at position {}",
        key, record.id, index
    );

    Ok(SelectedState {
        active: Some(SelectedRecord { index, record }),
    })
}
