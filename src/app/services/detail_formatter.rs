//! Detail view formatting for the selected hotspot

use crate::app::models::HotspotRecord;
use crate::constants::{SHOW_ALL_SENTINEL, SHOW_ALL_SENTINEL_MALAY};
use serde::{Deserialize, Serialize};

/// Label language of the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Malay,
}

struct FieldLabels {
    name: &'static str,
    latitude: &'static str,
    longitude: &'static str,
    status: &'static str,
    notes: &'static str,
}

const ENGLISH_LABELS: FieldLabels = FieldLabels {
    name: "Name",
    latitude: "Latitude",
    longitude: "Longitude",
    status: "Status",
    notes: "Notes",
};

const MALAY_LABELS: FieldLabels = FieldLabels {
    name: "Nama",
    latitude: "Latitud",
    longitude: "Longitud",
    status: "Status",
    notes: "Catatan",
};

impl Locale {
    fn labels(&self) -> &'static FieldLabels {
        match self {
            Locale::English => &ENGLISH_LABELS,
            Locale::Malay => &MALAY_LABELS,
        }
    }

    /// Selectbox label meaning "no selection" in this language
    pub fn show_all_sentinel(&self) -> &'static str {
        match self {
            Locale::English => SHOW_ALL_SENTINEL,
            Locale::Malay => SHOW_ALL_SENTINEL_MALAY,
        }
    }
}

/// One label/value line of a detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// Detail of a single record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordDetail {
    pub title: String,
    pub fields: Vec<DetailField>,
    /// Unresolved; the caller looks the image up
    pub image_reference: String,
}

/// Formatted detail panel content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DetailView {
    /// Nothing selected; the display decides whether to show a placeholder
    Empty,
    Record(RecordDetail),
}

impl DetailView {
    pub fn is_empty(&self) -> bool {
        matches!(self, DetailView::Empty)
    }

    pub fn detail(&self) -> Option<&RecordDetail> {
        match self {
            DetailView::Empty => None,
            DetailView::Record(detail) => Some(detail),
        }
    }

    /// Look up a field value by its label
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.detail()?
            .fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }
}

/// Formats records into label/value detail views
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailFormatter {
    locale: Locale,
}

impl DetailFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Format the active record, or the empty view when there is none
    ///
    /// Empty status and notes pass through as empty strings.
    pub fn format(&self, record: Option<&HotspotRecord>) -> DetailView {
        let Some(record) = record else {
            return DetailView::Empty;
        };

        let labels = self.locale.labels();
        let fields = vec![
            DetailField {
                label: labels.name,
                value: record.name.clone(),
            },
            DetailField {
                label: labels.latitude,
                value: record.latitude.to_string(),
            },
            DetailField {
                label: labels.longitude,
                value: record.longitude.to_string(),
            },
            DetailField {
                label: labels.status,
                value: record.status.clone(),
            },
            DetailField {
                label: labels.notes,
                value: record.notes.clone(),
            },
        ];

        DetailView::Record(RecordDetail {
            title: record.name.clone(),
            fields,
            image_reference: record.image_reference.clone(),
        })
    }
}
