//! Flattened load sheet for display
//!
//! Each room report can be rendered as a list of lines grouped by section,
//! mirroring the load calculation sheets refrigeration contractors fill in.
//! The sheet is a fixed-capacity `heapless::Vec` so it can be produced
//! without an allocator.

use heapless::Vec;

/// Maximum number of lines on one sheet
pub const MAX_SHEET_LINES: usize = 48;

/// Section heading of a sheet line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Section {
    Transmission,
    Product,
    AirChange,
    Door,
    Internal,
    Heaters,
    Summary,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Transmission => "Transmission",
            Self::Product => "Product",
            Self::AirChange => "Air change",
            Self::Door => "Door opening",
            Self::Internal => "Internal",
            Self::Heaters => "Heaters",
            Self::Summary => "Summary",
        }
    }
}

/// One line of the sheet
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LoadLine {
    pub section: Section,
    pub label: &'static str,
    /// Energy per day where it is meaningful (kJ/day)
    pub kj_per_day: Option<f64>,
    /// Load (kW)
    pub kw: f64,
    /// Marks section totals and the final result
    pub is_total: bool,
}

/// Ordered list of load lines
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LoadSheet {
    lines: Vec<LoadLine, MAX_SHEET_LINES>,
}

impl LoadSheet {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a component line
    pub fn line(&mut self, section: Section, label: &'static str, kj_per_day: Option<f64>, kw: f64) {
        self.push(LoadLine { section, label, kj_per_day, kw, is_total: false });
    }

    /// Add a total line
    pub fn total(&mut self, section: Section, label: &'static str, kj_per_day: Option<f64>, kw: f64) {
        self.push(LoadLine { section, label, kj_per_day, kw, is_total: true });
    }

    fn push(&mut self, line: LoadLine) {
        if self.lines.push(line).is_err() {
            log_warn!("Load sheet full, dropping line '{}'", line.label);
        }
    }

    pub fn lines(&self) -> &[LoadLine] {
        &self.lines
    }

    /// Lines belonging to one section
    pub fn section(&self, section: Section) -> impl Iterator<Item = &LoadLine> {
        self.lines.iter().filter(move |l| l.section == section)
    }

    /// Look up a line by label
    pub fn find(&self, label: &str) -> Option<&LoadLine> {
        self.lines.iter().find(|l| l.label == label)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
