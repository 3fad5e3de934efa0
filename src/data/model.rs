use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Metric – the three KPIs every package is scored on
// ---------------------------------------------------------------------------

/// One of the three simulation metrics. Lower is better for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    HeatingDemand,
    Gwp,
    Cost,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::HeatingDemand, Metric::Gwp, Metric::Cost];

    /// CSV column name.
    pub fn column(self) -> &'static str {
        match self {
            Metric::HeatingDemand => "heating_demand_kwh_per_m2",
            Metric::Gwp => "gwp_kgco2e",
            Metric::Cost => "cost_sek",
        }
    }

    /// Short label for chart axes and tab headers.
    pub fn label(self) -> &'static str {
        match self {
            Metric::HeatingDemand => "Heating",
            Metric::Gwp => "GWP",
            Metric::Cost => "Cost",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Metric::HeatingDemand => "kWh/m²",
            Metric::Gwp => "kgCO₂e",
            Metric::Cost => "SEK",
        }
    }

    /// Extract this metric's value from a record.
    pub fn value(self, record: &PackageRecord) -> f64 {
        match self {
            Metric::HeatingDemand => record.heating_demand_kwh_per_m2,
            Metric::Gwp => record.gwp_kgco2e,
            Metric::Cost => record.cost_sek,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.unit())
    }
}

// ---------------------------------------------------------------------------
// PackageRecord – one row of the summary CSV
// ---------------------------------------------------------------------------

/// A single retrofit package: one evaluated material combination.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    /// Unique package identifier.
    pub package: String,
    /// Ordered wall layers, semantically `[cladding, membrane, insulation]`.
    pub wall_materials: Vec<String>,
    /// Ordered roof layers, same convention as `wall_materials`.
    pub roof_materials: Vec<String>,
    /// Comma-joined wall layers, precomputed for hover text and tables.
    pub wall_materials_str: String,
    /// Comma-joined roof layers.
    pub roof_materials_str: String,
    pub heating_demand_kwh_per_m2: f64,
    pub gwp_kgco2e: f64,
    pub cost_sek: f64,
}

// ---------------------------------------------------------------------------
// PackageDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Immutable after loading; derived columns and
/// scores live in separate structures keyed by row index.
#[derive(Debug, Clone, Default)]
pub struct PackageDataset {
    pub records: Vec<PackageRecord>,
}

impl PackageDataset {
    pub fn new(records: Vec<PackageRecord>) -> Self {
        PackageDataset { records }
    }

    /// Number of packages.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All values of one metric, in row order.
    pub fn metric_values(&self, metric: Metric) -> Vec<f64> {
        self.records.iter().map(|r| metric.value(r)).collect()
    }
}

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Fatal data-layer errors. Any of these aborts the load or the KPI
/// computation; the UI surfaces them in the status bar.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}, column '{column}': {message}")]
    MalformedRecord {
        /// 1-based data-row number, counted below the header.
        row: usize,
        column: &'static str,
        message: String,
    },

    #[error("dataset contains no records")]
    EmptyDataset,

    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Recoverable ranking errors; the UI shows a warning and skips the
/// ranked table without touching the rest of the page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankError {
    #[error("all importance weights are zero; assign some weight to at least one criterion")]
    NoCriteriaSelected,
}
