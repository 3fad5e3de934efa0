use std::sync::Arc;

use crate::data::derive::{derive_columns, DerivedColumns};
use crate::data::model::{Metric, PackageDataset, RankError};
use crate::data::rank::{rank_packages, ScoredPackage, Weights};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file). Shared with
    /// the loader cache, hence the `Arc`.
    pub dataset: Option<Arc<PackageDataset>>,

    /// Layer columns and ordinal encodings for the current dataset.
    pub derived: DerivedColumns,

    /// Raw slider weights for the multi-criteria selector.
    pub weights: Weights,

    /// How many rows the ranked table shows.
    pub top_n: usize,

    /// Cached ranking for the current dataset and weights; `Err` means
    /// all weights are zero and the UI shows a warning instead.
    pub ranked: Option<Result<Vec<ScoredPackage>, RankError>>,
    ranked_for: Option<Weights>,

    /// Which metric's top-10 tab is open.
    pub top10_tab: Metric,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            derived: DerivedColumns::default(),
            weights: Weights::default(),
            top_n: 6,
            ranked: None,
            ranked_for: None,
            top10_tab: Metric::Gwp,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and rebuild everything derived
    /// from it.
    pub fn set_dataset(&mut self, dataset: Arc<PackageDataset>) {
        self.derived = derive_columns(&dataset);
        self.dataset = Some(dataset);
        self.ranked = None;
        self.ranked_for = None;
        self.status_message = None;
    }

    /// Recompute the ranking if the weights changed since the cached
    /// result. Cheap to call every frame.
    pub fn ensure_ranked(&mut self) {
        let Some(dataset) = &self.dataset else {
            self.ranked = None;
            self.ranked_for = None;
            return;
        };
        if self.ranked_for != Some(self.weights) {
            self.ranked = Some(rank_packages(dataset, self.weights));
            self.ranked_for = Some(self.weights);
        }
    }
}
