use super::model::{Metric, PackageDataset, RankError};

// ---------------------------------------------------------------------------
// Importance weights
// ---------------------------------------------------------------------------

/// Raw slider weights for the three criteria. Values come straight from
/// the UI sliders and are normalized here, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub gwp: f64,
    pub cost: f64,
    pub heating: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            gwp: 0.4,
            cost: 0.3,
            heating: 0.3,
        }
    }
}

impl Weights {
    /// Normalize to a convex combination (components sum to 1).
    ///
    /// A non-positive total means no criterion carries weight, which is
    /// a [`RankError::NoCriteriaSelected`] rather than a division.
    pub fn normalized(self) -> Result<Weights, RankError> {
        let total = self.gwp + self.cost + self.heating;
        if total <= 0.0 {
            return Err(RankError::NoCriteriaSelected);
        }
        Ok(Weights {
            gwp: self.gwp / total,
            cost: self.cost / total,
            heating: self.heating / total,
        })
    }
}

// ---------------------------------------------------------------------------
// Fractional ranking
// ---------------------------------------------------------------------------

/// 1-based fractional ranks, ascending: the lowest value gets rank 1,
/// tied values share the average of their positions.
pub fn fractional_ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let mut indexed: Vec<(usize, f64)> = values.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && indexed[j].1 == indexed[j + 1].1 {
            j += 1;
        }
        // Positions i+1..=j+1 are tied; all get their average.
        let avg_rank = (i + 1 + j + 1) as f64 / 2.0;
        for k in i..=j {
            ranks[indexed[k].0] = avg_rank;
        }
        i = j + 1;
    }
    ranks
}

// ---------------------------------------------------------------------------
// Composite scoring
// ---------------------------------------------------------------------------

/// A row index paired with its composite score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredPackage {
    pub row: usize,
    pub score: f64,
}

/// Rank every package by the weighted sum of its per-metric fractional
/// ranks and return all rows sorted ascending by score (best first).
///
/// The caller truncates to its preferred top-N; the dataset itself is
/// not mutated.
pub fn rank_packages(
    dataset: &PackageDataset,
    weights: Weights,
) -> Result<Vec<ScoredPackage>, RankError> {
    let w = weights.normalized()?;

    let gwp_ranks = fractional_ranks(&dataset.metric_values(Metric::Gwp));
    let cost_ranks = fractional_ranks(&dataset.metric_values(Metric::Cost));
    let heat_ranks = fractional_ranks(&dataset.metric_values(Metric::HeatingDemand));

    let mut scored: Vec<ScoredPackage> = (0..dataset.len())
        .map(|row| ScoredPackage {
            row,
            score: gwp_ranks[row] * w.gwp
                + cost_ranks[row] * w.cost
                + heat_ranks[row] * w.heating,
        })
        .collect();

    // Stable sort keeps row order among exact score ties deterministic.
    scored.sort_by(|a, b| a.score.total_cmp(&b.score));
    Ok(scored)
}

/// Row indices of the dataset sorted ascending by one metric. Used for
/// the per-metric top-10 tables and the KPI cards.
pub fn sorted_by_metric(dataset: &PackageDataset, metric: Metric) -> Vec<usize> {
    let values = dataset.metric_values(metric);
    let mut rows: Vec<usize> = (0..values.len()).collect();
    rows.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{PackageDataset, PackageRecord};

    fn record(package: &str, gwp: f64, cost: f64, heat: f64) -> PackageRecord {
        PackageRecord {
            package: package.to_string(),
            wall_materials: vec![],
            roof_materials: vec![],
            wall_materials_str: String::new(),
            roof_materials_str: String::new(),
            heating_demand_kwh_per_m2: heat,
            gwp_kgco2e: gwp,
            cost_sek: cost,
        }
    }

    fn abc_dataset() -> PackageDataset {
        PackageDataset::new(vec![
            record("A", 10.0, 100.0, 50.0),
            record("B", 20.0, 50.0, 40.0),
            record("C", 15.0, 75.0, 45.0),
        ])
    }

    #[test]
    fn normalization_sums_to_one() {
        let cases = [
            (0.4, 0.3, 0.3),
            (1.0, 0.0, 0.0),
            (0.01, 0.99, 0.5),
            (3.0, 2.0, 1.0),
        ];
        for (g, c, h) in cases {
            let w = Weights { gwp: g, cost: c, heating: h }.normalized().unwrap();
            assert!((w.gwp + w.cost + w.heating - 1.0).abs() < 1e-12);
            assert!(w.gwp >= 0.0 && w.cost >= 0.0 && w.heating >= 0.0);
        }
    }

    #[test]
    fn zero_weights_signal_no_criteria() {
        let err = Weights { gwp: 0.0, cost: 0.0, heating: 0.0 }
            .normalized()
            .unwrap_err();
        assert_eq!(err, RankError::NoCriteriaSelected);

        let err = rank_packages(&abc_dataset(), Weights { gwp: 0.0, cost: 0.0, heating: 0.0 })
            .unwrap_err();
        assert_eq!(err, RankError::NoCriteriaSelected);
    }

    #[test]
    fn fractional_ranks_average_ties() {
        let ranks = fractional_ranks(&[10.0, 20.0, 10.0, 30.0]);
        // 10.0 ties for positions 1 and 2 → 1.5 each.
        assert_eq!(ranks, vec![1.5, 3.0, 1.5, 4.0]);
    }

    #[test]
    fn fractional_ranks_empty_input() {
        assert!(fractional_ranks(&[]).is_empty());
    }

    #[test]
    fn single_criterion_matches_metric_sort() {
        let ds = abc_dataset();
        let scored = rank_packages(&ds, Weights { gwp: 1.0, cost: 0.0, heating: 0.0 }).unwrap();
        let order: Vec<&str> = scored
            .iter()
            .map(|s| ds.records[s.row].package.as_str())
            .collect();
        // Ascending gwp: A (10), C (15), B (20).
        assert_eq!(order, vec!["A", "C", "B"]);

        let by_metric = sorted_by_metric(&ds, Metric::Gwp);
        let sorted_order: Vec<usize> = scored.iter().map(|s| s.row).collect();
        assert_eq!(sorted_order, by_metric);
    }

    #[test]
    fn unnormalized_weights_rank_like_normalized() {
        let ds = abc_dataset();
        let a = rank_packages(&ds, Weights { gwp: 0.4, cost: 0.3, heating: 0.3 }).unwrap();
        let b = rank_packages(&ds, Weights { gwp: 4.0, cost: 3.0, heating: 3.0 }).unwrap();
        let rows_a: Vec<usize> = a.iter().map(|s| s.row).collect();
        let rows_b: Vec<usize> = b.iter().map(|s| s.row).collect();
        assert_eq!(rows_a, rows_b);
        for (x, y) in a.iter().zip(&b) {
            assert!((x.score - y.score).abs() < 1e-12);
        }
    }

    #[test]
    fn scores_are_weighted_rank_sums() {
        let ds = abc_dataset();
        let scored =
            rank_packages(&ds, Weights { gwp: 0.5, cost: 0.5, heating: 0.0 }).unwrap();
        // Ranks: gwp A=1 C=2 B=3; cost B=1 C=2 A=3.
        // Scores: A = 0.5*1 + 0.5*3 = 2.0, B = 2.0, C = 2.0 — full tie;
        // stable sort keeps row order A, B, C.
        let rows: Vec<usize> = scored.iter().map(|s| s.row).collect();
        assert_eq!(rows, vec![0, 1, 2]);
        for s in &scored {
            assert!((s.score - 2.0).abs() < 1e-12);
        }
    }
}
