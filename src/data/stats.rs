use super::model::{DataError, Metric, PackageDataset};

/// Summary of one metric over the whole dataset, used by the KPI cards
/// and the key-insights note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSummary {
    pub min: f64,
    pub max: f64,
    pub median: f64,
    /// Row index of the best (lowest-metric) package.
    pub best: usize,
}

/// Compute min/max/median and the argmin row for one metric.
///
/// An empty dataset is a precondition violation: the dashboard has no
/// meaningful content without at least one record.
pub fn metric_summary(
    dataset: &PackageDataset,
    metric: Metric,
) -> Result<MetricSummary, DataError> {
    if dataset.is_empty() {
        return Err(DataError::EmptyDataset);
    }

    let values = dataset.metric_values(metric);

    let mut best = 0;
    let mut min = values[0];
    let mut max = values[0];
    for (i, &v) in values.iter().enumerate() {
        if v < min {
            min = v;
            best = i;
        }
        if v > max {
            max = v;
        }
    }

    Ok(MetricSummary {
        min,
        max,
        median: median(values),
        best,
    })
}

fn median(mut values: Vec<f64>) -> f64 {
    values.sort_by(|a, b| a.total_cmp(b));
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{PackageDataset, PackageRecord};

    fn record(package: &str, gwp: f64) -> PackageRecord {
        PackageRecord {
            package: package.to_string(),
            wall_materials: vec![],
            roof_materials: vec![],
            wall_materials_str: String::new(),
            roof_materials_str: String::new(),
            heating_demand_kwh_per_m2: 0.0,
            gwp_kgco2e: gwp,
            cost_sek: 0.0,
        }
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let err = metric_summary(&PackageDataset::default(), Metric::Gwp).unwrap_err();
        assert!(matches!(err, DataError::EmptyDataset));
    }

    #[test]
    fn summary_of_odd_count() {
        let ds = PackageDataset::new(vec![
            record("a", 30.0),
            record("b", 10.0),
            record("c", 20.0),
        ]);
        let s = metric_summary(&ds, Metric::Gwp).unwrap();
        assert_eq!(s.min, 10.0);
        assert_eq!(s.max, 30.0);
        assert_eq!(s.median, 20.0);
        assert_eq!(s.best, 1);
    }

    #[test]
    fn summary_of_even_count_interpolates_median() {
        let ds = PackageDataset::new(vec![
            record("a", 10.0),
            record("b", 20.0),
            record("c", 30.0),
            record("d", 40.0),
        ]);
        let s = metric_summary(&ds, Metric::Gwp).unwrap();
        assert_eq!(s.median, 25.0);
        assert_eq!(s.best, 0);
    }

    #[test]
    fn argmin_prefers_first_of_tied_minima() {
        let ds = PackageDataset::new(vec![
            record("a", 10.0),
            record("b", 10.0),
            record("c", 20.0),
        ]);
        let s = metric_summary(&ds, Metric::Gwp).unwrap();
        assert_eq!(s.best, 0);
    }
}
