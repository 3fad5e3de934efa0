use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use serde::Deserialize;

use super::literal::parse_string_list;
use super::model::{DataError, PackageDataset, PackageRecord};

// ---------------------------------------------------------------------------
// CSV loading
// ---------------------------------------------------------------------------

/// A summary-CSV row before the list columns are decoded. Extra columns
/// in the file are ignored.
#[derive(Debug, Deserialize)]
struct RawRow {
    package: String,
    wall_materials: String,
    roof_materials: String,
    heating_demand_kwh_per_m2: f64,
    gwp_kgco2e: f64,
    cost_sek: f64,
}

const REQUIRED_COLUMNS: [&str; 6] = [
    "package",
    "wall_materials",
    "roof_materials",
    "heating_demand_kwh_per_m2",
    "gwp_kgco2e",
    "cost_sek",
];

/// Load a summary CSV into a [`PackageDataset`].
///
/// Expected layout: header row with at least the six required columns;
/// `wall_materials` / `roof_materials` cells hold list literals such as
/// `['brick', 'membrane_x', 'wool']`. A cell that is not a valid list
/// literal aborts the load with [`DataError::MalformedRecord`].
pub fn load_csv(path: &Path) -> Result<PackageDataset, DataError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(DataError::MissingColumn(col));
        }
    }

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawRow>().enumerate() {
        let raw = result?;

        // Error messages count data rows from 1, matching how users read
        // the file below its header.
        let row_no = i + 1;
        let wall_materials = decode_list(&raw.wall_materials, row_no, "wall_materials")?;
        let roof_materials = decode_list(&raw.roof_materials, row_no, "roof_materials")?;

        records.push(PackageRecord {
            wall_materials_str: wall_materials.join(", "),
            roof_materials_str: roof_materials.join(", "),
            package: raw.package,
            wall_materials,
            roof_materials,
            heating_demand_kwh_per_m2: raw.heating_demand_kwh_per_m2,
            gwp_kgco2e: raw.gwp_kgco2e,
            cost_sek: raw.cost_sek,
        });
    }

    Ok(PackageDataset::new(records))
}

fn decode_list(
    cell: &str,
    row: usize,
    column: &'static str,
) -> Result<Vec<String>, DataError> {
    parse_string_list(cell).map_err(|e| DataError::MalformedRecord {
        row,
        column,
        message: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Process-wide cache
// ---------------------------------------------------------------------------

struct CacheEntry {
    path: PathBuf,
    mtime: SystemTime,
    dataset: Arc<PackageDataset>,
}

static CACHE: Mutex<Option<CacheEntry>> = Mutex::new(None);

/// Load a summary CSV through the process-wide cache.
///
/// The cache is keyed by (path, modification time): repeated calls for
/// an unchanged file return the same `Arc` without touching the disk
/// beyond one `stat`. Replacing the file on disk invalidates the entry
/// on the next call. Callers hold the returned `Arc`, so invalidation
/// never pulls data out from under a live view.
pub fn cached_load(path: &Path) -> Result<Arc<PackageDataset>, DataError> {
    let mtime = std::fs::metadata(path)?.modified()?;

    let mut cache = CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(entry) = cache.as_ref() {
        if entry.path == path && entry.mtime == mtime {
            log::debug!("cache hit for {}", path.display());
            return Ok(Arc::clone(&entry.dataset));
        }
    }

    let dataset = Arc::new(load_csv(path)?);
    log::info!(
        "loaded {} packages from {}",
        dataset.len(),
        path.display()
    );
    *cache = Some(CacheEntry {
        path: path.to_path_buf(),
        mtime,
        dataset: Arc::clone(&dataset),
    });
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("retrofit_dash_{name}_{}.csv", std::process::id()));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    const GOOD_CSV: &str = "\
package,wall_materials,roof_materials,heating_demand_kwh_per_m2,gwp_kgco2e,cost_sek
pkg_001,\"['brick', 'pe_foil', 'rockwool']\",\"['tile', 'bitumen', 'cellulose']\",55.2,12000,480000
pkg_002,\"['wood', 'pe_foil', 'eps']\",\"['metal', 'bitumen', 'rockwool']\",61.8,9500,390000
";

    #[test]
    fn loads_well_formed_file() {
        let path = write_temp_csv("good", GOOD_CSV);
        let ds = load_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ds.len(), 2);
        let first = &ds.records[0];
        assert_eq!(first.package, "pkg_001");
        assert_eq!(first.wall_materials, vec!["brick", "pe_foil", "rockwool"]);
        assert_eq!(first.wall_materials_str, "brick, pe_foil, rockwool");
        assert_eq!(first.gwp_kgco2e, 12000.0);
    }

    #[test]
    fn missing_column_is_reported() {
        let path = write_temp_csv(
            "missing_col",
            "package,wall_materials,heating_demand_kwh_per_m2,gwp_kgco2e,cost_sek\n",
        );
        let err = load_csv(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, DataError::MissingColumn("roof_materials")));
    }

    #[test]
    fn malformed_list_cell_aborts_load() {
        let csv = "\
package,wall_materials,roof_materials,heating_demand_kwh_per_m2,gwp_kgco2e,cost_sek
pkg_001,\"[brick]\",\"['tile']\",55.2,12000,480000
";
        let path = write_temp_csv("malformed", csv);
        let err = load_csv(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        match &err {
            DataError::MalformedRecord { row, column, .. } => {
                // First data row reports as row 1, not 0.
                assert_eq!(*row, 1);
                assert_eq!(*column, "wall_materials");
                assert!(err.to_string().contains("row 1"));
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn cached_load_reuses_parsed_dataset() {
        let path = write_temp_csv("cache", GOOD_CSV);
        let a = cached_load(&path).unwrap();
        let b = cached_load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
