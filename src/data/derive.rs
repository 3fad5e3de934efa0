use std::collections::BTreeMap;

use super::model::PackageDataset;

// ---------------------------------------------------------------------------
// Layer splitting
// ---------------------------------------------------------------------------

/// Placeholder for a layer that the upstream data did not provide.
pub const MISSING_LAYER: &str = "None";

/// The fixed layer names, in the order they appear in the material lists.
pub const LAYERS: [&str; 3] = ["cladding", "membrane", "insulation"];

/// Wall or roof. Determines which material list a layer column reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Wall,
    Roof,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Roof, Category::Wall];

    pub fn prefix(self) -> &'static str {
        match self {
            Category::Wall => "wall",
            Category::Roof => "roof",
        }
    }
}

/// Column name for one (category, layer) pair, e.g. `wall_insulation`.
pub fn layer_column(category: Category, layer_idx: usize) -> String {
    format!("{}_{}", category.prefix(), LAYERS[layer_idx])
}

/// The six categorical layer-column names in display order
/// (roof first, matching the parallel-coordinates axis order).
pub fn layer_columns() -> Vec<String> {
    Category::ALL
        .iter()
        .flat_map(|&cat| (0..LAYERS.len()).map(move |i| layer_column(cat, i)))
        .collect()
}

// ---------------------------------------------------------------------------
// Derived columns
// ---------------------------------------------------------------------------

/// Ordinal encoding of one categorical column: distinct values sorted
/// lexicographically, each mapped to its position. Used only to place
/// categorical axes on the numeric parallel-coordinates plot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrdinalEncoding {
    /// Distinct values in encoding order; `values[i]` has ordinal `i`.
    pub values: Vec<String>,
    index: BTreeMap<String, usize>,
}

impl OrdinalEncoding {
    fn from_column(column_values: impl Iterator<Item = String>) -> Self {
        let mut index = BTreeMap::new();
        for v in column_values {
            index.entry(v).or_insert(0);
        }
        // BTreeMap iteration is already lexicographic.
        let values: Vec<String> = index.keys().cloned().collect();
        for (i, v) in values.iter().enumerate() {
            index.insert(v.clone(), i);
        }
        OrdinalEncoding { values, index }
    }

    pub fn ordinal(&self, value: &str) -> Option<usize> {
        self.index.get(value).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// All derived columns for one dataset: per-row layer values and the
/// per-column ordinal encodings. Recomputed whenever the dataset changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedColumns {
    /// column name → per-row values (same row order as the dataset).
    pub layers: BTreeMap<String, Vec<String>>,
    /// column name → ordinal encoding of its distinct values.
    pub encodings: BTreeMap<String, OrdinalEncoding>,
}

impl DerivedColumns {
    /// Ordinal for row `row` of column `column`, as an axis position.
    pub fn axis_value(&self, column: &str, row: usize) -> Option<f64> {
        let value = self.layers.get(column)?.get(row)?;
        let ord = self.encodings.get(column)?.ordinal(value)?;
        Some(ord as f64)
    }
}

/// Split the ordered material lists into named layer columns and build
/// the ordinal encodings.
///
/// Lists shorter than three entries are tolerated: missing positions get
/// the `"None"` sentinel. Pure function of the dataset, so deriving the
/// same records twice yields identical output.
pub fn derive_columns(dataset: &PackageDataset) -> DerivedColumns {
    let mut layers: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for &category in &Category::ALL {
        for layer_idx in 0..LAYERS.len() {
            let column = layer_column(category, layer_idx);
            let values: Vec<String> = dataset
                .records
                .iter()
                .map(|r| {
                    let materials = match category {
                        Category::Wall => &r.wall_materials,
                        Category::Roof => &r.roof_materials,
                    };
                    materials
                        .get(layer_idx)
                        .cloned()
                        .unwrap_or_else(|| MISSING_LAYER.to_string())
                })
                .collect();
            layers.insert(column, values);
        }
    }

    let encodings = layers
        .iter()
        .map(|(col, vals)| {
            (
                col.clone(),
                OrdinalEncoding::from_column(vals.iter().cloned()),
            )
        })
        .collect();

    DerivedColumns { layers, encodings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{PackageDataset, PackageRecord};

    fn record(package: &str, wall: &[&str], roof: &[&str]) -> PackageRecord {
        PackageRecord {
            package: package.to_string(),
            wall_materials: wall.iter().map(|s| s.to_string()).collect(),
            roof_materials: roof.iter().map(|s| s.to_string()).collect(),
            wall_materials_str: wall.join(", "),
            roof_materials_str: roof.join(", "),
            heating_demand_kwh_per_m2: 50.0,
            gwp_kgco2e: 1000.0,
            cost_sek: 100_000.0,
        }
    }

    #[test]
    fn splits_three_layers_into_columns() {
        let ds = PackageDataset::new(vec![record(
            "p1",
            &["brick", "pe_foil", "rockwool"],
            &["tile", "bitumen", "cellulose"],
        )]);
        let derived = derive_columns(&ds);

        assert_eq!(derived.layers["wall_cladding"], vec!["brick"]);
        assert_eq!(derived.layers["wall_membrane"], vec!["pe_foil"]);
        assert_eq!(derived.layers["wall_insulation"], vec!["rockwool"]);
        assert_eq!(derived.layers["roof_insulation"], vec!["cellulose"]);
    }

    #[test]
    fn short_lists_get_sentinel() {
        let ds = PackageDataset::new(vec![record("p1", &["brick"], &[])]);
        let derived = derive_columns(&ds);

        assert_eq!(derived.layers["wall_cladding"], vec!["brick"]);
        assert_eq!(derived.layers["wall_membrane"], vec![MISSING_LAYER]);
        assert_eq!(derived.layers["wall_insulation"], vec![MISSING_LAYER]);
        assert_eq!(derived.layers["roof_cladding"], vec![MISSING_LAYER]);
    }

    #[test]
    fn derive_is_idempotent() {
        let ds = PackageDataset::new(vec![
            record("p1", &["wood", "pe_foil", "eps"], &["metal", "bitumen", "wool"]),
            record("p2", &["brick"], &["tile", "bitumen"]),
        ]);
        assert_eq!(derive_columns(&ds), derive_columns(&ds));
    }

    #[test]
    fn encoding_is_lexicographic_regardless_of_row_order() {
        let forward = PackageDataset::new(vec![
            record("p1", &["wood", "m", "i"], &["t", "b", "c"]),
            record("p2", &["brick", "m", "i"], &["t", "b", "c"]),
        ]);
        let reversed = PackageDataset::new(vec![
            record("p2", &["brick", "m", "i"], &["t", "b", "c"]),
            record("p1", &["wood", "m", "i"], &["t", "b", "c"]),
        ]);

        let enc_f = &derive_columns(&forward).encodings["wall_cladding"];
        let enc_r = &derive_columns(&reversed).encodings["wall_cladding"];
        assert_eq!(enc_f, enc_r);
        assert_eq!(enc_f.values, vec!["brick", "wood"]);
        assert_eq!(enc_f.ordinal("brick"), Some(0));
        assert_eq!(enc_f.ordinal("wood"), Some(1));
    }

    #[test]
    fn axis_value_resolves_row_ordinal() {
        let ds = PackageDataset::new(vec![
            record("p1", &["wood", "m", "i"], &["t", "b", "c"]),
            record("p2", &["brick", "m", "i"], &["t", "b", "c"]),
        ]);
        let derived = derive_columns(&ds);
        assert_eq!(derived.axis_value("wall_cladding", 0), Some(1.0));
        assert_eq!(derived.axis_value("wall_cladding", 1), Some(0.0));
        assert_eq!(derived.axis_value("wall_cladding", 99), None);
    }

    #[test]
    fn layer_columns_cover_both_categories() {
        assert_eq!(
            layer_columns(),
            vec![
                "roof_cladding",
                "roof_membrane",
                "roof_insulation",
                "wall_cladding",
                "wall_membrane",
                "wall_insulation",
            ]
        );
    }
}
