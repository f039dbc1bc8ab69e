use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{info, warn};
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::PackageRecord;
use crate::core::utils::{lenient_f64, lenient_u32, truncate_chars};

/// Row limit of the catalog; rows beyond it are dropped, not an error.
pub const CATALOG_CAPACITY: usize = 1000;

/// First-field value that marks a row as a header row. Checked on every
/// row, not just the first one.
const HEADER_TOKEN: &str = "package_id";

// Ordinal-to-field mapping of the tab-separated dataset. Columns not named
// here are ignored.
//
//   column 0  -> id               (truncated to 31 chars)
//   column 1  -> place_name       (truncated to 255 chars)
//   column 2  -> province         (truncated to 127 chars)
//   column 5  -> category         (truncated to 127 chars)
//   column 6  -> duration_days
//   column 8  -> avg_price
//   column 12 -> rating
//   column 13 -> review_count
//   column 14 -> popularity_score
const MAX_ID_CHARS: usize = 31;
const MAX_PLACE_CHARS: usize = 255;
const MAX_PROVINCE_CHARS: usize = 127;
const MAX_CATEGORY_CHARS: usize = 127;

/// Ordered, read-only set of package records. Loaded once at startup and
/// never mutated afterwards; record index is the stable identity used by
/// filtering, scoring and merging.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<PackageRecord>,
}

impl Catalog {
    /// Load a tab-separated dataset file. Fails only if the file cannot be
    /// opened or read; malformed rows degrade to default field values.
    pub fn load(path: &Path) -> Result<Catalog> {
        let file = File::open(path).map_err(|e| {
            Error::new(
                ErrorKind::Io,
                format!("cannot open dataset {}: {}", path.display(), e),
            )
        })?;
        let catalog = Catalog::from_reader(file)?;
        info!(records = catalog.len(), dataset = %path.display(), "catalog loaded");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog> {
        let mut records = Vec::new();
        let mut dropped = 0usize;
        for line in BufReader::new(reader).lines() {
            let line = line?;
            if records.len() >= CATALOG_CAPACITY {
                dropped += 1;
                continue;
            }
            if let Some(record) = parse_row(&line) {
                records.push(record);
            }
        }
        if dropped > 0 {
            warn!(dropped, capacity = CATALOG_CAPACITY, "catalog capacity reached, rows dropped");
        }
        Ok(Catalog { records })
    }

    /// Build a catalog from in-memory records, applying the same capacity
    /// policy as file ingestion.
    pub fn from_records(mut records: Vec<PackageRecord>) -> Catalog {
        records.truncate(CATALOG_CAPACITY);
        Catalog { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PackageRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[PackageRecord] {
        &self.records
    }
}

/// Parse one dataset row. Returns `None` for header rows. Missing or
/// unparsable columns leave the corresponding field at its default.
fn parse_row(line: &str) -> Option<PackageRecord> {
    let mut record = PackageRecord::default();
    for (column, field) in line.split('\t').enumerate() {
        match column {
            0 => {
                if field == HEADER_TOKEN {
                    return None;
                }
                record.id = truncate_chars(field, MAX_ID_CHARS);
            }
            1 => record.place_name = truncate_chars(field, MAX_PLACE_CHARS),
            2 => record.province = truncate_chars(field, MAX_PROVINCE_CHARS),
            5 => record.category = truncate_chars(field, MAX_CATEGORY_CHARS),
            6 => record.duration_days = lenient_u32(field),
            8 => record.avg_price = lenient_f64(field),
            12 => record.rating = lenient_f64(field),
            13 => record.review_count = lenient_u32(field),
            14 => record.popularity_score = lenient_f64(field),
            _ => {}
        }
    }
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> String {
        fields.join("\t")
    }

    fn full_row(id: &str) -> String {
        row(&[
            id, "Hunza Valley", "Gilgit", "x", "x", "Nature", "5", "x", "25000.5",
            "x", "x", "x", "4.7", "320", "8.9",
        ])
    }

    #[test]
    fn parses_mapped_columns() {
        let catalog = Catalog::from_reader(full_row("PKG001").as_bytes()).unwrap();
        assert_eq!(catalog.len(), 1);
        let r = catalog.get(0).unwrap();
        assert_eq!(r.id, "PKG001");
        assert_eq!(r.place_name, "Hunza Valley");
        assert_eq!(r.province, "Gilgit");
        assert_eq!(r.category, "Nature");
        assert_eq!(r.duration_days, 5);
        assert_eq!(r.avg_price, 25000.5);
        assert_eq!(r.rating, 4.7);
        assert_eq!(r.review_count, 320);
        assert_eq!(r.popularity_score, 8.9);
    }

    #[test]
    fn skips_header_rows_anywhere() {
        let input = format!(
            "{}\n{}\n{}\n",
            full_row("PKG001"),
            row(&["package_id", "place_name", "province"]),
            full_row("PKG002"),
        );
        let catalog = Catalog::from_reader(input.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().id, "PKG001");
        assert_eq!(catalog.get(1).unwrap().id, "PKG002");
    }

    #[test]
    fn short_rows_leave_defaults() {
        let catalog = Catalog::from_reader("PKG001\tSkardu".as_bytes()).unwrap();
        let r = catalog.get(0).unwrap();
        assert_eq!(r.id, "PKG001");
        assert_eq!(r.place_name, "Skardu");
        assert_eq!(r.province, "");
        assert_eq!(r.duration_days, 0);
        assert_eq!(r.avg_price, 0.0);
    }

    #[test]
    fn unparsable_numbers_become_zero() {
        let input = row(&[
            "PKG001", "p", "pr", "x", "x", "c", "many", "x", "cheap", "x", "x", "x",
            "great", "n/a", "?",
        ]);
        let r_catalog = Catalog::from_reader(input.as_bytes()).unwrap();
        let r = r_catalog.get(0).unwrap();
        assert_eq!(r.duration_days, 0);
        assert_eq!(r.avg_price, 0.0);
        assert_eq!(r.rating, 0.0);
        assert_eq!(r.review_count, 0);
        assert_eq!(r.popularity_score, 0.0);
    }

    #[test]
    fn long_string_fields_are_truncated() {
        let long = "x".repeat(400);
        let input = row(&[&long, &long, &long, "x", "x", &long]);
        let catalog = Catalog::from_reader(input.as_bytes()).unwrap();
        let r = catalog.get(0).unwrap();
        assert_eq!(r.id.chars().count(), 31);
        assert_eq!(r.place_name.chars().count(), 255);
        assert_eq!(r.province.chars().count(), 127);
        assert_eq!(r.category.chars().count(), 127);
    }

    #[test]
    fn rows_beyond_capacity_are_dropped() {
        let mut input = String::new();
        for i in 0..CATALOG_CAPACITY + 25 {
            input.push_str(&full_row(&format!("PKG{i:04}")));
            input.push('\n');
        }
        let catalog = Catalog::from_reader(input.as_bytes()).unwrap();
        assert_eq!(catalog.len(), CATALOG_CAPACITY);
    }

    #[test]
    fn empty_or_header_only_source_yields_empty_catalog() {
        assert!(Catalog::from_reader("".as_bytes()).unwrap().is_empty());
        let header_only = row(&["package_id", "place_name"]);
        assert!(Catalog::from_reader(header_only.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Catalog::load(Path::new("/nonexistent/dataset.txt")).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Io));
    }
}
