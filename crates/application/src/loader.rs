//! Dataset loading and merging
//!
//! Missing files are warnings, never errors: the agents simply receive less
//! context. A file that exists but cannot be parsed aborts the load.

use crate::errors::{ApplicationError, ApplicationResult};
use domain::{DatasetKind, Datasets, Table};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Non-fatal problems met while loading or merging data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataWarning {
    MissingFile { file: String, dir: PathBuf },
    UnknownDataset { key: String },
}

impl fmt::Display for DataWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataWarning::MissingFile { file, dir } => {
                write!(f, "Warning: {} not found in {}", file, dir.display())
            }
            DataWarning::UnknownDataset { key } => write!(f, "Warning: Unknown data type {}", key),
        }
    }
}

/// Outcome of [`load_data`]
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub datasets: Datasets,
    pub warnings: Vec<DataWarning>,
}

/// Load the five datasets from `dir`, skipping (and warning about) absent files
pub fn load_data(dir: &Path) -> ApplicationResult<LoadReport> {
    let mut report = LoadReport::default();

    for kind in DatasetKind::ALL {
        let path = dir.join(kind.file_name());
        if !path.is_file() {
            let warning = DataWarning::MissingFile {
                file: kind.file_name().to_string(),
                dir: dir.to_path_buf(),
            };
            warn!(dataset = kind.key(), "{}", warning);
            report.warnings.push(warning);
            continue;
        }

        let table = read_table(&path)?;
        debug!(
            dataset = kind.key(),
            rows = table.row_count(),
            columns = table.column_count(),
            "Loaded dataset"
        );
        report.datasets.insert(kind, table);
    }

    Ok(report)
}

/// Read every `*.csv` in `dir`, keyed by file stem.
///
/// Unknown stems are kept so that [`update_data`] can report them.
pub fn load_new_data(dir: &Path) -> ApplicationResult<BTreeMap<String, Table>> {
    let entries = fs::read_dir(dir).map_err(|source| ApplicationError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ApplicationError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut new_data = BTreeMap::new();
    for path in paths {
        let Some(key) = path.file_stem().map(|stem| stem.to_string_lossy().to_string()) else {
            continue;
        };
        new_data.insert(key, read_table(&path)?);
    }
    Ok(new_data)
}

/// Append new rows to the matching loaded datasets.
///
/// Keys that do not name a loaded dataset produce one warning each and are
/// ignored. Rows are appended as-is: no deduplication, no shape checks.
pub fn update_data<I>(datasets: &mut Datasets, new_data: I) -> Vec<DataWarning>
where
    I: IntoIterator<Item = (String, Table)>,
{
    let mut warnings = Vec::new();

    for (key, table) in new_data {
        let existing = DatasetKind::from_key(&key).and_then(|kind| datasets.get_mut(kind));
        match existing {
            Some(existing) => {
                let added = table.row_count();
                existing.append(table);
                info!(dataset = %key, "Updated {} with {} new records", key, added);
            }
            None => {
                let warning = DataWarning::UnknownDataset { key };
                warn!("{}", warning);
                warnings.push(warning);
            }
        }
    }

    warnings
}

fn read_table(path: &Path) -> ApplicationResult<Table> {
    let csv_error = |source| ApplicationError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;

    let headers = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(headers, rows))
}
