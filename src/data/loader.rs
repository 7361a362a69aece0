use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::model::{Record, SalaryDataset};

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// The only fatal failure in the pipeline: the dataset could not be
/// retrieved or did not conform to the record schema. No partial dataset
/// is usable; the UI surfaces the message and keeps the previous one.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("CSV row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("parsing JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("row {row}: salary {usd} is not a finite number")]
    InvalidSalary { row: usize, usd: f64 },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a salary dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with the record column names (the survey's
///   native format)
/// * `.json` – records-oriented array, `[{ "year": 2024, ... }, ...]`
pub fn load_file(path: &Path) -> Result<SalaryDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    if ext != "csv" && ext != "json" {
        return Err(LoadError::UnsupportedExtension(ext));
    }

    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    match ext.as_str() {
        "csv" => load_csv(file),
        _ => load_json(file),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming the record columns
/// (`year,seniority,contract,company_size,title,usd,remote,residence_iso3`);
/// each subsequent row deserializes into one [`Record`].
fn load_csv<R: Read>(reader: R) -> Result<SalaryDataset, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut records = Vec::new();
    for (row_no, result) in csv_reader.deserialize::<Record>().enumerate() {
        let record = result.map_err(|source| LoadError::Csv { row: row_no, source })?;
        validate_record(row_no, &record)?;
        records.push(record);
    }

    Ok(SalaryDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "year": 2024,
///     "seniority": "senior",
///     "contract": "full-time",
///     "company_size": "medium",
///     "title": "Data Scientist",
///     "usd": 152000.0,
///     "remote": "remote",
///     "residence_iso3": "USA"
///   },
///   ...
/// ]
/// ```
fn load_json<R: Read>(reader: R) -> Result<SalaryDataset, LoadError> {
    let records: Vec<Record> = serde_json::from_reader(reader)?;
    for (row_no, record) in records.iter().enumerate() {
        validate_record(row_no, record)?;
    }
    Ok(SalaryDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Row validation
// ---------------------------------------------------------------------------

/// Serde already guarantees presence and types of every column; the one
/// constraint it cannot express is that the salary must be a finite number.
fn validate_record(row: usize, record: &Record) -> Result<(), LoadError> {
    if !record.usd.is_finite() {
        return Err(LoadError::InvalidSalary {
            row,
            usd: record.usd,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{ColumnValue, FilterColumn};

    const CSV_FIXTURE: &str = "\
year,seniority,contract,company_size,title,usd,remote,residence_iso3
2023,senior,full-time,medium,Data Scientist,152000,remote,USA
2024,junior,full-time,small,Data Analyst,68000,hybrid,DEU
";

    #[test]
    fn csv_round_trip() {
        let ds = load_csv(CSV_FIXTURE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].title, "Data Scientist");
        assert_eq!(ds.records[0].usd, 152_000.0);
        assert_eq!(ds.records[1].residence_iso3, "DEU");
        assert!(ds.distinct_values[&FilterColumn::Year].contains(&ColumnValue::Integer(2024)));
    }

    #[test]
    fn csv_missing_column_fails() {
        let bad = "year,seniority\n2023,senior\n";
        assert!(matches!(
            load_csv(bad.as_bytes()),
            Err(LoadError::Csv { row: 0, .. })
        ));
    }

    #[test]
    fn json_round_trip() {
        let json = r#"[
            {
                "year": 2024,
                "seniority": "senior",
                "contract": "full-time",
                "company_size": "large",
                "title": "ML Engineer",
                "usd": 180000.0,
                "remote": "on-site",
                "residence_iso3": "GBR"
            }
        ]"#;
        let ds = load_json(json.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].remote, "on-site");
    }

    #[test]
    fn json_non_finite_salary_fails() {
        // 1e999 either fails to parse or overflows to +inf; both are load
        // failures, never a dataset with a non-finite salary.
        let json = r#"[
            {
                "year": 2024,
                "seniority": "senior",
                "contract": "full-time",
                "company_size": "large",
                "title": "ML Engineer",
                "usd": 1e999,
                "remote": "remote",
                "residence_iso3": "GBR"
            }
        ]"#;
        let result = load_json(json.as_bytes());
        assert!(matches!(
            result,
            Err(LoadError::InvalidSalary { row: 0, .. }) | Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("salaries.parquet")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedExtension(ext) if ext == "parquet"));
    }

    #[test]
    fn empty_csv_yields_empty_dataset() {
        let csv = "year,seniority,contract,company_size,title,usd,remote,residence_iso3\n";
        let ds = load_csv(csv.as_bytes()).unwrap();
        assert!(ds.is_empty());
    }
}
