//! CSV ingestion of site records.
//!
//! A header-bearing comma-delimited file where each data row carries at least
//! nine fields: id, latitude, longitude, depth, mean flow, flow variance,
//! rated power, observed removal rate, max intake flow. Blank lines and rows
//! with fewer than nine fields are silently skipped; a malformed numeric
//! field in an otherwise well-formed row is fatal.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::domain::SiteRecord;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read site file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: invalid value {value:?} for field {field}")]
    BadNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
}

/// Load all site records from a CSV file. The first line is treated as a
/// header and discarded.
pub fn load_sites(path: impl AsRef<Path>) -> Result<Vec<SiteRecord>, IngestError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut sites = Vec::new();
    // Line numbers are 1-based and include the header
    for (idx, line) in content.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 9 {
            debug!(line = line_no, count = fields.len(), "skipping short row");
            continue;
        }

        sites.push(SiteRecord {
            site_id: fields[0].trim().to_string(),
            latitude_deg: parse_field(line_no, "latitude_deg", fields[1])?,
            longitude_deg: parse_field(line_no, "longitude_deg", fields[2])?,
            depth_m: parse_field(line_no, "depth_m", fields[3])?,
            mean_flow_m_s: parse_field(line_no, "mean_flow_m_s", fields[4])?,
            flow_variance_m2_s2: parse_field(line_no, "flow_variance_m2_s2", fields[5])?,
            rated_power_kw: parse_field(line_no, "rated_power_kw", fields[6])?,
            observed_removal_kg_h: parse_field(line_no, "observed_removal_kg_h", fields[7])?,
            max_intake_flow_m_s: parse_field(line_no, "max_intake_flow_m_s", fields[8])?,
        });
    }

    Ok(sites)
}

fn parse_field(line: usize, field: &'static str, raw: &str) -> Result<f64, IngestError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| IngestError::BadNumber {
            line,
            field,
            value: raw.trim().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_well_formed_rows() {
        let file = write_csv(
            "id,lat,lon,depth,flow,var,power,removal,intake\n\
             CN-001,57.70,11.97,4.5,1.2,0.05,18.0,0.4,2.0\n\
             CN-002,57.71,11.98,3.8,0.9,0.03,0.0,0.0,1.5\n",
        );
        let sites = load_sites(file.path()).unwrap();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].site_id, "CN-001");
        assert_eq!(sites[1].rated_power_kw, 0.0);
        assert_eq!(sites[1].max_intake_flow_m_s, 1.5);
    }

    #[test]
    fn test_skips_blank_lines_and_short_rows() {
        let file = write_csv(
            "id,lat,lon,depth,flow,var,power,removal,intake\n\
             \n\
             CN-003,only,three\n\
             CN-004,57.7,11.9,4.0,1.0,0.02,10.0,0.2,1.8\n",
        );
        let sites = load_sites(file.path()).unwrap();
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].site_id, "CN-004");
    }

    #[test]
    fn test_header_only_file_yields_empty() {
        let file = write_csv("id,lat,lon,depth,flow,var,power,removal,intake\n");
        assert!(load_sites(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_numeric_field_is_fatal() {
        let file = write_csv(
            "id,lat,lon,depth,flow,var,power,removal,intake\n\
             CN-005,57.7,11.9,4.0,not-a-number,0.02,10.0,0.2,1.8\n",
        );
        let err = load_sites(file.path()).unwrap_err();
        match err {
            IngestError::BadNumber { line, field, value } => {
                assert_eq!(line, 2);
                assert_eq!(field, "mean_flow_m_s");
                assert_eq!(value, "not-a-number");
            }
            other => panic!("expected BadNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_sites("/nonexistent/sites.csv").unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let file = write_csv(
            "id,lat,lon,depth,flow,var,power,removal,intake\n\
             CN-006 , 57.7 , 11.9 , 4.0 , 1.0 , 0.02 , 10.0 , 0.2 , 1.8\n",
        );
        let sites = load_sites(file.path()).unwrap();
        assert_eq!(sites[0].site_id, "CN-006");
        assert_eq!(sites[0].latitude_deg, 57.7);
    }
}
