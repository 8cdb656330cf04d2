//! Majors table loading (`majors.csv`).
//!
//! Header: `major_id,major_name,major_cabbr,major_type`. Rows are kept in file
//! order because the matcher scans majors in table order.

use admit_model::{MajorRecord, ProgramType};
use serde::Deserialize;

use crate::error::{Result, StandardsError};

#[derive(Debug, Deserialize)]
struct MajorRow {
    #[serde(rename = "major_id")]
    id: String,
    #[serde(rename = "major_name")]
    name: String,
    #[serde(rename = "major_cabbr", default)]
    abbreviation: Option<String>,
    #[serde(rename = "major_type")]
    major_type: String,
}

/// Parse a majors table.
///
/// `source_name` is only used in error messages.
///
/// # Errors
///
/// Fails on malformed CSV and on rows with a blank id, name, or type.
pub fn load_from_str(content: &str, source_name: &str) -> Result<Vec<MajorRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut majors = Vec::new();
    for result in reader.deserialize::<MajorRow>() {
        let row = result.map_err(|source| StandardsError::CsvRead {
            source_name: source_name.to_string(),
            source,
        })?;
        require("major_id", &row.id, source_name)?;
        require("major_name", &row.name, source_name)?;
        require("major_type", &row.major_type, source_name)?;

        majors.push(MajorRecord::new(
            row.id,
            row.name,
            row.abbreviation,
            ProgramType::from(row.major_type),
        ));
    }
    Ok(majors)
}

fn require(field: &'static str, value: &str, source_name: &str) -> Result<()> {
    if value.is_empty() {
        return Err(StandardsError::InvalidValue {
            field,
            value: value.to_string(),
            source_name: source_name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_file_order_and_trims() {
        let csv = "major_id,major_name,major_cabbr,major_type\n\
                   EE , Electrical Engineering ,電機,EE\n\
                   AM,Applied Mathematics,應數,MATH\n";
        let majors = load_from_str(csv, "inline").unwrap();
        assert_eq!(majors.len(), 2);
        assert_eq!(majors[0].id, "EE");
        assert_eq!(majors[0].name, "Electrical Engineering");
        assert_eq!(majors[0].name_upper(), "ELECTRICAL ENGINEERING");
        assert_eq!(majors[0].major_type, ProgramType::Ee);
        assert_eq!(majors[1].abbreviation.as_deref(), Some("應數"));
        assert_eq!(majors[1].major_type, ProgramType::Other("MATH".to_string()));
    }

    #[test]
    fn blank_abbreviation_is_none() {
        let csv = "major_id,major_name,major_cabbr,major_type\nME,Mechanical Engineering,,ME\n";
        let majors = load_from_str(csv, "inline").unwrap();
        assert_eq!(majors[0].abbreviation, None);
    }

    #[test]
    fn rejects_blank_id() {
        let csv = "major_id,major_name,major_cabbr,major_type\n,Physics,物理,PHYS\n";
        let err = load_from_str(csv, "majors.csv").unwrap_err();
        assert!(matches!(err, StandardsError::InvalidValue { field: "major_id", .. }));
    }

    #[test]
    fn reports_missing_column() {
        let csv = "major_id,major_name\nME,Mechanical Engineering\n";
        let err = load_from_str(csv, "majors.csv").unwrap_err();
        assert!(matches!(err, StandardsError::CsvRead { .. }));
    }
}
