//! Radiative widths of the K to N7 levels from Campbell & Papp (2001).
//!
//! The source is a fixed-column ASCII table. Each non-blank line starts
//! with the atomic number, followed by sixteen six-character columns with
//! the widths (eV) of K, L1..L3, M1..M5 and N1..N7. Blank columns mean the
//! width is not tabulated for that element.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use xraydb_core::{
    Element, ParseError, Property, PropertyParser, PropertyRecord, Reference,
};

use crate::notation::subshell_by_iupac;

const COLUMN_WIDTH: usize = 6;

const SUBSHELL_ORDER: [&str; 16] = [
    "K", "L1", "L2", "L3", "M1", "M2", "M3", "M4", "M5", "N1", "N2", "N3", "N4", "N5", "N6", "N7",
];

/// Reference of the Campbell & Papp table.
pub fn campbell_reference() -> Reference {
    Reference {
        author: Some("Campbell, J.L. and Papp, T.".to_string()),
        year: Some("2001".to_string()),
        title: Some("Widths of the atomic K-N7 levels".to_string()),
        booktitle: Some("Atomic Data and Nuclear Data Tables".to_string()),
        pages: Some("1-56".to_string()),
        volume: Some("77".to_string()),
        ..Reference::new("campbell2001")
    }
}

/// Parser over a local copy of the Campbell & Papp table.
pub struct CampbellRadiativeWidthParser {
    path: PathBuf,
}

impl CampbellRadiativeWidthParser {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the table content.
    pub fn parse_str(content: &str) -> Result<Vec<Property>, ParseError> {
        let reference = campbell_reference();
        let mut props = Vec::new();

        for (number, line) in content.lines().enumerate() {
            let line_number = number + 1;
            let line = line.trim_end();
            if line.trim().is_empty() {
                continue;
            }

            let z_field = column(line, line_number, 0)?.unwrap_or_default();
            let z: u8 = z_field.parse().map_err(|_| ParseError::Format {
                line: line_number,
                reason: format!("invalid atomic number '{z_field}'"),
            })?;
            let element = Element::new(z).map_err(|e| ParseError::Format {
                line: line_number,
                reason: e.to_string(),
            })?;

            for (i, label) in SUBSHELL_ORDER.iter().enumerate() {
                let Some(field) = column(line, line_number, i + 1)? else {
                    break;
                };
                if field.is_empty() {
                    continue;
                }

                let value_ev: f64 = field.parse().map_err(|_| ParseError::Format {
                    line: line_number,
                    reason: format!("invalid width '{field}' for {label}"),
                })?;
                let atomic_subshell = subshell_by_iupac(label).ok_or_else(|| {
                    ParseError::Format {
                        line: line_number,
                        reason: format!("unknown subshell {label}"),
                    }
                })?;

                let prop = Property::new(
                    reference.clone(),
                    PropertyRecord::AtomicSubshellRadiativeWidth {
                        element,
                        atomic_subshell,
                        value_ev,
                    },
                );
                debug!(%prop, z, subshell = label, value_ev, "Parsed");
                props.push(prop);
            }
        }

        Ok(props)
    }
}

/// Trimmed content of a fixed-width column, `None` past the end of the line.
///
/// Column offsets are byte offsets, so a multi-byte character straddling a
/// column boundary is a format error.
fn column(line: &str, line_number: usize, index: usize) -> Result<Option<&str>, ParseError> {
    let start = index * COLUMN_WIDTH;
    if start >= line.len() {
        return Ok(None);
    }
    let end = (start + COLUMN_WIDTH).min(line.len());
    line.get(start..end)
        .map(|field| Some(field.trim()))
        .ok_or_else(|| ParseError::Format {
            line: line_number,
            reason: "non-ASCII column".to_string(),
        })
}

impl PropertyParser for CampbellRadiativeWidthParser {
    fn name(&self) -> &str {
        "campbell_radiative_width"
    }

    fn parse(&self) -> Result<Vec<Property>, ParseError> {
        let content = fs::read_to_string(&self.path).map_err(|e| ParseError::Io {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        let props = Self::parse_str(&content)?;
        info!(path = %self.path.display(), count = props.len(), "Parsed Campbell widths");
        Ok(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xraydb_core::AtomicSubshell;

    fn row(z: u8, widths: &[Option<f64>]) -> String {
        let mut line = format!("{z:<6}");
        for width in widths {
            match width {
                Some(w) => line.push_str(&format!("{w:>6.2}")),
                None => line.push_str("      "),
            }
        }
        line
    }

    #[test]
    fn test_parse_rows() {
        let content = format!(
            "{}\n\n{}\n",
            row(10, &[Some(0.24)]),
            row(26, &[Some(1.19), Some(3.6), None, Some(0.59)])
        );
        let props = CampbellRadiativeWidthParser::parse_str(&content).unwrap();
        assert_eq!(props.len(), 4);
        assert!(props.iter().all(|p| p.reference.bibtexkey == "campbell2001"));

        match &props[3].record {
            PropertyRecord::AtomicSubshellRadiativeWidth {
                element,
                atomic_subshell,
                value_ev,
            } => {
                assert_eq!(element.z(), 26);
                assert_eq!(*atomic_subshell, AtomicSubshell::new(2, 1, 3).unwrap());
                assert!((value_ev - 0.59).abs() < 1e-9);
            }
            other => panic!("unexpected record {other:?}"),
        }
    }

    #[test]
    fn test_bad_width_reports_line() {
        let content = format!("{}\n{:<6}   abc", row(10, &[Some(0.24)]), 11);
        let err = CampbellRadiativeWidthParser::parse_str(&content).unwrap_err();
        assert!(matches!(err, ParseError::Format { line: 2, .. }), "{err}");
    }

    #[test]
    fn test_multibyte_character_is_a_format_error() {
        // "µ" is two bytes wide and straddles the K/L1 column boundary
        let content = format!("{}\n{:<6}  1.1µ  2.00", row(10, &[Some(0.24)]), 26);
        let err = CampbellRadiativeWidthParser::parse_str(&content).unwrap_err();
        assert!(
            matches!(&err, ParseError::Format { line: 2, reason } if reason == "non-ASCII column"),
            "{err}"
        );
    }

    #[test]
    fn test_bad_atomic_number() {
        let err = CampbellRadiativeWidthParser::parse_str("0       1.00").unwrap_err();
        assert!(matches!(err, ParseError::Format { line: 1, .. }));
    }

    #[test]
    fn test_missing_file() {
        let parser = CampbellRadiativeWidthParser::new("/nonexistent/campbell.asc");
        assert!(matches!(parser.parse(), Err(ParseError::Io { .. })));
    }
}
